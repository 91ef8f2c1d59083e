use super::shapes::fill_rect::FillRectRequest;
use super::shapes::gradient::GradientRequest;
use super::shapes::inverse_ellipse::InverseEllipseRequest;
use super::shapes::light::GetLightRequest;
use super::shapes::line::LineRequest;
use super::shapes::text::TextRequest;
use super::shapes::texture::TextureRequest;
use super::shapes::triangle::TriangleRequest;

/// Type-specific payload of a drawing request.
///
/// Extending the request set:
/// - add a payload module under `scene::shapes::*` with its `Canvas::draw_*` helpers
/// - add a variant here and to [`RequestKind`]
/// - add a matching method to `render::Painter` and a dispatch arm in `Canvas::render`
#[derive(Debug, Clone)]
pub enum RequestData {
    Texture(TextureRequest),
    Gradient(GradientRequest),
    Text(TextRequest),
    FillRect(FillRectRequest),
    InverseEllipse(InverseEllipseRequest),
    Line(LineRequest),
    Triangle(TriangleRequest),
    GetLight(GetLightRequest),
}

/// Payload-free tag of a [`RequestData`] variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RequestKind {
    Texture,
    Gradient,
    Text,
    FillRect,
    InverseEllipse,
    Line,
    Triangle,
    GetLight,
}

impl RequestData {
    #[inline]
    pub fn kind(&self) -> RequestKind {
        match self {
            RequestData::Texture(_) => RequestKind::Texture,
            RequestData::Gradient(_) => RequestKind::Gradient,
            RequestData::Text(_) => RequestKind::Text,
            RequestData::FillRect(_) => RequestKind::FillRect,
            RequestData::InverseEllipse(_) => RequestKind::InverseEllipse,
            RequestData::Line(_) => RequestKind::Line,
            RequestData::Triangle(_) => RequestKind::Triangle,
            RequestData::GetLight(_) => RequestKind::GetLight,
        }
    }
}
