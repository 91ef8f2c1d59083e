use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Canvas, DrawContext, Layer, RequestData};

/// Fills everything *outside* an ellipse (spotlight / iris effects).
#[derive(Debug, Clone, PartialEq)]
pub struct InverseEllipseRequest {
    /// Ellipse center in device space.
    pub pos: Vec2,
    /// Full width and height of the ellipse.
    pub size: Vec2,
    pub color: Color,
}

impl Canvas {
    /// Records an inverse ellipse centered on `pos`.
    pub fn draw_inverse_ellipse(
        &mut self,
        ctx: &dyn DrawContext,
        pos: Vec2,
        size: Vec2,
        color: Color,
        layer: Layer,
    ) {
        let data = RequestData::InverseEllipse(InverseEllipseRequest {
            pos: Canvas::apply_translate(ctx, pos),
            size: Canvas::scale_size(ctx, size),
            color: Canvas::shape_color(ctx, color),
        });
        self.push(Canvas::base_request(ctx, layer, data));
    }
}
