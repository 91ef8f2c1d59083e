use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Canvas, DrawContext, DrawingRequest, Layer, RequestData};
use crate::text::{FontAlignment, FontHandle};

/// Text draw payload.
///
/// Rendering is delegated to the font, which turns the string into painter
/// calls at dispatch time.
#[derive(Debug, Clone)]
pub struct TextRequest {
    /// Anchor in device space; meaning depends on `alignment`.
    pub pos: Vec2,
    pub font: FontHandle,
    pub text: String,
    pub alignment: FontAlignment,
}

impl Canvas {
    /// Records a text draw command.
    pub fn draw_text(
        &mut self,
        ctx: &dyn DrawContext,
        font: &FontHandle,
        text: impl Into<String>,
        position: Vec2,
        alignment: FontAlignment,
        layer: Layer,
        color: Color,
    ) {
        let data = RequestData::Text(TextRequest {
            pos: Canvas::apply_translate(ctx, position),
            font: FontHandle::clone(font),
            text: text.into(),
            alignment,
        });
        self.push(DrawingRequest {
            color,
            ..Canvas::base_request(ctx, layer, data)
        });
    }

    /// Records text centered horizontally on the render target.
    ///
    /// `position.x` is an offset from the center line.
    #[inline]
    pub fn draw_center_text(
        &mut self,
        ctx: &dyn DrawContext,
        font: &FontHandle,
        text: impl Into<String>,
        position: Vec2,
        layer: Layer,
        color: Color,
    ) {
        let centered = Vec2::new(position.x + ctx.width() / 2.0, position.y);
        self.draw_text(ctx, font, text, centered, FontAlignment::Center, layer, color);
    }
}
