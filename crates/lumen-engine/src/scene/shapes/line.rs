use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Canvas, DrawContext, Layer, RequestData};

/// Line segment payload, both ends in device space.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRequest {
    pub pos: Vec2,
    pub dest_pos: Vec2,
    pub color: Color,
}

impl Canvas {
    /// Records a line from `pos1` to `pos2`.
    pub fn draw_line(
        &mut self,
        ctx: &dyn DrawContext,
        pos1: Vec2,
        pos2: Vec2,
        color: Color,
        layer: Layer,
    ) {
        let data = RequestData::Line(LineRequest {
            pos: Canvas::apply_translate(ctx, pos1),
            dest_pos: Canvas::apply_translate(ctx, pos2),
            color: Canvas::shape_color(ctx, color),
        });
        self.push(Canvas::base_request(ctx, layer, data));
    }
}
