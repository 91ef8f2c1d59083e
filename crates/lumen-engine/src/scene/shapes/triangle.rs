use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Canvas, DrawContext, Layer, RequestData};

/// Filled triangle payload, vertices in device space.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleRequest {
    pub pos1: Vec2,
    pub pos2: Vec2,
    pub pos3: Vec2,
    pub color: Color,
}

impl Canvas {
    /// Records a filled triangle.
    pub fn draw_triangle(
        &mut self,
        ctx: &dyn DrawContext,
        pos1: Vec2,
        pos2: Vec2,
        pos3: Vec2,
        color: Color,
        layer: Layer,
    ) {
        let data = RequestData::Triangle(TriangleRequest {
            pos1: Canvas::apply_translate(ctx, pos1),
            pos2: Canvas::apply_translate(ctx, pos2),
            pos3: Canvas::apply_translate(ctx, pos3),
            color: Canvas::shape_color(ctx, color),
        });
        self.push(Canvas::base_request(ctx, layer, data));
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::Rect;
    use crate::scene::{ContextState, DrawingTarget};

    use super::*;

    #[test]
    fn shape_alpha_composition() {
        let mut ctx = ContextState::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        ctx.set_alpha(0.5);
        let color = Color::new(0.1, 0.2, 0.3, 0.5);

        let mut canvas = Canvas::new(DrawingTarget::Colormap);
        canvas.draw_triangle(
            &ctx,
            Vec2::zero(),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            color,
            Layer::OBJECTS,
        );
        canvas.draw_inverse_ellipse(
            &ctx,
            Vec2::new(50.0, 50.0),
            Vec2::new(20.0, 10.0),
            color,
            Layer::OBJECTS,
        );

        for req in canvas.requests() {
            let shape_color = match &req.data {
                RequestData::Triangle(t) => t.color,
                RequestData::InverseEllipse(e) => e.color,
                other => panic!("unexpected {:?}", other.kind()),
            };
            assert_eq!(shape_color, Color::new(0.1, 0.2, 0.3, 0.25));
        }
    }
}
