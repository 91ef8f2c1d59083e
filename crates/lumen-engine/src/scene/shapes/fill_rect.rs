use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{Canvas, DrawContext, Layer, RequestData};

/// Filled (optionally rounded) rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRectRequest {
    /// Top-left in device space.
    pub pos: Vec2,
    pub size: Vec2,
    /// Straight-alpha color with the context alpha already folded in.
    pub color: Color,
    /// Corner radius; `0.0` = sharp corners.
    pub radius: f32,
}

impl Canvas {
    /// Records a filled rectangle from its top-left corner and size.
    #[inline]
    pub fn draw_filled_rect(
        &mut self,
        ctx: &dyn DrawContext,
        topleft: Vec2,
        size: Vec2,
        color: Color,
        layer: Layer,
    ) {
        self.push_fill_rect(ctx, topleft, size, color, 0.0, layer);
    }

    /// Records a filled rectangle.
    #[inline]
    pub fn fill_rect(&mut self, ctx: &dyn DrawContext, rect: Rect, color: Color, layer: Layer) {
        self.push_fill_rect(ctx, rect.origin, rect.size, color, 0.0, layer);
    }

    /// Records a filled rectangle with uniformly rounded corners.
    #[inline]
    pub fn fill_rounded_rect(
        &mut self,
        ctx: &dyn DrawContext,
        rect: Rect,
        color: Color,
        radius: f32,
        layer: Layer,
    ) {
        self.push_fill_rect(ctx, rect.origin, rect.size, color, radius, layer);
    }

    fn push_fill_rect(
        &mut self,
        ctx: &dyn DrawContext,
        topleft: Vec2,
        size: Vec2,
        color: Color,
        radius: f32,
        layer: Layer,
    ) {
        let data = RequestData::FillRect(FillRectRequest {
            pos: Canvas::apply_translate(ctx, topleft),
            size: Canvas::scale_size(ctx, size),
            color: Canvas::shape_color(ctx, color),
            radius: radius.max(0.0),
        });
        self.push(Canvas::base_request(ctx, layer, data));
    }
}

#[cfg(test)]
mod tests {
    use crate::scene::{ContextState, DrawingTarget};

    use super::*;

    fn fill_of(canvas: &Canvas) -> &FillRectRequest {
        let RequestData::FillRect(fill) = &canvas.requests()[0].data else {
            panic!("expected fill rect")
        };
        fill
    }

    #[test]
    fn alpha_is_context_times_color() {
        for (ctx_alpha, color_alpha) in [(1.0, 1.0), (0.5, 0.5), (0.25, 0.8), (0.0, 1.0)] {
            let mut ctx = ContextState::new(Rect::new(0.0, 0.0, 100.0, 100.0));
            ctx.set_alpha(ctx_alpha);
            let mut canvas = Canvas::new(DrawingTarget::Colormap);
            canvas.fill_rect(
                &ctx,
                Rect::new(0.0, 0.0, 5.0, 5.0),
                Color::WHITE.with_alpha(color_alpha),
                Layer::TILES,
            );

            assert_eq!(fill_of(&canvas).color.a, ctx_alpha * color_alpha);
            assert_eq!(canvas.requests()[0].alpha, ctx_alpha);
        }
    }

    #[test]
    fn overloads_agree() {
        let ctx = ContextState::new(Rect::new(4.0, 4.0, 100.0, 100.0));
        let mut a = Canvas::new(DrawingTarget::Colormap);
        let mut b = Canvas::new(DrawingTarget::Colormap);
        a.draw_filled_rect(
            &ctx,
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 4.0),
            Color::BLACK,
            Layer::TILES,
        );
        b.fill_rect(&ctx, Rect::new(1.0, 2.0, 3.0, 4.0), Color::BLACK, Layer::TILES);
        assert_eq!(fill_of(&a), fill_of(&b));
        assert_eq!(fill_of(&a).pos, Vec2::new(5.0, 6.0));
        assert_eq!(fill_of(&a).radius, 0.0);
    }

    #[test]
    fn rounded_rect_keeps_radius() {
        let ctx = ContextState::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut canvas = Canvas::new(DrawingTarget::Colormap);
        canvas.fill_rounded_rect(
            &ctx,
            Rect::new(0.0, 0.0, 30.0, 10.0),
            Color::WHITE,
            4.0,
            Layer::GUI,
        );
        assert_eq!(fill_of(&canvas).radius, 4.0);
    }
}
