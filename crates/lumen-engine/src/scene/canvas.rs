use crate::coords::Vec2;
use crate::paint::Color;
use crate::render::{Painter, VideoSystem};

use super::{
    CanvasConfig, DrawContext, DrawingRequest, DrawingTarget, Filter, FrameArena, Layer,
    RequestData,
};

/// Outcome of one [`Canvas::render`] pass.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderStats {
    /// Requests handed to the backend.
    pub dispatched: usize,
    /// Requests rejected by the layer filter.
    pub skipped: usize,
}

/// Recorded drawing requests for one frame and one target.
///
/// Requests live in a [`FrameArena`] owned by the canvas. They are created by
/// the `draw_*` helpers (see `scene::shapes`), sorted and flushed by
/// [`render`](Self::render), and dropped in bulk by [`clear`](Self::clear).
///
/// Per frame:
///
/// ```ignore
/// canvas.fill_rect(&ctx, rect, color, Layer::OBJECTS);
/// canvas.render(&mut video, Filter::NoFilter);
/// canvas.clear();
/// ```
#[derive(Debug)]
pub struct Canvas {
    target: DrawingTarget,
    requests: FrameArena<DrawingRequest>,
    next_order: u32,
    sorted: bool,
}

impl Canvas {
    #[inline]
    pub fn new(target: DrawingTarget) -> Self {
        Self::with_config(target, &CanvasConfig::default())
    }

    pub fn with_config(target: DrawingTarget, config: &CanvasConfig) -> Self {
        Self {
            target,
            requests: FrameArena::with_capacity(config.initial_capacity),
            next_order: 0,
            sorted: true,
        }
    }

    #[inline]
    pub fn target(&self) -> DrawingTarget {
        self.target
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Returns the recorded requests.
    ///
    /// Requests present at the last `render` are in paint order; anything
    /// recorded since then follows in insertion order until the next `render`.
    #[inline]
    pub fn requests(&self) -> &[DrawingRequest] {
        self.requests.as_slice()
    }

    /// Largest number of requests held in a single frame so far.
    #[inline]
    pub fn high_water(&self) -> usize {
        self.requests.high_water()
    }

    /// Maps a world position to device coordinates.
    ///
    /// `transform.apply(pos) + viewport.top_left`. Every position a `draw_*`
    /// helper stores goes through here exactly once.
    #[inline]
    pub fn apply_translate(ctx: &dyn DrawContext, pos: Vec2) -> Vec2 {
        debug_assert!(pos.is_finite(), "non-finite position {pos:?}");
        ctx.transform().apply(pos) + ctx.viewport().origin
    }

    /// Sorts the requests by layer and flushes those admitted by `filter`.
    ///
    /// Equal layers keep insertion order. The buffer itself is left intact,
    /// so several passes with different filters may run before [`clear`](Self::clear).
    pub fn render(&mut self, video: &mut dyn VideoSystem, filter: Filter) -> RenderStats {
        if !self.sorted {
            self.requests.as_mut_slice().sort_by_key(DrawingRequest::key);
            self.sorted = true;
        }

        let target = self.target;
        let mut stats = RenderStats::default();

        for request in &self.requests {
            if !filter.admits(request.layer) {
                stats.skipped += 1;
                continue;
            }

            match &request.data {
                RequestData::Texture(texture) => {
                    painter_for(target, video).draw_texture(request, texture)
                }
                RequestData::Gradient(gradient) => {
                    painter_for(target, video).draw_gradient(request, gradient)
                }
                RequestData::Text(text) => text.font.draw(
                    painter_for(target, video),
                    &text.text,
                    text.pos,
                    text.alignment,
                    request.drawing_effect,
                    request.color,
                    request.alpha,
                ),
                RequestData::FillRect(rect) => {
                    painter_for(target, video).draw_filled_rect(request, rect)
                }
                RequestData::InverseEllipse(ellipse) => {
                    painter_for(target, video).draw_inverse_ellipse(request, ellipse)
                }
                RequestData::Line(line) => painter_for(target, video).draw_line(request, line),
                RequestData::Triangle(triangle) => {
                    painter_for(target, video).draw_triangle(request, triangle)
                }
                RequestData::GetLight(light) => video.lightmap().get_light(request, light),
            }
            stats.dispatched += 1;
        }

        log::trace!(
            "Canvas({:?}): {:?} pass dispatched {} / skipped {}",
            target,
            filter,
            stats.dispatched,
            stats.skipped
        );
        stats
    }

    /// Drops every recorded request and its payload. Keeps capacity for the next frame.
    ///
    /// Idempotent.
    pub fn clear(&mut self) {
        if !self.requests.is_empty() {
            log::trace!("Canvas({:?}): clearing {} requests", self.target, self.requests.len());
        }
        self.requests.reset();
        self.next_order = 0;
        self.sorted = true;
    }

    /// Request skeleton carrying the context's effect and alpha.
    #[inline]
    pub(crate) fn base_request(
        ctx: &dyn DrawContext,
        layer: Layer,
        data: RequestData,
    ) -> DrawingRequest {
        let t = ctx.transform();
        DrawingRequest {
            drawing_effect: t.drawing_effect,
            alpha: t.alpha,
            ..DrawingRequest::new(layer, data)
        }
    }

    /// Folds the context alpha into a per-call shape color.
    #[inline]
    pub(crate) fn shape_color(ctx: &dyn DrawContext, color: Color) -> Color {
        color.multiply_alpha(ctx.transform().alpha)
    }

    /// Device-space size for a world-space extent.
    #[inline]
    pub(crate) fn scale_size(ctx: &dyn DrawContext, size: Vec2) -> Vec2 {
        size * ctx.transform().scale
    }

    #[inline]
    pub(crate) fn push(&mut self, mut request: DrawingRequest) {
        request.order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.requests.alloc(request);
        self.sorted = false;
    }
}

#[inline]
fn painter_for(target: DrawingTarget, video: &mut dyn VideoSystem) -> &mut dyn Painter {
    match target {
        DrawingTarget::Colormap => video.renderer().painter(),
        DrawingTarget::Lightmap => video.lightmap().painter(),
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::{Rect, Transform};
    use crate::paint::{Color, DrawingEffect};
    use crate::render::RecordingVideoSystem;
    use crate::render::{Surface, TextureId};
    use crate::scene::{ContextState, RequestKind};

    use super::*;

    fn ctx() -> ContextState {
        ContextState::new(Rect::new(0.0, 0.0, 640.0, 480.0))
    }

    fn surface() -> Surface {
        Surface::new(TextureId(7), 32, 32)
    }

    fn layers(requests: &[DrawingRequest]) -> Vec<i32> {
        requests.iter().map(|r| r.layer.0).collect()
    }

    #[test]
    fn end_to_end_dispatch_order() {
        let ctx = ctx();
        let mut canvas = Canvas::new(DrawingTarget::Colormap);
        canvas.fill_rect(&ctx, Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE, Layer(10));
        canvas.draw_surface_at(&ctx, &surface(), Vec2::new(5.0, 5.0), Layer(5));
        canvas.draw_line(&ctx, Vec2::zero(), Vec2::new(5.0, 5.0), Color::WHITE, Layer(10));

        let mut video = RecordingVideoSystem::new();
        let stats = canvas.render(&mut video, Filter::NoFilter);

        assert_eq!(
            stats,
            RenderStats {
                dispatched: 3,
                skipped: 0
            }
        );
        let kinds: Vec<_> = video
            .renderer
            .painter
            .calls
            .iter()
            .map(|c| (c.kind(), c.layer.0))
            .collect();
        assert_eq!(
            kinds,
            vec![(RequestKind::Texture, 5), (RequestKind::FillRect, 10), (RequestKind::Line, 10)]
        );
    }

    #[test]
    fn equal_layers_keep_insertion_order() {
        let ctx = ctx();
        let mut canvas = Canvas::new(DrawingTarget::Colormap);
        let input = [3, 1, 3, 2, 1, 3, 2];
        for (i, layer) in input.iter().enumerate() {
            // Encode the insertion index in the x position.
            canvas.draw_filled_rect(
                &ctx,
                Vec2::new(i as f32, 0.0),
                Vec2::new(1.0, 1.0),
                Color::WHITE,
                Layer(*layer),
            );
        }

        let mut video = RecordingVideoSystem::new();
        canvas.render(&mut video, Filter::NoFilter);

        let mut seen: Vec<(i32, f32)> = Vec::new();
        for call in &video.renderer.painter.calls {
            let RequestData::FillRect(rect) = &call.data else {
                panic!("unexpected {:?}", call.kind())
            };
            seen.push((call.layer.0, rect.pos.x));
        }
        assert_eq!(
            seen,
            vec![(1, 1.0), (1, 4.0), (2, 3.0), (2, 6.0), (3, 0.0), (3, 2.0), (3, 5.0)]
        );
    }

    #[test]
    fn dispatched_layers_are_non_decreasing() {
        let ctx = ctx();
        let mut canvas = Canvas::new(DrawingTarget::Colormap);
        for layer in [600, -300, 0, 450, 451, 449, 50, -1, 600] {
            canvas.draw_line(&ctx, Vec2::zero(), Vec2::zero(), Color::WHITE, Layer(layer));
        }

        for filter in [Filter::NoFilter, Filter::BelowThreshold, Filter::AboveThreshold] {
            let mut video = RecordingVideoSystem::new();
            canvas.render(&mut video, filter);
            let got = layers(&video.renderer.painter.calls);
            assert!(got.windows(2).all(|w| w[0] <= w[1]), "{filter:?}: {got:?}");
        }
    }

    #[test]
    fn filters_partition_around_threshold() {
        let ctx = ctx();
        let mut canvas = Canvas::new(DrawingTarget::Colormap);
        for layer in [449, 450, 451, -300, 600] {
            canvas.draw_line(&ctx, Vec2::zero(), Vec2::zero(), Color::WHITE, Layer(layer));
        }

        let mut video = RecordingVideoSystem::new();
        let below = canvas.render(&mut video, Filter::BelowThreshold);
        assert_eq!(layers(&video.renderer.painter.calls), vec![-300, 449]);
        assert_eq!(below.skipped, 3);

        let mut video = RecordingVideoSystem::new();
        canvas.render(&mut video, Filter::AboveThreshold);
        assert_eq!(layers(&video.renderer.painter.calls), vec![451, 600]);

        let mut video = RecordingVideoSystem::new();
        canvas.render(&mut video, Filter::NoFilter);
        assert_eq!(layers(&video.renderer.painter.calls), vec![-300, 449, 450, 451, 600]);

        // Filter passes never remove anything from the buffer.
        assert_eq!(canvas.len(), 5);
    }

    #[test]
    fn lightmap_target_uses_lightmap_painter() {
        let ctx = ctx();
        let mut canvas = Canvas::new(DrawingTarget::Lightmap);
        canvas.fill_rect(&ctx, Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE, Layer::TILES);

        let mut video = RecordingVideoSystem::new();
        canvas.render(&mut video, Filter::NoFilter);
        assert!(video.renderer.painter.calls.is_empty());
        assert_eq!(video.lightmap.painter.kinds(), vec![RequestKind::FillRect]);
    }

    #[test]
    fn requests_added_after_render_are_sorted_on_next_render() {
        let ctx = ctx();
        let mut canvas = Canvas::new(DrawingTarget::Colormap);
        let rect_at = |canvas: &mut Canvas, index: f32, layer: i32| {
            let pos = Vec2::new(index, 0.0);
            canvas.draw_filled_rect(&ctx, pos, Vec2::new(1.0, 1.0), Color::WHITE, Layer(layer));
        };
        rect_at(&mut canvas, 0.0, 10);
        rect_at(&mut canvas, 1.0, 5);
        canvas.render(&mut RecordingVideoSystem::new(), Filter::NoFilter);

        rect_at(&mut canvas, 2.0, 1);
        rect_at(&mut canvas, 3.0, 10);
        let mut video = RecordingVideoSystem::new();
        let stats = canvas.render(&mut video, Filter::NoFilter);
        assert_eq!(stats.dispatched, 4);

        let mut seen: Vec<(i32, f32)> = Vec::new();
        for call in &video.renderer.painter.calls {
            let RequestData::FillRect(rect) = &call.data else {
                panic!("unexpected {:?}", call.kind())
            };
            seen.push((call.layer.0, rect.pos.x));
        }
        assert_eq!(seen, vec![(1, 2.0), (5, 1.0), (10, 0.0), (10, 3.0)]);
    }

    #[test]
    fn clear_is_idempotent() {
        let ctx = ctx();
        let mut canvas = Canvas::new(DrawingTarget::Colormap);
        canvas.fill_rect(&ctx, Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE, Layer::TILES);
        canvas.draw_line(&ctx, Vec2::zero(), Vec2::zero(), Color::WHITE, Layer::TILES);

        canvas.clear();
        assert!(canvas.is_empty());
        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.high_water(), 2);

        let mut video = RecordingVideoSystem::new();
        assert_eq!(canvas.render(&mut video, Filter::NoFilter), RenderStats::default());
    }

    #[test]
    fn order_restarts_after_clear() {
        let ctx = ctx();
        let mut canvas = Canvas::new(DrawingTarget::Colormap);
        canvas.draw_line(&ctx, Vec2::zero(), Vec2::zero(), Color::WHITE, Layer::TILES);
        canvas.clear();
        canvas.draw_line(&ctx, Vec2::zero(), Vec2::zero(), Color::WHITE, Layer::TILES);
        assert_eq!(canvas.requests()[0].order, 0);
    }

    #[test]
    fn apply_translate_composes_transform_and_viewport() {
        let mut ctx = ContextState::new(Rect::new(16.0, 8.0, 640.0, 480.0));
        ctx.set_translation(Vec2::new(100.0, 50.0));
        ctx.set_scale(1.5);

        for p in [Vec2::zero(), Vec2::new(100.0, 50.0), Vec2::new(-37.5, 912.25)] {
            let expected = ctx.transform().apply(p) + Vec2::new(16.0, 8.0);
            assert_eq!(Canvas::apply_translate(&ctx, p), expected);
        }
    }

    #[test]
    fn base_request_takes_context_effect_and_alpha() {
        let mut ctx = ctx();
        ctx.set_alpha(0.5);
        ctx.set_flip(DrawingEffect::VERTICAL_FLIP);
        let req = Canvas::base_request(
            &ctx,
            Layer::HUD,
            RequestData::Line(crate::scene::LineRequest {
                pos: Vec2::zero(),
                dest_pos: Vec2::zero(),
                color: Color::WHITE,
            }),
        );
        assert_eq!(req.alpha, 0.5);
        assert_eq!(req.drawing_effect, DrawingEffect::VERTICAL_FLIP);
        assert_eq!(req.layer, Layer::HUD);
        assert_eq!(
            *ctx.transform(),
            Transform {
                alpha: 0.5,
                drawing_effect: DrawingEffect::VERTICAL_FLIP,
                ..Transform::IDENTITY
            }
        );
    }
}
