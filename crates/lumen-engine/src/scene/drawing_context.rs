use crate::coords::{Rect, Vec2};
use crate::render::VideoSystem;

use super::{Canvas, CanvasConfig, ContextState, DrawContext, DrawingTarget, Filter, LightProbe};

/// Per-frame drawing state plus the two canvases it records into.
///
/// Game objects draw into the colormap (regular sprites and shapes) or the
/// lightmap (light sources), then [`render`](Self::render) composes the frame:
///
/// 1. lightmap canvas into the lightmap (only when the ambient is not white)
/// 2. colormap layers below [`Layer::LIGHTMAP`](super::Layer::LIGHTMAP)
/// 3. the lightmap itself, multiplied over the scene
/// 4. colormap layers above [`Layer::LIGHTMAP`](super::Layer::LIGHTMAP)
#[derive(Debug)]
pub struct DrawingContext {
    state: ContextState,
    colormap: Canvas,
    lightmap: Canvas,
}

impl DrawingContext {
    pub fn new(viewport: Rect) -> Self {
        Self::with_config(viewport, &CanvasConfig::default())
    }

    pub fn with_config(viewport: Rect, config: &CanvasConfig) -> Self {
        Self {
            state: ContextState::new(viewport),
            colormap: Canvas::with_config(DrawingTarget::Colormap, config),
            lightmap: Canvas::with_config(DrawingTarget::Lightmap, config),
        }
    }

    #[inline]
    pub fn state(&self) -> &ContextState {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut ContextState {
        &mut self.state
    }

    /// Splits the borrow into the drawing state and the canvas for `target`.
    ///
    /// ```ignore
    /// let (state, canvas) = context.canvas(DrawingTarget::Colormap);
    /// canvas.fill_rect(state, rect, color, Layer::OBJECTS);
    /// ```
    #[inline]
    pub fn canvas(&mut self, target: DrawingTarget) -> (&ContextState, &mut Canvas) {
        let canvas = match target {
            DrawingTarget::Colormap => &mut self.colormap,
            DrawingTarget::Lightmap => &mut self.lightmap,
        };
        (&self.state, canvas)
    }

    #[inline]
    pub fn color(&mut self) -> (&ContextState, &mut Canvas) {
        self.canvas(DrawingTarget::Colormap)
    }

    #[inline]
    pub fn light(&mut self) -> (&ContextState, &mut Canvas) {
        self.canvas(DrawingTarget::Lightmap)
    }

    /// Queries the light level at `pos`; resolved during the lightmap pass.
    #[inline]
    pub fn get_light(&mut self, pos: Vec2) -> LightProbe {
        self.lightmap.get_light(&self.state, pos)
    }

    /// True when the frame needs a lightmap pass.
    #[inline]
    pub fn use_lightmap(&self) -> bool {
        !self.state.ambient_color().is_white()
    }

    /// Composes the frame into `video`, then clears both canvases.
    pub fn render(&mut self, video: &mut dyn VideoSystem) {
        let use_lightmap = self.use_lightmap();

        if use_lightmap {
            video.lightmap().start_draw(self.state.ambient_color());
            self.lightmap.render(video, Filter::NoFilter);
            video.lightmap().end_draw();
        }

        video.renderer().start_draw();
        let below = self.colormap.render(video, Filter::BelowThreshold);
        if use_lightmap {
            video.lightmap().render();
        }
        let above = self.colormap.render(video, Filter::AboveThreshold);
        video.renderer().end_draw();

        log::trace!(
            "DrawingContext: frame composed (lightmap: {}, below: {}, above: {}, unfiltered: {})",
            use_lightmap,
            below.dispatched,
            above.dispatched,
            self.colormap.len() - below.dispatched - above.dispatched
        );

        self.clear();
    }

    /// Drops all recorded requests on both canvases.
    #[inline]
    pub fn clear(&mut self) {
        self.colormap.clear();
        self.lightmap.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::paint::Color;
    use crate::render::{RecordingVideoSystem, VideoEvent};
    use crate::scene::Layer;

    use super::*;

    fn context() -> DrawingContext {
        DrawingContext::new(Rect::new(0.0, 0.0, 320.0, 240.0))
    }

    fn dot(context: &mut DrawingContext, target: DrawingTarget, layer: Layer) {
        let (state, canvas) = context.canvas(target);
        canvas.fill_rect(state, Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE, layer);
    }

    #[test]
    fn white_ambient_skips_lightmap_pass() {
        let mut context = context();
        dot(&mut context, DrawingTarget::Colormap, Layer::TILES);
        dot(&mut context, DrawingTarget::Colormap, Layer::HUD);

        let mut video = RecordingVideoSystem::new();
        context.render(&mut video);

        assert_eq!(
            video.events(),
            vec![VideoEvent::RendererStart, VideoEvent::RendererEnd]
        );
        assert_eq!(video.renderer.painter.calls.len(), 2);
    }

    #[test]
    fn dark_ambient_composes_in_order() {
        let mut context = context();
        context.state_mut().set_ambient_color(Color::rgb(0.2, 0.2, 0.2));
        dot(&mut context, DrawingTarget::Colormap, Layer::HUD);
        dot(&mut context, DrawingTarget::Colormap, Layer::TILES);
        dot(&mut context, DrawingTarget::Lightmap, Layer::OBJECTS);
        let probe = context.get_light(Vec2::new(1.0, 1.0));

        let mut video = RecordingVideoSystem::new();
        video.lightmap.light = Color::rgb(0.9, 0.8, 0.7);
        context.render(&mut video);

        assert_eq!(
            video.events(),
            vec![
                VideoEvent::LightmapStart(Color::rgb(0.2, 0.2, 0.2)),
                VideoEvent::LightmapEnd,
                VideoEvent::RendererStart,
                VideoEvent::LightmapComposite,
                VideoEvent::RendererEnd,
            ]
        );
        let layers: Vec<_> = video.renderer.painter.calls.iter().map(|c| c.layer).collect();
        assert_eq!(layers, vec![Layer::TILES, Layer::HUD]);
        assert_eq!(video.lightmap.painter.calls.len(), 1);
        assert_eq!(probe.get(), Color::rgb(0.9, 0.8, 0.7));
    }

    #[test]
    fn threshold_layer_is_not_drawn_on_colormap() {
        let mut context = context();
        dot(&mut context, DrawingTarget::Colormap, Layer::LIGHTMAP);

        let mut video = RecordingVideoSystem::new();
        context.render(&mut video);
        assert!(video.renderer.painter.calls.is_empty());
    }

    #[test]
    fn render_clears_both_canvases() {
        let mut context = context();
        context.state_mut().set_ambient_color(Color::BLACK);
        dot(&mut context, DrawingTarget::Colormap, Layer::TILES);
        dot(&mut context, DrawingTarget::Lightmap, Layer::TILES);

        let mut video = RecordingVideoSystem::new();
        context.render(&mut video);

        let (_, color) = context.color();
        assert!(color.is_empty());
        let (_, light) = context.light();
        assert!(light.is_empty());
    }
}
