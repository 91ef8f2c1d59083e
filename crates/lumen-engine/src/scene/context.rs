use crate::coords::{Rect, Transform, Vec2};
use crate::paint::{Color, DrawingEffect};

/// Drawing state consulted by every `Canvas::draw_*` call.
///
/// Queried once per call; the canvas never stores it.
pub trait DrawContext {
    /// Current world → view transform, including effect and alpha.
    fn transform(&self) -> &Transform;

    /// Visible region in world coordinates, used for culling.
    fn cliprect(&self) -> Rect;

    /// Device-space rectangle the context renders into.
    fn viewport(&self) -> Rect;

    /// Render-target width in device pixels.
    fn width(&self) -> f32 {
        self.viewport().width()
    }

    /// Ambient light color. White means the lightmap is not in use.
    fn ambient_color(&self) -> Color {
        Color::WHITE
    }
}

/// Concrete drawing state with a scoped transform stack.
///
/// Invariant: the stack is never empty; `pop_transform` refuses to remove the
/// base transform.
#[derive(Debug, Clone)]
pub struct ContextState {
    transform_stack: Vec<Transform>,
    viewport: Rect,
    ambient_color: Color,
}

impl ContextState {
    pub fn new(viewport: Rect) -> Self {
        Self {
            transform_stack: vec![Transform::IDENTITY],
            viewport,
            ambient_color: Color::WHITE,
        }
    }

    /// Saves the current transform; changes until the matching
    /// [`pop_transform`](Self::pop_transform) are scoped.
    pub fn push_transform(&mut self) {
        let top = *self.current();
        self.transform_stack.push(top);
    }

    /// Restores the transform saved by the last [`push_transform`](Self::push_transform).
    ///
    /// # Panics
    /// Panics if called without a matching `push_transform`.
    pub fn pop_transform(&mut self) {
        assert!(
            self.transform_stack.len() > 1,
            "pop_transform called without matching push_transform"
        );
        self.transform_stack.pop();
    }

    #[inline]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        let last = self.transform_stack.len() - 1;
        &mut self.transform_stack[last]
    }

    #[inline]
    pub fn set_translation(&mut self, translation: Vec2) {
        self.transform_mut().translation = translation;
    }

    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.current().translation
    }

    #[inline]
    pub fn set_scale(&mut self, scale: f32) {
        debug_assert!(scale > 0.0 && scale.is_finite(), "invalid scale {scale}");
        self.transform_mut().scale = scale;
    }

    #[inline]
    pub fn set_alpha(&mut self, alpha: f32) {
        self.transform_mut().alpha = alpha.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.current().alpha
    }

    #[inline]
    pub fn set_flip(&mut self, effect: DrawingEffect) {
        self.transform_mut().drawing_effect = effect;
    }

    #[inline]
    pub fn flip(&self) -> DrawingEffect {
        self.current().drawing_effect
    }

    #[inline]
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn set_ambient_color(&mut self, color: Color) {
        self.ambient_color = color;
    }

    #[inline]
    fn current(&self) -> &Transform {
        let last = self.transform_stack.len() - 1;
        &self.transform_stack[last]
    }
}

impl DrawContext for ContextState {
    #[inline]
    fn transform(&self) -> &Transform {
        self.current()
    }

    fn cliprect(&self) -> Rect {
        let t = self.current();
        Rect::from_origin_size(t.translation, self.viewport.size * (1.0 / t.scale))
    }

    #[inline]
    fn viewport(&self) -> Rect {
        self.viewport
    }

    #[inline]
    fn ambient_color(&self) -> Color {
        self.ambient_color
    }
}
