use crate::coords::{Rect, Vec2};
use crate::paint::DrawingEffect;

/// Opaque handle to a backend texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// Drawable image: a texture plus its size and orientation.
///
/// Asset loading lives elsewhere; the canvas only needs these four facts.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    texture: TextureId,
    width: u32,
    height: u32,
    flip_x: bool,
}

impl Surface {
    #[inline]
    pub const fn new(texture: TextureId, width: u32, height: u32) -> Self {
        Self {
            texture,
            width,
            height,
            flip_x: false,
        }
    }

    /// Returns the same surface mirrored horizontally (or not).
    #[inline]
    pub const fn with_flip_x(self, flip_x: bool) -> Self {
        Self { flip_x, ..self }
    }

    #[inline]
    pub fn texture(&self) -> TextureId {
        self.texture
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn flip_x(&self) -> bool {
        self.flip_x
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Full texel rectangle of the surface.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Vec2::zero(), self.size())
    }

    /// Effect contributed by the surface itself.
    #[inline]
    pub fn effect(&self) -> DrawingEffect {
        if self.flip_x {
            DrawingEffect::HORIZONTAL_FLIP
        } else {
            DrawingEffect::NONE
        }
    }
}
