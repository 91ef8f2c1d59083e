use crate::paint::{Blend, Color, DrawingEffect};

use super::{Layer, RequestData, RequestKind, SortKey};

/// Which backend painter a canvas flushes into.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum DrawingTarget {
    #[default]
    Colormap,
    Lightmap,
}

/// One buffered draw command plus its per-call paint state.
///
/// `color`, `blend` and `angle` are only meaningful for texture and text
/// requests; shape payloads carry their own alpha-folded color.
#[derive(Debug, Clone)]
pub struct DrawingRequest {
    pub layer: Layer,
    /// Insertion index assigned by the canvas.
    pub order: u32,
    pub drawing_effect: DrawingEffect,
    pub alpha: f32,
    pub color: Color,
    pub blend: Blend,
    /// Rotation in radians around the destination center.
    pub angle: f32,
    pub data: RequestData,
}

impl DrawingRequest {
    /// Creates a request with neutral paint state (opaque white, default blend, no rotation).
    #[inline]
    pub fn new(layer: Layer, data: RequestData) -> Self {
        Self {
            layer,
            order: 0,
            drawing_effect: DrawingEffect::NONE,
            alpha: 1.0,
            color: Color::WHITE,
            blend: Blend::default(),
            angle: 0.0,
            data,
        }
    }

    #[inline]
    pub fn kind(&self) -> RequestKind {
        self.data.kind()
    }

    #[inline]
    pub fn key(&self) -> SortKey {
        SortKey::new(self.layer, self.order)
    }
}
