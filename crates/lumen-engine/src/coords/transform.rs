use crate::paint::DrawingEffect;

use super::Vec2;

/// Drawing transform carried by a drawing context.
///
/// Maps world positions to view positions: `(p - translation) * scale`.
/// The effect and alpha travel with the transform so that pushing a
/// transform scopes them as well.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec2,
    pub drawing_effect: DrawingEffect,
    pub alpha: f32,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec2::zero(),
        drawing_effect: DrawingEffect::NONE,
        alpha: 1.0,
        scale: 1.0,
    };

    #[inline]
    pub fn apply(&self, v: Vec2) -> Vec2 {
        (v - self.translation) * self.scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_noop() {
        let p = Vec2::new(12.5, -3.0);
        assert_eq!(Transform::IDENTITY.apply(p), p);
    }

    #[test]
    fn translation_then_scale() {
        let t = Transform {
            translation: Vec2::new(10.0, 20.0),
            scale: 2.0,
            ..Transform::IDENTITY
        };
        assert_eq!(t.apply(Vec2::new(15.0, 25.0)), Vec2::new(10.0, 10.0));
    }
}
