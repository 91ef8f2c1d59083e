use core::ops::{BitOr, BitXor};

/// Drawing effect bitmask (flips).
///
/// Effects compose with XOR: a flipped surface drawn in a flipped context
/// ends up unflipped.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct DrawingEffect(pub u8);

impl DrawingEffect {
    pub const NONE: DrawingEffect = DrawingEffect(0);
    pub const HORIZONTAL_FLIP: DrawingEffect = DrawingEffect(0b01);
    pub const VERTICAL_FLIP: DrawingEffect = DrawingEffect(0b10);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: DrawingEffect) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitXor for DrawingEffect {
    type Output = DrawingEffect;
    #[inline]
    fn bitxor(self, rhs: DrawingEffect) -> DrawingEffect {
        DrawingEffect(self.0 ^ rhs.0)
    }
}

impl BitOr for DrawingEffect {
    type Output = DrawingEffect;
    #[inline]
    fn bitor(self, rhs: DrawingEffect) -> DrawingEffect {
        DrawingEffect(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_cancels_flip() {
        let e = DrawingEffect::HORIZONTAL_FLIP ^ DrawingEffect::HORIZONTAL_FLIP;
        assert!(e.is_empty());
    }

    #[test]
    fn xor_keeps_other_bits() {
        let ctx = DrawingEffect::VERTICAL_FLIP;
        let e = ctx ^ DrawingEffect::HORIZONTAL_FLIP;
        assert!(e.contains(DrawingEffect::VERTICAL_FLIP));
        assert!(e.contains(DrawingEffect::HORIZONTAL_FLIP));
    }
}
