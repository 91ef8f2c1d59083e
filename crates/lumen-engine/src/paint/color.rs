/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Requests carry straight alpha; the canvas folds the context alpha into `a`
/// and backends premultiply when they upload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Returns the same color with alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Returns the same color with alpha multiplied by `factor`.
    #[inline]
    pub fn multiply_alpha(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Returns a premultiplied `(r, g, b, a)` tuple for backends.
    #[inline]
    pub fn to_premul(self) -> (f32, f32, f32, f32) {
        let a = self.a.clamp(0.0, 1.0);
        (self.r * a, self.g * a, self.b * a, a)
    }

    /// True when RGB are all at full intensity (alpha is ignored).
    ///
    /// An ambient color for which this holds needs no lightmap pass.
    #[inline]
    pub fn is_white(self) -> bool {
        self.r == 1.0 && self.g == 1.0 && self.b == 1.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
