use core::cmp::Ordering;

/// Paint-order key for drawing requests.
///
/// Lower layers are painted first and end up underneath higher ones.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Layer(pub i32);

impl Layer {
    pub const BACKGROUND0: Layer = Layer(-300);
    pub const BACKGROUND1: Layer = Layer(-200);
    pub const BACKGROUNDTILES: Layer = Layer(-100);
    pub const TILES: Layer = Layer(0);
    pub const OBJECTS: Layer = Layer(50);
    pub const FLOATINGOBJECTS: Layer = Layer(150);
    pub const FOREGROUNDTILES: Layer = Layer(200);
    pub const FOREGROUND0: Layer = Layer(300);
    pub const FOREGROUND1: Layer = Layer(400);
    /// Threshold separating world layers from overlay layers.
    ///
    /// The lightmap is composited between the two colormap passes at this depth.
    pub const LIGHTMAP: Layer = Layer(450);
    pub const HUD: Layer = Layer(500);
    pub const GUI: Layer = Layer(600);

    #[inline]
    pub const fn offset(self, delta: i32) -> Self {
        Self(self.0 + delta)
    }
}

impl Ord for Layer {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Layer {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
