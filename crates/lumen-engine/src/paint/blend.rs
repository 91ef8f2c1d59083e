/// Source/destination blend factor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstColor,
    OneMinusDstColor,
    DstAlpha,
    OneMinusDstAlpha,
}

/// Blend mode as a source/destination factor pair.
///
/// The default is regular straight-alpha "over" compositing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Blend {
    pub src: BlendFactor,
    pub dst: BlendFactor,
}

impl Blend {
    pub const BLEND: Blend = Blend::new(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
    pub const ADD: Blend = Blend::new(BlendFactor::SrcAlpha, BlendFactor::One);
    pub const MOD: Blend = Blend::new(BlendFactor::DstColor, BlendFactor::Zero);
    pub const NONE: Blend = Blend::new(BlendFactor::One, BlendFactor::Zero);

    #[inline]
    pub const fn new(src: BlendFactor, dst: BlendFactor) -> Self {
        Self { src, dst }
    }
}

impl Default for Blend {
    fn default() -> Self {
        Self::BLEND
    }
}
