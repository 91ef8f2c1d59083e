//! Paint state attached to drawing requests.
//!
//! Scope:
//! - color representation (straight-alpha RGBA floats)
//! - blend factors
//! - drawing effects (flip bitmask)
//! - gradient directions
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;
pub mod effect;
pub mod gradient;

pub use blend::{Blend, BlendFactor};
pub use color::Color;
pub use effect::DrawingEffect;
pub use gradient::GradientDirection;
