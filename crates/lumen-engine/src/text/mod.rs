//! Font contract used by text requests.
//!
//! Shaping and rasterization are backend concerns; a font here only needs to
//! turn a string into painter calls.

mod fixed;
mod font;

pub use fixed::FixedFont;
pub use font::{Font, FontAlignment, FontHandle};
