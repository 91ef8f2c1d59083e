//! Coordinate and geometry types shared by the canvas and backends.
//!
//! Canonical CPU space:
//! - World coordinates are what game code passes to `draw_*` calls
//! - Device coordinates are what backends receive (after transform + viewport)
//! - Origin top-left, +X right, +Y down

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
