//! Request payloads, one module per request kind.
//!
//! Each module owns its payload struct and the `Canvas::draw_*` helpers that
//! build it, so the per-kind construction rules sit next to the data.

pub(crate) mod fill_rect;
pub(crate) mod gradient;
pub(crate) mod inverse_ellipse;
pub(crate) mod light;
pub(crate) mod line;
pub(crate) mod text;
pub(crate) mod texture;
pub(crate) mod triangle;
