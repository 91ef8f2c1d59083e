//! Rendering backend contracts.
//!
//! The canvas never issues GPU work itself; it hands sorted requests to a
//! [`VideoSystem`], which exposes a renderer and a lightmap, each with its own
//! [`Painter`].
//!
//! Convention:
//! - every position a painter receives is already in device space
//! - shape colors arrive with the context alpha folded in

mod backend;
mod recording;
mod surface;

pub use backend::{Lightmap, Painter, Renderer, VideoSystem};
pub use recording::{
    RecordingLightmap, RecordingPainter, RecordingRenderer, RecordingVideoSystem, VideoEvent,
};
pub use surface::{Surface, TextureId};
