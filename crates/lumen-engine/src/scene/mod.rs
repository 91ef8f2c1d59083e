//! Deferred drawing requests.
//!
//! Responsibilities:
//! - record renderer-agnostic drawing requests into a per-frame arena
//! - provide deterministic ordering (layer + insertion order)
//! - flush requests to a `render::VideoSystem`, optionally filtered by layer
//! - keep payload-specific construction isolated per file under `scene::shapes`

mod arena;
mod canvas;
mod config;
mod context;
mod data;
mod drawing_context;
mod filter;
mod key;
mod layer;
mod request;

mod shapes;

pub use arena::FrameArena;
pub use canvas::{Canvas, RenderStats};
pub use config::CanvasConfig;
pub use context::{ContextState, DrawContext};
pub use data::{RequestData, RequestKind};
pub use drawing_context::DrawingContext;
pub use filter::Filter;
pub use key::SortKey;
pub use layer::Layer;
pub use request::{DrawingRequest, DrawingTarget};
pub use shapes::fill_rect::FillRectRequest;
pub use shapes::gradient::GradientRequest;
pub use shapes::inverse_ellipse::InverseEllipseRequest;
pub use shapes::light::{GetLightRequest, LightProbe};
pub use shapes::line::LineRequest;
pub use shapes::text::TextRequest;
pub use shapes::texture::TextureRequest;
pub use shapes::triangle::TriangleRequest;
