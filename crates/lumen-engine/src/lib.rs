//! Lumen engine crate.
//!
//! This crate owns the deferred draw-request pipeline: game code records
//! drawing requests into a [`scene::Canvas`] during the update pass, and the
//! canvas sorts them by layer and flushes them to a pluggable backend.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
