use std::fmt;
use std::rc::Rc;

use crate::coords::Vec2;
use crate::paint::{Color, DrawingEffect};
use crate::render::Painter;

/// Horizontal anchoring of a text block relative to its position.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FontAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A font able to draw itself through a [`Painter`].
pub trait Font: fmt::Debug {
    /// Draws `text` anchored at `pos` (device space).
    fn draw(
        &self,
        painter: &mut dyn Painter,
        text: &str,
        pos: Vec2,
        alignment: FontAlignment,
        effect: DrawingEffect,
        color: Color,
        alpha: f32,
    );

    /// Width of the widest line of `text`.
    fn text_width(&self, text: &str) -> f32;

    /// Line height.
    fn height(&self) -> f32;
}

/// Shared font reference stored in text requests.
pub type FontHandle = Rc<dyn Font>;
