use crate::coords::{Rect, Vec2};
use crate::paint::{Color, DrawingEffect};
use crate::render::{Painter, TextureId};
use crate::scene::{DrawingRequest, Layer, RequestData, TextureRequest};

use super::{Font, FontAlignment};

const FIRST_GLYPH: u32 = ' ' as u32;
const GLYPH_COUNT: u32 = 96;
const ATLAS_COLUMNS: u32 = 16;

/// Monospace bitmap font backed by a glyph atlas texture.
///
/// The atlas holds printable ASCII starting at `' '`, 16 glyphs per row.
/// Characters outside that range are drawn as `'?'`.
#[derive(Debug, Clone)]
pub struct FixedFont {
    texture: TextureId,
    glyph_width: f32,
    glyph_height: f32,
}

impl FixedFont {
    pub fn new(texture: TextureId, glyph_width: f32, glyph_height: f32) -> Self {
        Self {
            texture,
            glyph_width,
            glyph_height,
        }
    }

    fn glyph_rect(&self, ch: char) -> Rect {
        let code = ch as u32;
        let index = if (FIRST_GLYPH..FIRST_GLYPH + GLYPH_COUNT).contains(&code) {
            code - FIRST_GLYPH
        } else {
            '?' as u32 - FIRST_GLYPH
        };
        let col = (index % ATLAS_COLUMNS) as f32;
        let row = (index / ATLAS_COLUMNS) as f32;
        Rect::new(
            col * self.glyph_width,
            row * self.glyph_height,
            self.glyph_width,
            self.glyph_height,
        )
    }

    fn line_width(&self, line: &str) -> f32 {
        line.chars().count() as f32 * self.glyph_width
    }
}

impl Font for FixedFont {
    fn draw(
        &self,
        painter: &mut dyn Painter,
        text: &str,
        pos: Vec2,
        alignment: FontAlignment,
        effect: DrawingEffect,
        color: Color,
        alpha: f32,
    ) {
        for (line_no, line) in text.split('\n').enumerate() {
            let width = self.line_width(line);
            let x0 = match alignment {
                FontAlignment::Left => pos.x,
                FontAlignment::Center => pos.x - width / 2.0,
                FontAlignment::Right => pos.x - width,
            };
            let y = pos.y + line_no as f32 * self.glyph_height;

            for (i, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let glyph = TextureRequest {
                    srcrect: self.glyph_rect(ch),
                    dstrect: Rect::new(
                        x0 + i as f32 * self.glyph_width,
                        y,
                        self.glyph_width,
                        self.glyph_height,
                    ),
                    texture: self.texture,
                };
                let request = DrawingRequest {
                    drawing_effect: effect,
                    alpha,
                    color,
                    ..DrawingRequest::new(Layer::default(), RequestData::Texture(glyph.clone()))
                };
                painter.draw_texture(&request, &glyph);
            }
        }
    }

    fn text_width(&self, text: &str) -> f32 {
        text.split('\n').map(|line| self.line_width(line)).fold(0.0, f32::max)
    }

    fn height(&self) -> f32 {
        self.glyph_height
    }
}
