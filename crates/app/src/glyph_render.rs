//! Draws the game console as a grid of coloured glyphs.

use cavern_core::{Console, Rgb};
use macroquad::prelude::*;

/// Share of a cell left below the glyph baseline.
const BASELINE_INSET: f32 = 0.2;

pub struct GlyphStyle {
    pub cell_size: f32,
    pub font: Option<Font>,
}

impl GlyphStyle {
    pub fn new(cell_size: u16, font: Option<Font>) -> Self {
        Self { cell_size: f32::from(cell_size), font }
    }
}

pub fn draw_console(console: &Console, style: &GlyphStyle) {
    clear_background(BLACK);
    let font_size = style.cell_size as u16;
    let mut buffer = [0_u8; 4];

    for cy in 0..console.height() as i32 {
        for cx in 0..console.width() as i32 {
            let glyph = console.composed(cx, cy);
            if glyph.is_empty() {
                continue;
            }
            let text = glyph.ch.encode_utf8(&mut buffer);
            let x = cx as f32 * style.cell_size;
            let y = (cy as f32 + 1.0 - BASELINE_INSET) * style.cell_size;
            draw_text_ex(
                text,
                x,
                y,
                TextParams {
                    font: style.font.as_ref(),
                    font_size,
                    color: to_color(glyph.color),
                    ..Default::default()
                },
            );
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}
