//! Layered glyph buffer standing in for the terminal window.
//! Layer 0 holds the map, layer 1 creatures, layer 2 the player and text.
//! Front ends draw the topmost non-empty glyph of every cell.

use crate::types::{Glyph, Rgb};

pub const LAYER_COUNT: usize = 3;
pub const MAP_LAYER: usize = 0;
pub const ENTITY_LAYER: usize = 1;
pub const TOP_LAYER: usize = 2;

#[derive(Clone, Debug)]
pub struct Console {
    width: usize,
    height: usize,
    layers: Vec<Vec<Glyph>>,
}

impl Console {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, layers: vec![vec![Glyph::EMPTY; width * height]; LAYER_COUNT] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear_window(&mut self, layer: usize) {
        if let Some(cells) = self.layers.get_mut(layer) {
            cells.fill(Glyph::EMPTY);
        }
    }

    pub fn clear_all(&mut self) {
        for layer in 0..LAYER_COUNT {
            self.clear_window(layer);
        }
    }

    pub fn clear_area(&mut self, x: i32, y: i32, width: i32, height: i32, layer: usize) {
        for cy in y..y + height {
            for cx in x..x + width {
                self.print_glyph(cx, cy, Glyph::EMPTY, layer);
            }
        }
    }

    pub fn print_glyph(&mut self, x: i32, y: i32, glyph: Glyph, layer: usize) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        if let Some(cells) = self.layers.get_mut(layer) {
            cells[idx] = glyph;
        }
    }

    pub fn print_text(&mut self, x: i32, y: i32, text: &str, color: Rgb, layer: usize) {
        for (offset, ch) in text.chars().enumerate() {
            self.print_glyph(x + offset as i32, y, Glyph::new(ch, color), layer);
        }
    }

    pub fn glyph_at(&self, x: i32, y: i32, layer: usize) -> Option<Glyph> {
        let idx = self.index(x, y)?;
        self.layers.get(layer).map(|cells| cells[idx])
    }

    pub fn composed(&self, x: i32, y: i32) -> Glyph {
        let Some(idx) = self.index(x, y) else {
            return Glyph::EMPTY;
        };
        self.layers
            .iter()
            .rev()
            .map(|cells| cells[idx])
            .find(|glyph| !glyph.is_empty())
            .unwrap_or(Glyph::EMPTY)
    }

    pub fn row_text(&self, y: i32) -> String {
        (0..self.width as i32).map(|x| self.composed(x, y).ch).collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }
}
