use egui::Pos2;

use super::common::{GLYPH_COLOR, STICKER_FONT_SIZE, glyph_origin};
use crate::surface::Surface;

/// An emoji stamped onto the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    position: Pos2,
    glyph: String,
}

impl StickerPlacement {
    pub fn new(position: Pos2, glyph: impl Into<String>) -> Self {
        Self {
            position,
            glyph: glyph.into(),
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub(crate) fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub(crate) fn render(&self, surface: &mut dyn Surface) {
        surface.fill_text(glyph_origin(self.position), &self.glyph, STICKER_FONT_SIZE, GLYPH_COLOR);
    }
}
