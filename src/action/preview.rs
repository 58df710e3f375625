use egui::{Color32, Pos2};

use super::common::{GLYPH_COLOR, STICKER_FONT_SIZE, glyph_origin};
use crate::surface::Surface;

/// Indicator of where the active tool will act next.
///
/// Shows a dot of the brush radius, or the sticker glyph when a sticker
/// tool is active.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPreview {
    position: Pos2,
    thickness: f32,
    color: Color32,
    glyph: Option<String>,
}

impl CursorPreview {
    pub fn brush(position: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            position,
            thickness,
            color,
            glyph: None,
        }
    }

    pub fn sticker(position: Pos2, glyph: impl Into<String>) -> Self {
        Self {
            position,
            thickness: 0.0,
            color: GLYPH_COLOR,
            glyph: Some(glyph.into()),
        }
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn glyph(&self) -> Option<&str> {
        self.glyph.as_deref()
    }

    pub(crate) fn move_to(&mut self, position: Pos2) {
        self.position = position;
    }

    pub(crate) fn render(&self, surface: &mut dyn Surface) {
        match &self.glyph {
            Some(glyph) => {
                surface.fill_text(glyph_origin(self.position), glyph, STICKER_FONT_SIZE, self.color)
            }
            None => surface.fill_circle(self.position, self.thickness, self.color),
        }
    }
}
