use egui::{Color32, Pos2};

use crate::surface::Surface;

mod common;
pub(crate) mod preview;
pub(crate) mod sticker;
pub(crate) mod stroke;

pub use common::{GLYPH_COLOR, GLYPH_OFFSET, STICKER_FONT_SIZE};
pub use preview::CursorPreview;
pub use sticker::StickerPlacement;
pub use stroke::Stroke;

/// A single unit of drawing history.
///
/// Committed history only ever holds `Stroke` and `StickerPlacement`;
/// `CursorPreview` is owned separately by the canvas controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Stroke(Stroke),
    CursorPreview(CursorPreview),
    StickerPlacement(StickerPlacement),
}

impl Action {
    /// Paint this action's full contribution onto `surface`
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Action::Stroke(stroke) => stroke.render(surface),
            Action::CursorPreview(preview) => preview.render(surface),
            Action::StickerPlacement(sticker) => sticker.render(surface),
        }
    }

    /// Absorb a new pointer position
    pub fn extend(&mut self, pos: Pos2) {
        match self {
            Action::Stroke(stroke) => stroke.add_point(pos),
            Action::CursorPreview(preview) => preview.move_to(pos),
            Action::StickerPlacement(sticker) => sticker.move_to(pos),
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, Action::CursorPreview(_))
    }

    /// Glyph of a sticker placement, if this is one
    pub fn sticker_glyph(&self) -> Option<&str> {
        match self {
            Action::StickerPlacement(sticker) => Some(sticker.glyph()),
            _ => None,
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Action::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerPlacement> {
        match self {
            Action::StickerPlacement(sticker) => Some(sticker),
            _ => None,
        }
    }

    pub fn as_preview(&self) -> Option<&CursorPreview> {
        match self {
            Action::CursorPreview(preview) => Some(preview),
            _ => None,
        }
    }
}

/// Factory functions for creating actions
pub mod factory {
    use super::*;

    /// Start a stroke whose first point is `start`
    pub fn create_stroke(start: Pos2, thickness: f32, color: Color32) -> Action {
        Action::Stroke(Stroke::new(vec![start], thickness, color))
    }

    pub fn create_sticker(position: Pos2, glyph: impl Into<String>) -> Action {
        Action::StickerPlacement(StickerPlacement::new(position, glyph))
    }

    pub fn create_brush_preview(position: Pos2, thickness: f32, color: Color32) -> Action {
        Action::CursorPreview(CursorPreview::brush(position, thickness, color))
    }

    pub fn create_sticker_preview(position: Pos2, glyph: impl Into<String>) -> Action {
        Action::CursorPreview(CursorPreview::sticker(position, glyph))
    }
}
