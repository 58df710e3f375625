use egui::{Color32, Pos2, Vec2};

/// Font size stickers and glyph previews are drawn with
pub const STICKER_FONT_SIZE: f32 = 24.0;

/// Offset from the pointer to the glyph's text origin (left edge, baseline),
/// which roughly centers the glyph on the pointer.
pub const GLYPH_OFFSET: Vec2 = Vec2::new(-10.0, 10.0);

pub const GLYPH_COLOR: Color32 = Color32::BLACK;

pub(crate) fn glyph_origin(anchor: Pos2) -> Pos2 {
    anchor + GLYPH_OFFSET
}
