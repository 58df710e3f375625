use eframe::egui::{self, Response, RichText, Ui, Vec2, Widget};

/// A tool selector that stays highlighted while its tool is active
pub struct ToolButton<'a> {
    pub label: &'a str,
    pub selected: bool,
    pub text_size: f32,
}

impl<'a> ToolButton<'a> {
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            selected,
            text_size: 14.0,
        }
    }

    /// Larger text, for emoji stickers
    pub fn glyph(label: &'a str, selected: bool) -> Self {
        Self {
            text_size: 22.0,
            ..Self::new(label, selected)
        }
    }
}

impl Widget for ToolButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.add(
            egui::Button::new(RichText::new(self.label).size(self.text_size))
                .selected(self.selected)
                .min_size(Vec2::new(36.0, 32.0)),
        )
    }
}
