use egui::{Color32, Pos2};

use crate::action::{Action, factory};

mod color;
pub use color::{CHANNEL_MAX, ColorChannel, channel_to_percent, percent_to_channel};

/// Which kind of action the next pointer-down creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Brush,
    Sticker,
}

/// The active tool and its settings. Changed only by tool-selection UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    active: ToolKind,
    thickness: f32,
    color: Color32,
    glyph: String,
}

impl ToolState {
    pub fn new(thickness: f32, color: Color32) -> Self {
        Self {
            active: ToolKind::Brush,
            thickness,
            color,
            glyph: String::new(),
        }
    }

    pub fn active(&self) -> ToolKind {
        self.active
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn select_brush(&mut self, thickness: f32) {
        self.active = ToolKind::Brush;
        self.thickness = thickness;
    }

    /// Make `glyph` the active sticker. Blank glyphs are ignored and leave
    /// the current tool selected; returns whether the selection changed.
    pub fn select_sticker(&mut self, glyph: &str) -> bool {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return false;
        }
        self.active = ToolKind::Sticker;
        self.glyph = glyph.to_owned();
        true
    }

    /// Color for strokes created from now on
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color = Color32::from_rgb(r, g, b);
    }

    /// Apply a 0-100 slider position to one channel of the stroke color
    pub fn set_channel_percent(&mut self, channel: ColorChannel, percent: f32) {
        self.color = channel.with_value(self.color, percent_to_channel(percent));
    }

    /// True when the brush preset with `thickness` is the selected tool
    pub fn is_brush_selected(&self, thickness: f32) -> bool {
        self.active == ToolKind::Brush && self.thickness == thickness
    }

    /// True when `glyph` is the selected sticker
    pub fn is_sticker_selected(&self, glyph: &str) -> bool {
        self.active == ToolKind::Sticker && self.glyph == glyph
    }

    /// The action a pointer-down at `pos` starts
    pub fn begin_action(&self, pos: Pos2) -> Action {
        match self.active {
            ToolKind::Brush => factory::create_stroke(pos, self.thickness, self.color),
            ToolKind::Sticker => factory::create_sticker(pos, self.glyph.clone()),
        }
    }

    /// Preview of the active tool at `pos`
    pub fn preview_at(&self, pos: Pos2) -> Action {
        match self.active {
            ToolKind::Brush => factory::create_brush_preview(pos, self.thickness, self.color),
            ToolKind::Sticker => factory::create_sticker_preview(pos, self.glyph.clone()),
        }
    }
}
