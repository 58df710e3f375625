use std::{fs, path::Path};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::export::MAX_EXPORT_SIZE;

/// How sticker placements of the same glyph relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickerMode {
    /// Each glyph exists at most once; placing it again moves it
    #[default]
    SingleInstance,
    /// Every placement is an independent sticker
    MultiInstance,
}

/// Application settings. Every field has a default, so a config file only
/// needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    pub app_name: String,
    /// Edge length of the square drawing surface, in points
    pub canvas_size: f32,
    /// Upscaling factor applied when exporting to PNG
    pub export_scale: u32,
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    pub stickers: Vec<String>,
    pub sticker_mode: StickerMode,
    pub initial_color: [u8; 3],
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            app_name: "Sketchpad".to_owned(),
            canvas_size: 256.0,
            export_scale: 4,
            thin_thickness: 2.0,
            thick_thickness: 6.0,
            stickers: vec!["🎃".to_owned(), "👻".to_owned(), "🍬".to_owned()],
            sticker_mode: StickerMode::SingleInstance,
            initial_color: [0, 0, 0],
        }
    }
}

impl SketchpadConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.canvas_size) {
            return Err(ConfigError::Invalid(format!(
                "canvas_size must be positive (got {})",
                self.canvas_size
            )));
        }
        if self.export_scale == 0 {
            return Err(ConfigError::Invalid("export_scale must be at least 1".to_owned()));
        }
        if self.export_size() > MAX_EXPORT_SIZE {
            return Err(ConfigError::Invalid(format!(
                "canvas_size * export_scale must not exceed {MAX_EXPORT_SIZE} px"
            )));
        }
        if !is_positive(self.thin_thickness) || !is_positive(self.thick_thickness) {
            return Err(ConfigError::Invalid(
                "brush thickness presets must be positive".to_owned(),
            ));
        }
        if let Some(empty) = self.stickers.iter().position(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("sticker #{empty} is empty")));
        }
        Ok(())
    }

    pub fn initial_color(&self) -> Color32 {
        let [r, g, b] = self.initial_color;
        Color32::from_rgb(r, g, b)
    }

    /// Name of the downloaded PNG, derived from the application name
    pub fn export_file_name(&self) -> String {
        format!("{}.png", self.app_name.trim().to_lowercase().replace(' ', "-"))
    }

    /// Pixel size of the exported image
    pub fn export_size(&self) -> u32 {
        (self.canvas_size * self.export_scale as f32).round() as u32
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
