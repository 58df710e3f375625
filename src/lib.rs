#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod prompt;
pub mod renderer;
pub mod sketchpad;
pub mod state;
pub mod surface;
pub mod tools;
pub mod widgets;

pub use action::Action;
pub use app::SketchpadApp;
pub use config::{SketchpadConfig, StickerMode};
pub use error::{ConfigError, ExportError};
pub use export::ExportedImage;
pub use history::History;
pub use input::{CanvasEvent, InputHandler};
pub use prompt::GlyphPrompt;
pub use renderer::Renderer;
pub use sketchpad::Sketchpad;
pub use state::CanvasPhase;
pub use surface::{DisplayList, RasterSurface, Surface};
pub use tools::{ToolKind, ToolState};
