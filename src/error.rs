use thiserror::Error;

/// Errors that can occur while exporting the drawing
#[derive(Debug, Error)]
pub enum ExportError {
    /// The offscreen target has no pixels to render into
    #[error("export target has no area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },
    /// The requested export exceeds the largest supported edge length
    #[error("export of {size} px per side exceeds the {max} px limit")]
    TooLarge { size: f32, max: u32 },
    /// PNG encoding failed
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    /// Writing the exported file failed
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    /// The browser refused to start the download
    #[error("browser download failed: {0}")]
    Browser(String),
}

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
