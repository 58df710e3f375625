use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};

use crate::action::Action;
use crate::config::SketchpadConfig;
use crate::error::ExportError;
use crate::renderer;
use crate::surface::{RasterSurface, Scaled};

/// A finished PNG export
#[derive(Debug, Clone)]
pub struct ExportedImage {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl ExportedImage {
    pub fn data_uri(&self) -> String {
        to_data_uri(&self.png)
    }
}

/// Largest edge length, in pixels, of an exported image
pub const MAX_EXPORT_SIZE: u32 = 8192;

/// Replay `committed` onto a square offscreen raster `canvas_size * scale`
/// pixels wide. The cursor preview is never part of an export.
pub fn render_offscreen(
    committed: &[Action],
    canvas_size: f32,
    scale: u32,
) -> Result<RasterSurface, ExportError> {
    let requested = (canvas_size * scale as f32).round();
    if !requested.is_finite() || requested > MAX_EXPORT_SIZE as f32 {
        return Err(ExportError::TooLarge {
            size: requested,
            max: MAX_EXPORT_SIZE,
        });
    }

    let size = requested.max(0.0) as u32;
    if size == 0 {
        return Err(ExportError::EmptySurface {
            width: size,
            height: size,
        });
    }

    let mut raster = RasterSurface::new(size, size);
    let mut target = Scaled::new(&mut raster, scale as f32);
    if !renderer::redraw(&mut target, committed, None) {
        return Err(ExportError::EmptySurface {
            width: size,
            height: size,
        });
    }
    Ok(raster)
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

pub fn to_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

pub fn export_png(committed: &[Action], config: &SketchpadConfig) -> Result<ExportedImage, ExportError> {
    let raster = render_offscreen(committed, config.canvas_size, config.export_scale)?;
    let png = encode_png(raster.image())?;
    log::info!(
        "Exported {} actions to a {}x{} PNG ({} bytes)",
        committed.len(),
        raster.width(),
        raster.height(),
        png.len()
    );
    Ok(ExportedImage {
        file_name: config.export_file_name(),
        width: raster.width(),
        height: raster.height(),
        png,
    })
}

/// Hand the export to the user: a file next to the executable's working
/// directory on native, a browser download on the web.
#[cfg(not(target_arch = "wasm32"))]
pub fn deliver(export: &ExportedImage) -> Result<(), ExportError> {
    std::fs::write(&export.file_name, &export.png)?;
    log::info!("Saved {}", export.file_name);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn deliver(export: &ExportedImage) -> Result<(), ExportError> {
    use eframe::wasm_bindgen::{JsCast as _, JsValue};

    fn browser_error(err: JsValue) -> ExportError {
        ExportError::Browser(format!("{err:?}"))
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ExportError::Browser("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(browser_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|element| browser_error(element.into()))?;
    anchor.set_href(&export.data_uri());
    anchor.set_download(&export.file_name);
    anchor.click();
    log::info!("Started download of {}", export.file_name);
    Ok(())
}
