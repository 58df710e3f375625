#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use sketchpad::{SketchpadApp, SketchpadConfig};

    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // An optional JSON config file may be passed as the only argument.
    let config = match std::env::args_os().nth(1) {
        Some(path) => SketchpadConfig::load(path)?,
        None => SketchpadConfig::default(),
    };
    log::debug!("Starting with {config:?}");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_min_inner_size([400.0, 340.0])
            .with_title(&config.app_name),
        ..Default::default()
    };
    let app_name = config.app_name.clone();
    eframe::run_native(
        &app_name,
        native_options,
        Box::new(|cc| Ok(Box::new(SketchpadApp::new(cc, config)))),
    )?;
    Ok(())
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;
    use sketchpad::{SketchpadApp, SketchpadConfig};

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("Failed to find the_canvas_id")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id was not a HtmlCanvasElement");

        let config = SketchpadConfig::default();
        document.set_title(&config.app_name);

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(SketchpadApp::new(cc, config)))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("Failed to start eframe: {e:?}");
        }
    });
}
