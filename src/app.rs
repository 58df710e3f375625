use eframe::egui;

use crate::config::SketchpadConfig;
use crate::input::InputHandler;
use crate::panels;
use crate::prompt::GlyphPrompt;
use crate::renderer::Renderer;
use crate::sketchpad::Sketchpad;
use crate::tools::{ColorChannel, channel_to_percent};

/// The eframe application: UI chrome around one [`Sketchpad`].
pub struct SketchpadApp {
    pub(crate) config: SketchpadConfig,
    pub(crate) sketchpad: Sketchpad,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    /// The custom sticker prompt, while it is shown
    pub(crate) glyph_prompt: Option<GlyphPrompt>,
    /// Slider positions (0-100) for red, green and blue
    sliders: [f32; 3],
    /// Outcome of the last export, shown under the export button
    pub(crate) status: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SketchpadConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: SketchpadConfig) -> Self {
        let sketchpad = Sketchpad::new(&config);
        let color = sketchpad.color();
        let sliders = ColorChannel::ALL.map(|channel| channel_to_percent(channel.value(color)));
        Self {
            sketchpad,
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
            glyph_prompt: None,
            sliders,
            status: None,
            config,
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub(crate) fn slider_mut(&mut self, channel: ColorChannel) -> &mut f32 {
        let index = match channel {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2,
        };
        &mut self.sliders[index]
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        panels::glyph_prompt_window(self, ctx);

        self.sketchpad.poll_custom_glyph();

        // Changes made after the canvas was painted show up next frame
        if self.sketchpad.needs_redraw() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sliders_start_at_the_initial_color() {
        let config = SketchpadConfig {
            initial_color: [255, 0, 51],
            ..Default::default()
        };
        let mut app = SketchpadApp::with_config(config);
        assert_eq!(*app.slider_mut(ColorChannel::Red), 100.0);
        assert_eq!(*app.slider_mut(ColorChannel::Green), 0.0);
        assert_eq!(*app.slider_mut(ColorChannel::Blue), 20.0);
    }

    #[test]
    fn update_runs_headless() {
        let ctx = egui::Context::default();
        let mut app = SketchpadApp::with_config(SketchpadConfig::default());
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            panels::tools_panel(&mut app, ctx);
            panels::central_panel(&mut app, ctx);
        });
        assert!(!app.sketchpad().needs_redraw());
        assert!(!app.renderer.frame().is_empty());
    }
}
