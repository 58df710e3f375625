use eframe::egui;

use crate::SketchpadApp;
use crate::components::ToolButton;
use crate::export;
use crate::tools::{ColorChannel, ToolKind};
use crate::widgets::ColorSlider;

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.label("Brush");
            ui.horizontal(|ui| {
                let presets = [
                    ("Thin", app.config.thin_thickness),
                    ("Thick", app.config.thick_thickness),
                ];
                for (label, thickness) in presets {
                    let selected = app.sketchpad.tools().is_brush_selected(thickness);
                    if ui.add(ToolButton::new(label, selected)).clicked() {
                        log::info!("Brush selected from UI: {label} ({thickness})");
                        app.sketchpad.select_brush(thickness);
                    }
                }
            });

            ui.label("Stickers");
            ui.horizontal_wrapped(|ui| {
                for glyph in &app.config.stickers {
                    let selected = app.sketchpad.tools().is_sticker_selected(glyph);
                    if ui.add(ToolButton::glyph(glyph, selected)).clicked() {
                        log::info!("Sticker selected from UI: {glyph}");
                        app.sketchpad.select_sticker(glyph);
                    }
                }

                let tools = app.sketchpad.tools();
                let custom_selected = tools.active() == ToolKind::Sticker
                    && !app.config.stickers.iter().any(|s| s == tools.glyph());
                let custom_label = if custom_selected { tools.glyph() } else { "Custom…" };
                let clicked = ui
                    .add_enabled(
                        app.glyph_prompt.is_none(),
                        ToolButton::glyph(custom_label, custom_selected),
                    )
                    .clicked();
                if clicked {
                    app.glyph_prompt = app.sketchpad.request_custom_glyph();
                }
            });

            ui.separator();

            ui.label("Color");
            for channel in ColorChannel::ALL {
                let percent = app.slider_mut(channel);
                if ui.add(ColorSlider::new(channel, percent)).changed() {
                    let percent = *percent;
                    app.sketchpad.set_channel_percent(channel, percent);
                }
            }
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(32.0, 16.0), egui::Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, app.sketchpad.color());

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.sketchpad.history().can_undo();
                let can_redo = app.sketchpad.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.sketchpad.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.sketchpad.redo();
                }
                if ui.button("Clear").clicked() {
                    app.sketchpad.clear();
                }
            });

            if ui.button("Export").clicked() {
                let result = app
                    .sketchpad
                    .export(&app.config)
                    .and_then(|image| export::deliver(&image).map(|()| image.file_name));
                app.status = Some(match result {
                    Ok(file_name) => format!("Exported {file_name}"),
                    Err(err) => {
                        log::warn!("Export failed: {err}");
                        format!("Export failed: {err}")
                    }
                });
            }

            if let Some(status) = &app.status {
                ui.small(status);
            }
        });
}
