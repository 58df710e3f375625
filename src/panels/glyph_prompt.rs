use eframe::egui;

use crate::SketchpadApp;

/// Shows the custom sticker prompt while one is open
pub fn glyph_prompt_window(app: &mut SketchpadApp, ctx: &egui::Context) {
    let Some(prompt) = app.glyph_prompt.as_mut() else {
        return;
    };

    let mut submitted = false;
    let mut cancelled = false;
    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Type an emoji or short text to stamp:");
            let edit = ui.text_edit_singleline(prompt.text_mut());
            if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            } else if !edit.has_focus() && !edit.lost_focus() {
                edit.request_focus();
            }
            ui.horizontal(|ui| {
                submitted |= ui.button("OK").clicked();
                cancelled |= ui.button("Cancel").clicked();
            });
        });

    if submitted {
        if let Some(prompt) = app.glyph_prompt.take() {
            prompt.submit();
        }
    } else if cancelled {
        if let Some(prompt) = app.glyph_prompt.take() {
            prompt.cancel();
        }
    }
}
