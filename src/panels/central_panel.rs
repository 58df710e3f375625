use eframe::egui;

use crate::SketchpadApp;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(&app.config.app_name);

        let size = egui::Vec2::splat(app.config.canvas_size);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        // Handle input
        app.input.set_canvas_rect(canvas_rect);
        for event in app.input.process_input(ctx) {
            app.sketchpad.handle_event(event);
        }

        // Render the canvas
        app.renderer.render(&painter, canvas_rect, &mut app.sketchpad);
        painter.rect_stroke(canvas_rect, 0.0, egui::Stroke::new(1.0, egui::Color32::GRAY));

        // The preview replaces the system cursor over the canvas
        if app.sketchpad.is_pointer_inside() && !app.sketchpad.is_prompt_open() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }
    });
}
