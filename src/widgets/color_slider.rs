use eframe::egui::{self, Color32, Mesh, Painter, Pos2, Rect, Response, Sense, Shape, Ui, Vec2, Widget};

use crate::tools::{ColorChannel, percent_to_channel};

const TRACK_HEIGHT: f32 = 6.0;
const TRACK_COLOR: Color32 = Color32::from_gray(220);

/// A 0-100 slider for one color channel, with a gradient bar beneath it that
/// fills up to the current value.
pub struct ColorSlider<'a> {
    channel: ColorChannel,
    percent: &'a mut f32,
}

impl<'a> ColorSlider<'a> {
    pub fn new(channel: ColorChannel, percent: &'a mut f32) -> Self {
        Self { channel, percent }
    }
}

impl Widget for ColorSlider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self { channel, percent } = self;
        ui.horizontal(|ui| {
            ui.label(channel.label());
            ui.vertical(|ui| {
                let response = ui.add(egui::Slider::new(&mut *percent, 0.0..=100.0).show_value(false));
                let (track, _) = ui.allocate_exact_size(
                    Vec2::new(response.rect.width(), TRACK_HEIGHT),
                    Sense::hover(),
                );
                paint_track(ui.painter(), track, channel, *percent);
                response
            })
            .inner
        })
        .inner
    }
}

/// Portion of the track that is filled for a slider value
pub fn fill_fraction(percent: f32) -> f32 {
    percent.clamp(0.0, 100.0) / 100.0
}

fn paint_track(painter: &Painter, track: Rect, channel: ColorChannel, percent: f32) {
    painter.rect_filled(track, 2.0, TRACK_COLOR);

    let fraction = fill_fraction(percent);
    if fraction <= 0.0 {
        return;
    }
    let filled = Rect::from_min_max(
        track.min,
        Pos2::new(track.left() + track.width() * fraction, track.bottom()),
    );
    let end = channel.with_value(Color32::BLACK, percent_to_channel(percent));

    let mut mesh = Mesh::default();
    mesh.colored_vertex(filled.left_top(), Color32::BLACK);
    mesh.colored_vertex(filled.right_top(), end);
    mesh.colored_vertex(filled.right_bottom(), end);
    mesh.colored_vertex(filled.left_bottom(), Color32::BLACK);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_tracks_value() {
        assert_eq!(fill_fraction(0.0), 0.0);
        assert_eq!(fill_fraction(25.0), 0.25);
        assert_eq!(fill_fraction(250.0), 1.0);
    }
}
