use egui::{Color32, Pos2};

mod display_list;
mod raster;

pub use display_list::{DisplayList, DrawOp};
pub use raster::RasterSurface;

/// A 2D raster target that actions paint themselves onto.
///
/// Coordinates are in canvas space with the origin at the top-left corner.
pub trait Surface {
    /// Whether the surface can currently be drawn on. Render paths check this
    /// and skip drawing when it returns false.
    fn is_available(&self) -> bool {
        true
    }

    /// Wipe the whole surface back to its background
    fn clear(&mut self);

    /// Stroke a connected path through `points`
    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw `text` with its left edge at `origin.x` and its baseline at `origin.y`
    fn fill_text(&mut self, origin: Pos2, text: &str, font_size: f32, color: Color32);
}

/// Forwards every draw call to `inner` with coordinates and sizes multiplied by `factor`.
pub struct Scaled<S> {
    inner: S,
    factor: f32,
}

impl<S: Surface> Scaled<S> {
    pub fn new(inner: S, factor: f32) -> Self {
        Self { inner, factor }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn scale(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x * self.factor, pos.y * self.factor)
    }
}

impl<S: Surface> Surface for Scaled<S> {
    fn is_available(&self) -> bool {
        self.factor > 0.0 && self.inner.is_available()
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let scaled: Vec<Pos2> = points.iter().map(|p| self.scale(*p)).collect();
        self.inner.stroke_path(&scaled, width * self.factor, color);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let center = self.scale(center);
        self.inner.fill_circle(center, radius * self.factor, color);
    }

    fn fill_text(&mut self, origin: Pos2, text: &str, font_size: f32, color: Color32) {
        let origin = self.scale(origin);
        self.inner.fill_text(origin, text, font_size * self.factor, color);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        (**self).stroke_path(points, width, color);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        (**self).fill_circle(center, radius, color);
    }

    fn fill_text(&mut self, origin: Pos2, text: &str, font_size: f32, color: Color32) {
        (**self).fill_text(origin, text, font_size, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_multiplies_geometry() {
        let mut scaled = Scaled::new(DisplayList::default(), 4.0);
        scaled.stroke_path(&[Pos2::new(1.0, 2.0), Pos2::new(3.0, 4.0)], 2.0, Color32::RED);
        scaled.fill_circle(Pos2::new(5.0, 5.0), 1.5, Color32::BLUE);

        let list = scaled.into_inner();
        assert_eq!(
            list.ops(),
            &[
                DrawOp::Path {
                    points: vec![Pos2::new(4.0, 8.0), Pos2::new(12.0, 16.0)],
                    width: 8.0,
                    color: Color32::RED,
                },
                DrawOp::Circle {
                    center: Pos2::new(20.0, 20.0),
                    radius: 6.0,
                    color: Color32::BLUE,
                },
            ]
        );
    }

    #[test]
    fn zero_factor_is_unavailable() {
        let scaled = Scaled::new(DisplayList::default(), 0.0);
        assert!(!scaled.is_available());
    }
}
