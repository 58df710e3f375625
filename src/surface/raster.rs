use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage};

use super::Surface;
use super::display_list::BACKGROUND;

/// Font families tried in order when rasterizing a character.
const FONT_FALLBACKS: [&str; 4] = ["NotoEmoji-Regular", "emoji-icon-font", "Ubuntu-Light", "Hack"];

/// Offscreen software raster backed by an RGBA image.
#[derive(Debug)]
pub struct RasterSurface {
    image: RgbaImage,
    fonts: Vec<FontArc>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(BACKGROUND)),
            fonts: load_fonts(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
        Some(Color32::from_rgba_unmultiplied(r, g, b, a))
    }

    /// Blend `color` into a pixel with the given coverage in 0..=1
    fn blend(&mut self, x: i64, y: i64, color: Color32, coverage: f32) {
        if coverage <= 0.0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width() || y >= self.height() {
            return;
        }

        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let alpha = coverage.min(1.0) * (a as f32 / 255.0);
        let pixel = self.image.get_pixel_mut(x, y);
        let src = [r, g, b];
        for (dst, src) in pixel.0.iter_mut().zip(src) {
            *dst = (src as f32 * alpha + *dst as f32 * (1.0 - alpha)).round() as u8;
        }
        pixel.0[3] = pixel.0[3].max((alpha * 255.0).round() as u8);
    }

    /// Pixels touched by `bounds`, clipped to the image
    fn span(&self, bounds: Rect) -> Option<PixelSpan> {
        let span = PixelSpan {
            min_x: bounds.min.x.floor().max(0.0) as i64,
            min_y: bounds.min.y.floor().max(0.0) as i64,
            max_x: (bounds.max.x.ceil() as i64).min(self.width() as i64 - 1),
            max_y: (bounds.max.y.ceil() as i64).min(self.height() as i64 - 1),
        };
        span.is_valid().then_some(span)
    }

    /// Visit every pixel in `bounds` and blend by the coverage `shape` reports
    /// for the pixel center.
    fn fill_coverage(&mut self, bounds: Rect, color: Color32, shape: impl Fn(Pos2) -> f32) {
        let Some(span) = self.span(bounds) else {
            return;
        };
        for (x, y) in span.pixels() {
            self.blend(x, y, color, shape(pixel_center(x, y)));
        }
    }

    fn font_for(&self, ch: char) -> Option<&FontArc> {
        self.fonts.iter().find(|font| font.glyph_id(ch).0 != 0)
    }
}

impl Surface for RasterSurface {
    fn is_available(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = to_rgba(BACKGROUND);
        }
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let half = width / 2.0;
        if points.len() == 1 {
            self.fill_circle(points[0], half, color);
            return;
        }

        let Some(area) = bounds_of(points, half + 1.0).and_then(|bounds| self.span(bounds)) else {
            return;
        };

        // Segments overlap at the joins, so keep the strongest coverage per
        // pixel and blend once at the end.
        let mut mask = CoverageMask::new(area);
        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let Some(span) = self.span(Rect::from_two_pos(a, b).expand(half + 1.0)) else {
                continue;
            };
            for (x, y) in span.pixels() {
                let distance = distance_to_line_segment(pixel_center(x, y), a, b);
                mask.raise(x, y, (half + 0.5 - distance).clamp(0.0, 1.0));
            }
        }

        for (x, y, coverage) in mask.covered() {
            self.blend(x, y, color, coverage);
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let bounds = Rect::from_center_size(center, egui::Vec2::splat(radius * 2.0 + 2.0));
        self.fill_coverage(bounds, color, |p| (radius + 0.5 - p.distance(center)).clamp(0.0, 1.0));
    }

    fn fill_text(&mut self, origin: Pos2, text: &str, font_size: f32, color: Color32) {
        let scale = PxScale::from(font_size);
        let mut caret = origin.x;

        for ch in text.chars() {
            let Some(font) = self.font_for(ch).cloned() else {
                log::debug!("no font covers {ch:?}, skipping");
                continue;
            };
            let scaled = font.as_scaled(scale);
            let mut glyph = scaled.scaled_glyph(ch);
            let advance = scaled.h_advance(glyph.id);
            glyph.position = point(caret, origin.y);
            if let Some(outline) = font.outline_glyph(glyph) {
                let bounds = outline.px_bounds();
                outline.draw(|gx, gy, coverage| {
                    let x = bounds.min.x as i64 + gx as i64;
                    let y = bounds.min.y as i64 + gy as i64;
                    self.blend(x, y, color, coverage);
                });
            }
            caret += advance;
        }
    }
}

/// Inclusive pixel rectangle
#[derive(Debug, Clone, Copy)]
struct PixelSpan {
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
}

impl PixelSpan {
    fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    fn width(&self) -> usize {
        (self.max_x - self.min_x + 1) as usize
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    fn pixels(self) -> impl Iterator<Item = (i64, i64)> {
        (self.min_y..=self.max_y).flat_map(move |y| (self.min_x..=self.max_x).map(move |x| (x, y)))
    }
}

/// Per-pixel maximum coverage over a span
struct CoverageMask {
    span: PixelSpan,
    values: Vec<f32>,
}

impl CoverageMask {
    fn new(span: PixelSpan) -> Self {
        let len = span.width() * (span.max_y - span.min_y + 1) as usize;
        Self {
            span,
            values: vec![0.0; len],
        }
    }

    fn raise(&mut self, x: i64, y: i64, coverage: f32) {
        if !self.span.contains(x, y) {
            return;
        }
        let index = (y - self.span.min_y) as usize * self.span.width() + (x - self.span.min_x) as usize;
        let value = &mut self.values[index];
        *value = value.max(coverage);
    }

    fn covered(&self) -> impl Iterator<Item = (i64, i64, f32)> + '_ {
        self.span
            .pixels()
            .zip(self.values.iter())
            .filter(|(_, coverage)| **coverage > 0.0)
            .map(|((x, y), coverage)| (x, y, *coverage))
    }
}

fn pixel_center(x: i64, y: i64) -> Pos2 {
    Pos2::new(x as f32 + 0.5, y as f32 + 0.5)
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

fn load_fonts() -> Vec<FontArc> {
    let definitions = egui::FontDefinitions::default();
    FONT_FALLBACKS
        .iter()
        .filter_map(|name| {
            let data = definitions.font_data.get(*name)?;
            match FontArc::try_from_vec(data.font.to_vec()) {
                Ok(font) => Some(font),
                Err(err) => {
                    log::warn!("failed to load font {name}: {err}");
                    None
                }
            }
        })
        .collect()
}

/// Calculate distance from a point to a line segment
fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

fn bounds_of(points: &[Pos2], padding: f32) -> Option<Rect> {
    let first = *points.first()?;
    let rect = points
        .iter()
        .fold(Rect::from_min_max(first, first), |rect, p| rect.union(Rect::from_min_max(*p, *p)));
    Some(rect.expand(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_cleared_to_background() {
        let surface = RasterSurface::new(8, 8);
        assert_eq!(surface.pixel(3, 3), Some(BACKGROUND));
        assert_eq!(surface.pixel(8, 0), None);
    }

    #[test]
    fn stroke_covers_the_segment() {
        let mut surface = RasterSurface::new(32, 32);
        surface.stroke_path(&[Pos2::new(2.0, 16.0), Pos2::new(30.0, 16.0)], 4.0, Color32::BLACK);
        assert_eq!(surface.pixel(16, 16), Some(Color32::BLACK));
        assert_eq!(surface.pixel(16, 2), Some(BACKGROUND));
    }

    #[test]
    fn single_point_path_is_a_dot() {
        let mut surface = RasterSurface::new(16, 16);
        surface.stroke_path(&[Pos2::new(8.0, 8.0)], 6.0, Color32::RED);
        assert_eq!(surface.pixel(8, 8), Some(Color32::RED));
    }

    #[test]
    fn empty_path_draws_nothing() {
        let mut surface = RasterSurface::new(4, 4);
        surface.stroke_path(&[], 6.0, Color32::RED);
        assert!(surface.image().pixels().all(|p| *p == to_rgba(BACKGROUND)));
    }

    #[test]
    fn clear_restores_background() {
        let mut surface = RasterSurface::new(16, 16);
        surface.fill_circle(Pos2::new(8.0, 8.0), 4.0, Color32::BLUE);
        surface.clear();
        assert_eq!(surface.pixel(8, 8), Some(BACKGROUND));
    }

    #[test]
    fn zero_sized_surface_is_unavailable() {
        assert!(!RasterSurface::new(0, 10).is_available());
    }

    #[test]
    fn polyline_join_is_blended_once() {
        let half_red = Color32::from_rgba_unmultiplied(255, 0, 0, 128);
        let mut joined = RasterSurface::new(32, 32);
        joined.stroke_path(
            &[Pos2::new(4.0, 16.0), Pos2::new(16.0, 16.0), Pos2::new(16.0, 4.0)],
            4.0,
            half_red,
        );
        let mut single = RasterSurface::new(32, 32);
        single.stroke_path(&[Pos2::new(4.0, 16.0), Pos2::new(16.0, 16.0)], 4.0, half_red);

        assert_eq!(joined.pixel(16, 16), single.pixel(10, 16));
    }

    #[test]
    fn long_polyline_only_touches_pixels_near_it() {
        let points: Vec<Pos2> = (0..400)
            .map(|i| {
                let t = i as f32 / 399.0;
                Pos2::new(8.0 + t * 1000.0, if i % 2 == 0 { 8.0 } else { 1000.0 })
            })
            .collect();
        let mut surface = RasterSurface::new(1024, 1024);
        surface.stroke_path(&points, 24.0, Color32::BLACK);

        assert_eq!(surface.pixel(8, 8), Some(Color32::BLACK));
        assert_eq!(surface.pixel(1016, 1016), Some(BACKGROUND));
    }

    #[test]
    fn fill_text_marks_pixels() {
        let mut surface = RasterSurface::new(64, 64);
        surface.fill_text(Pos2::new(8.0, 48.0), "🎃", 40.0, Color32::BLACK);
        assert!(surface.image().pixels().any(|p| *p != to_rgba(BACKGROUND)));
    }

    #[test]
    fn point_to_segment_distance() {
        let d = distance_to_line_segment(Pos2::new(5.0, 3.0), Pos2::ZERO, Pos2::new(10.0, 0.0));
        assert!((d - 3.0).abs() < 1e-5);
        let d = distance_to_line_segment(Pos2::new(13.0, 4.0), Pos2::ZERO, Pos2::new(10.0, 0.0));
        assert!((d - 5.0).abs() < 1e-5);
    }
}
