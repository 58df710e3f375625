use egui::{Color32, FontId, Galley, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use super::Surface;

/// Background the canvas is cleared to
pub const BACKGROUND: Color32 = Color32::WHITE;

/// A single recorded draw call, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Path {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Text {
        origin: Pos2,
        text: String,
        font_size: f32,
        color: Color32,
    },
}

/// Surface that records draw calls so a redraw can be replayed onto the
/// egui painter every frame without touching the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Paint the recorded operations into `canvas`, which maps canvas
    /// coordinate (0, 0) to `canvas.min`.
    pub fn paint(&self, painter: &Painter, canvas: Rect) {
        let painter = painter.with_clip_rect(canvas);
        let offset = canvas.min.to_vec2();

        for op in &self.ops {
            match op {
                DrawOp::Clear => {
                    painter.rect_filled(canvas, 0.0, BACKGROUND);
                }
                DrawOp::Path { points, width, color } => {
                    let points = points.iter().map(|p| *p + offset).collect();
                    painter.add(Shape::line(points, EguiStroke::new(*width, *color)));
                }
                DrawOp::Circle { center, radius, color } => {
                    painter.circle_filled(*center + offset, *radius, *color);
                }
                DrawOp::Text { origin, text, font_size, color } => {
                    let galley =
                        painter.layout_no_wrap(text.clone(), FontId::proportional(*font_size), *color);
                    let pos = galley_pos_for_baseline(*origin + offset, &galley);
                    painter.galley(pos, galley, *color);
                }
            }
        }
    }
}

/// Top-left corner that puts the first row's baseline of `galley` at `origin`
fn galley_pos_for_baseline(origin: Pos2, galley: &Galley) -> Pos2 {
    let baseline = galley
        .rows
        .first()
        .and_then(|row| row.glyphs.first())
        .map_or(galley.size().y, |glyph| glyph.pos.y);
    origin - Vec2::new(0.0, baseline)
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.ops.push(DrawOp::Path {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(DrawOp::Circle { center, radius, color });
    }

    fn fill_text(&mut self, origin: Pos2, text: &str, font_size: f32, color: Color32) {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.to_owned(),
            font_size,
            color,
        });
    }
}
