use egui::{Color32, Pos2};

use crate::surface::Surface;

/// Freehand path drawn with the brush tool
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub fn new(points: Vec<Pos2>, thickness: f32, color: Color32) -> Self {
        Self {
            points,
            color,
            thickness,
        }
    }

    /// Get the points that make up this stroke
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub(crate) fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub(crate) fn render(&self, surface: &mut dyn Surface) {
        match self.points.as_slice() {
            [] => {}
            // A click without drag leaves a dot the width of the brush
            [point] => surface.fill_circle(*point, self.thickness / 2.0, self.color),
            points => surface.stroke_path(points, self.thickness, self.color),
        }
    }
}
