use egui::{Painter, Rect};

use crate::action::Action;
use crate::sketchpad::Sketchpad;
use crate::surface::{DisplayList, Surface};

/// Rebuild `surface` from scratch: clear it, replay `committed` in order,
/// then draw `preview` on top.
///
/// Returns false without drawing anything if the surface is unavailable.
pub fn redraw<'a>(
    surface: &mut dyn Surface,
    committed: impl IntoIterator<Item = &'a Action>,
    preview: Option<&Action>,
) -> bool {
    if !surface.is_available() {
        log::warn!("Drawing surface unavailable, skipping redraw");
        return false;
    }

    surface.clear();
    for action in committed {
        action.render(surface);
    }
    if let Some(preview) = preview {
        preview.render(surface);
    }
    true
}

/// Paints the canvas each frame from the display list of the last redraw.
#[derive(Debug, Default)]
pub struct Renderer {
    frame: DisplayList,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The draw operations of the most recent redraw
    pub fn frame(&self) -> &DisplayList {
        &self.frame
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas rectangle in screen coordinates
    ///     sketchpad (Sketchpad): Rebuilds the display list if it signalled a change
    pub fn render(&mut self, painter: &Painter, rect: Rect, sketchpad: &mut Sketchpad) {
        if !rect.is_positive() {
            log::warn!("Canvas rect {rect:?} has no area, skipping render");
            return;
        }

        if sketchpad.needs_redraw() {
            sketchpad.redraw(&mut self.frame);
        }
        self.frame.paint(painter, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::factory;
    use crate::surface::DrawOp;
    use egui::{Color32, Pos2};

    struct LostSurface;

    impl Surface for LostSurface {
        fn is_available(&self) -> bool {
            false
        }

        fn clear(&mut self) {
            panic!("lost surface must not be drawn on");
        }

        fn stroke_path(&mut self, _points: &[Pos2], _width: f32, _color: Color32) {
            panic!("lost surface must not be drawn on");
        }

        fn fill_circle(&mut self, _center: Pos2, _radius: f32, _color: Color32) {
            panic!("lost surface must not be drawn on");
        }

        fn fill_text(&mut self, _origin: Pos2, _text: &str, _font_size: f32, _color: Color32) {
            panic!("lost surface must not be drawn on");
        }
    }

    #[test]
    fn preview_is_drawn_last() {
        let committed = [factory::create_stroke(Pos2::ZERO, 2.0, Color32::BLACK)];
        let preview = factory::create_brush_preview(Pos2::new(4.0, 4.0), 3.0, Color32::RED);

        let mut list = DisplayList::default();
        assert!(redraw(&mut list, &committed, Some(&preview)));

        assert_eq!(list.ops().first(), Some(&DrawOp::Clear));
        assert_eq!(
            list.ops().last(),
            Some(&DrawOp::Circle {
                center: Pos2::new(4.0, 4.0),
                radius: 3.0,
                color: Color32::RED,
            })
        );
        assert_eq!(list.ops().len(), 3);
    }

    #[test]
    fn unavailable_surface_is_skipped() {
        let committed = [factory::create_stroke(Pos2::ZERO, 2.0, Color32::BLACK)];
        assert!(!redraw(&mut LostSurface, &committed, None));
    }
}
