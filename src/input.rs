use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in canvas coordinates (origin at the canvas' top-left corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button was pressed over the canvas
    PointerDown(Pos2),
    /// Pointer moved within the canvas, with or without the button held
    PointerMove(Pos2),
    /// Primary button was released over the canvas
    PointerUp(Pos2),
    /// Pointer came onto the canvas
    PointerEnter(Pos2),
    /// Pointer left the canvas (or the window)
    PointerLeave,
}

/// The pointer state of one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSnapshot {
    pub hover: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

/// Handles converting raw egui input into canvas events
#[derive(Debug)]
pub struct InputHandler {
    /// Last pointer position seen inside the canvas, in canvas coordinates
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Read this frame's primary-button pointer state from egui
    pub fn process_input(&mut self, ctx: &Context) -> Vec<CanvasEvent> {
        let snapshot = ctx.input(|input| PointerSnapshot {
            hover: input.pointer.hover_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        });
        self.translate(snapshot)
    }

    /// Turn a pointer snapshot into canvas events, tracking enter and leave
    /// against the previous snapshot.
    pub fn translate(&mut self, snapshot: PointerSnapshot) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        let inside = snapshot
            .hover
            .filter(|pos| self.canvas_rect.contains(*pos))
            .map(|pos| pos - self.canvas_rect.min.to_vec2());

        match (self.last_pointer_pos, inside) {
            (None, Some(pos)) => events.push(CanvasEvent::PointerEnter(pos)),
            (Some(last), Some(pos)) if last != pos => events.push(CanvasEvent::PointerMove(pos)),
            (Some(_), None) => events.push(CanvasEvent::PointerLeave),
            _ => {}
        }

        if let Some(pos) = inside {
            if snapshot.pressed {
                events.push(CanvasEvent::PointerDown(pos));
            }
            if snapshot.released {
                events.push(CanvasEvent::PointerUp(pos));
            }
        }

        self.last_pointer_pos = inside;
        events
    }
}
