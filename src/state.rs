/// Pointer state of the canvas.
///
/// ```text
///            pointer down
///   ┌──────┐ ───────────► ┌─────────┐ ◄─┐
///   │ Idle │              │ Drawing │   │ pointer move
///   └──────┘ ◄─────────── └─────────┘ ──┘
///            pointer up / pointer leave / undo / redo / clear
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasPhase {
    /// No button held
    #[default]
    Idle,
    /// Button held; pointer moves extend the newest committed action
    Drawing,
}

impl CanvasPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, CanvasPhase::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, CanvasPhase::Drawing)
    }
}
