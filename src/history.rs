use crate::action::Action;

/// Committed drawing actions plus the actions that can be redone.
///
/// `committed` is in temporal order (oldest first) and is the single source
/// of truth for what the canvas shows.
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Actions that are currently drawn, and can be undone
    committed: Vec<Action>,
    /// Actions that were undone, most recent last
    undone: Vec<Action>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action and invalidate redo
    pub fn commit(&mut self, action: Action) {
        debug_assert!(!action.is_preview(), "previews never enter history");
        self.committed.push(action);
        self.undone.clear();
    }

    /// Move the last committed action onto the redo stack.
    /// Returns false (and does nothing) if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(action) => {
                self.undone.push(action);
                true
            }
            None => false,
        }
    }

    /// Move the last undone action back onto the committed stack.
    /// Returns false (and does nothing) if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(action) => {
                self.committed.push(action);
                true
            }
            None => false,
        }
    }

    /// Drop every committed and undone action. Returns false if both were already empty.
    pub fn clear(&mut self) -> bool {
        let changed = !self.committed.is_empty() || !self.undone.is_empty();
        self.committed.clear();
        self.undone.clear();
        changed
    }

    /// Remove the committed placement of `glyph`, if any, keeping the
    /// relative order of everything else.
    pub fn take_sticker(&mut self, glyph: &str) -> Option<Action> {
        let index = self
            .committed
            .iter()
            .rposition(|action| action.sticker_glyph() == Some(glyph))?;
        Some(self.committed.remove(index))
    }

    /// The action most recently committed, which is the one being drawn while
    /// the pointer is held down.
    pub fn last_mut(&mut self) -> Option<&mut Action> {
        self.committed.last_mut()
    }

    pub fn committed(&self) -> &[Action] {
        &self.committed
    }

    pub fn undone(&self) -> &[Action] {
        &self.undone
    }

    /// Returns true if there are actions that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are actions that can be redone
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::factory;
    use egui::{Color32, Pos2};

    fn stroke(x: f32) -> Action {
        factory::create_stroke(Pos2::new(x, x), 2.0, Color32::BLACK)
    }

    #[test]
    fn undo_and_redo_on_empty_history_are_noops() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(!history.clear());
        assert!(history.committed().is_empty());
    }

    #[test]
    fn commit_clears_redo() {
        let mut history = History::new();
        history.commit(stroke(0.0));
        history.commit(stroke(1.0));
        assert!(history.undo());
        assert!(history.can_redo());

        history.commit(stroke(2.0));
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.committed(), &[stroke(0.0), stroke(2.0)]);
    }

    #[test]
    fn take_sticker_removes_only_the_matching_glyph() {
        let mut history = History::new();
        history.commit(factory::create_sticker(Pos2::ZERO, "🎃"));
        history.commit(stroke(1.0));
        history.commit(factory::create_sticker(Pos2::ZERO, "👻"));

        let taken = history.take_sticker("🎃").unwrap();
        assert_eq!(taken.sticker_glyph(), Some("🎃"));
        assert_eq!(history.committed().len(), 2);
        assert!(history.take_sticker("🍬").is_none());
    }
}
