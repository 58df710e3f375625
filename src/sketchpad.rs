use egui::{Color32, Pos2};
use log::debug;

use crate::action::Action;
use crate::config::{SketchpadConfig, StickerMode};
use crate::error::ExportError;
use crate::export::{self, ExportedImage};
use crate::history::History;
use crate::input::CanvasEvent;
use crate::prompt::{GlyphPrompt, PendingGlyph, PromptPoll};
use crate::renderer;
use crate::state::CanvasPhase;
use crate::surface::Surface;
use crate::tools::{ColorChannel, ToolKind, ToolState};

/// Owns the drawing model and turns input into changes of it.
///
/// Every change raises a redraw signal; the canvas is only ever rebuilt from
/// the model through [`Sketchpad::redraw`].
#[derive(Debug)]
pub struct Sketchpad {
    history: History,
    tools: ToolState,
    /// Indicator of the active tool; never part of history
    preview: Action,
    /// Last known pointer position on the canvas
    pointer: Pos2,
    pointer_inside: bool,
    phase: CanvasPhase,
    sticker_mode: StickerMode,
    redraw_requested: bool,
    pending_glyph: Option<PendingGlyph>,
}

impl Sketchpad {
    pub fn new(config: &SketchpadConfig) -> Self {
        let tools = ToolState::new(config.thin_thickness, config.initial_color());
        let preview = tools.preview_at(Pos2::ZERO);
        Self {
            history: History::new(),
            tools,
            preview,
            pointer: Pos2::ZERO,
            pointer_inside: false,
            phase: CanvasPhase::Idle,
            sticker_mode: config.sticker_mode,
            // The first frame still needs a cleared canvas
            redraw_requested: true,
            pending_glyph: None,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn preview(&self) -> &Action {
        &self.preview
    }

    pub fn phase(&self) -> CanvasPhase {
        self.phase
    }

    pub fn is_pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    pub fn handle_event(&mut self, event: CanvasEvent) {
        if self.pending_glyph.is_some() {
            return;
        }
        match event {
            CanvasEvent::PointerDown(pos) => self.pointer_down(pos),
            CanvasEvent::PointerMove(pos) => self.pointer_move(pos),
            CanvasEvent::PointerUp(pos) => self.pointer_up(pos),
            CanvasEvent::PointerEnter(pos) => self.pointer_enter(pos),
            CanvasEvent::PointerLeave => self.pointer_leave(),
        }
    }

    /// Start a new action from the active tool and commit it right away
    pub fn pointer_down(&mut self, pos: Pos2) {
        self.track_pointer(pos);

        let relocated = match (self.tools.active(), self.sticker_mode) {
            (ToolKind::Sticker, StickerMode::SingleInstance) => {
                self.history.take_sticker(self.tools.glyph())
            }
            _ => None,
        };
        let action = match relocated {
            Some(mut sticker) => {
                debug!("Relocating sticker {:?} to {pos:?}", self.tools.glyph());
                sticker.extend(pos);
                sticker
            }
            None => self.tools.begin_action(pos),
        };

        self.history.commit(action);
        self.phase = CanvasPhase::Drawing;
        self.request_redraw();
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        self.track_pointer(pos);
        if self.phase.is_drawing() {
            if let Some(action) = self.history.last_mut() {
                action.extend(pos);
            }
        }
        self.request_redraw();
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        self.track_pointer(pos);
        self.phase = CanvasPhase::Idle;
        self.request_redraw();
    }

    pub fn pointer_enter(&mut self, pos: Pos2) {
        self.track_pointer(pos);
        self.request_redraw();
    }

    /// Hide the preview and end any stroke at its last in-bounds point
    pub fn pointer_leave(&mut self) {
        self.pointer_inside = false;
        self.phase = CanvasPhase::Idle;
        self.request_redraw();
    }

    pub fn undo(&mut self) {
        self.phase = CanvasPhase::Idle;
        if self.history.undo() {
            self.request_redraw();
        }
    }

    pub fn redo(&mut self) {
        self.phase = CanvasPhase::Idle;
        if self.history.redo() {
            self.request_redraw();
        }
    }

    pub fn clear(&mut self) {
        self.phase = CanvasPhase::Idle;
        if self.history.clear() {
            self.request_redraw();
        }
    }

    pub fn select_brush(&mut self, thickness: f32) {
        self.tools.select_brush(thickness);
        self.refresh_preview();
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        if self.tools.select_sticker(glyph) {
            self.refresh_preview();
        }
    }

    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.tools.set_color(r, g, b);
        self.refresh_preview();
    }

    pub fn set_channel_percent(&mut self, channel: ColorChannel, percent: f32) {
        self.tools.set_channel_percent(channel, percent);
        self.refresh_preview();
    }

    pub fn color(&self) -> Color32 {
        self.tools.color()
    }

    /// Open the custom sticker prompt. Returns `None` while another prompt is
    /// still open; canvas input is ignored until it is answered.
    pub fn request_custom_glyph(&mut self) -> Option<GlyphPrompt> {
        if self.pending_glyph.is_some() {
            return None;
        }
        let (prompt, pending) = GlyphPrompt::open();
        self.pending_glyph = Some(pending);
        self.phase = CanvasPhase::Idle;
        Some(prompt)
    }

    pub fn is_prompt_open(&self) -> bool {
        self.pending_glyph.is_some()
    }

    /// Pick up the answer of an open prompt, if it has arrived
    pub fn poll_custom_glyph(&mut self) {
        let Some(pending) = self.pending_glyph.as_mut() else {
            return;
        };
        match pending.poll() {
            PromptPoll::Waiting => {}
            PromptPoll::Answered(answer) => {
                self.pending_glyph = None;
                match answer {
                    Some(glyph) => self.select_sticker(&glyph),
                    None => debug!("Custom sticker prompt cancelled"),
                }
            }
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Rebuild `surface` from history and the preview. The redraw signal is
    /// only consumed if the surface could be drawn on.
    pub fn redraw(&mut self, surface: &mut dyn Surface) -> bool {
        let preview = self.pointer_inside.then_some(&self.preview);
        let drawn = renderer::redraw(surface, self.history.committed(), preview);
        if drawn {
            self.redraw_requested = false;
        }
        drawn
    }

    /// Render committed actions (without the preview) to an upscaled PNG
    pub fn export(&self, config: &SketchpadConfig) -> Result<ExportedImage, ExportError> {
        export::export_png(self.history.committed(), config)
    }

    fn track_pointer(&mut self, pos: Pos2) {
        self.pointer = pos;
        self.pointer_inside = true;
        self.preview.extend(pos);
    }

    fn refresh_preview(&mut self) {
        self.preview = self.tools.preview_at(self.pointer);
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}
