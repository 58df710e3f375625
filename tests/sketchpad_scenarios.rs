use egui::Pos2;
use sketchpad::surface::{DisplayList, RasterSurface};
use sketchpad::{CanvasEvent, Sketchpad, SketchpadConfig, StickerMode};

fn sketchpad_with(mode: StickerMode) -> Sketchpad {
    Sketchpad::new(&SketchpadConfig {
        sticker_mode: mode,
        ..Default::default()
    })
}

fn drag(pad: &mut Sketchpad, from: Pos2, to: Pos2) {
    pad.handle_event(CanvasEvent::PointerDown(from));
    pad.handle_event(CanvasEvent::PointerMove(to));
    pad.handle_event(CanvasEvent::PointerUp(to));
}

#[test]
fn test_single_instance_sticker_relocates() {
    let mut pad = sketchpad_with(StickerMode::SingleInstance);
    pad.select_sticker("🎃");

    pad.handle_event(CanvasEvent::PointerDown(Pos2::new(50.0, 50.0)));
    pad.handle_event(CanvasEvent::PointerUp(Pos2::new(50.0, 50.0)));
    assert_eq!(pad.history().committed().len(), 1);

    pad.handle_event(CanvasEvent::PointerDown(Pos2::new(80.0, 80.0)));
    pad.handle_event(CanvasEvent::PointerUp(Pos2::new(80.0, 80.0)));

    let committed = pad.history().committed();
    assert_eq!(committed.len(), 1);
    let sticker = committed[0].as_sticker().unwrap();
    assert_eq!(sticker.glyph(), "🎃");
    assert_eq!(sticker.position(), Pos2::new(80.0, 80.0));
}

#[test]
fn test_relocated_sticker_moves_to_top() {
    let mut pad = sketchpad_with(StickerMode::SingleInstance);
    pad.select_sticker("🎃");
    pad.pointer_down(Pos2::new(10.0, 10.0));
    pad.pointer_up(Pos2::new(10.0, 10.0));

    pad.select_brush(2.0);
    drag(&mut pad, Pos2::new(0.0, 0.0), Pos2::new(20.0, 20.0));

    pad.select_sticker("🎃");
    pad.pointer_down(Pos2::new(30.0, 30.0));
    pad.pointer_move(Pos2::new(35.0, 30.0));
    pad.pointer_up(Pos2::new(35.0, 30.0));

    let committed = pad.history().committed();
    assert_eq!(committed.len(), 2);
    assert!(committed[0].as_stroke().is_some());
    assert_eq!(committed[1].as_sticker().unwrap().position(), Pos2::new(35.0, 30.0));
}

#[test]
fn test_multi_instance_stickers_accumulate() {
    let mut pad = sketchpad_with(StickerMode::MultiInstance);
    pad.select_sticker("👻");
    pad.pointer_down(Pos2::new(50.0, 50.0));
    pad.pointer_up(Pos2::new(50.0, 50.0));
    pad.pointer_down(Pos2::new(80.0, 80.0));
    pad.pointer_up(Pos2::new(80.0, 80.0));

    assert_eq!(pad.history().committed().len(), 2);
}

#[test]
fn test_clear_after_five_strokes() {
    let mut pad = sketchpad_with(StickerMode::SingleInstance);
    for i in 0..5 {
        let y = i as f32 * 10.0;
        drag(&mut pad, Pos2::new(0.0, y), Pos2::new(50.0, y));
    }
    pad.undo();
    assert_eq!(pad.history().committed().len(), 4);

    pad.clear();
    assert!(pad.history().committed().is_empty());
    assert!(pad.history().undone().is_empty());

    pad.redo();
    assert!(pad.history().committed().is_empty());
}

#[test]
fn test_pointer_leave_ends_stroke_at_last_point() {
    let mut pad = sketchpad_with(StickerMode::SingleInstance);
    pad.handle_event(CanvasEvent::PointerEnter(Pos2::new(5.0, 5.0)));
    pad.handle_event(CanvasEvent::PointerDown(Pos2::new(5.0, 5.0)));
    pad.handle_event(CanvasEvent::PointerMove(Pos2::new(6.0, 6.0)));
    pad.handle_event(CanvasEvent::PointerLeave);
    assert!(!pad.is_pointer_inside());
    assert!(pad.phase().is_idle());

    pad.handle_event(CanvasEvent::PointerEnter(Pos2::new(10.0, 10.0)));
    pad.handle_event(CanvasEvent::PointerMove(Pos2::new(11.0, 11.0)));

    let committed = pad.history().committed();
    assert_eq!(committed.len(), 1);
    assert_eq!(
        committed[0].as_stroke().unwrap().points(),
        &[Pos2::new(5.0, 5.0), Pos2::new(6.0, 6.0)]
    );
}

#[test]
fn test_single_point_stroke_renders() {
    let mut pad = sketchpad_with(StickerMode::SingleInstance);
    pad.select_brush(6.0);
    pad.pointer_down(Pos2::new(40.0, 40.0));
    pad.pointer_up(Pos2::new(40.0, 40.0));
    pad.pointer_leave();

    let stroke = pad.history().committed()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 1);

    let mut raster = RasterSurface::new(64, 64);
    assert!(pad.redraw(&mut raster));
    assert_eq!(raster.pixel(40, 40), Some(egui::Color32::BLACK));
}

#[test]
fn test_redraw_is_idempotent() {
    let mut pad = sketchpad_with(StickerMode::SingleInstance);
    pad.handle_event(CanvasEvent::PointerEnter(Pos2::new(1.0, 1.0)));
    drag(&mut pad, Pos2::new(1.0, 1.0), Pos2::new(30.0, 20.0));
    pad.select_sticker("🍬");
    pad.pointer_down(Pos2::new(40.0, 40.0));
    pad.pointer_up(Pos2::new(40.0, 40.0));

    let mut first = DisplayList::default();
    let mut second = DisplayList::default();
    pad.redraw(&mut first);
    pad.redraw(&mut second);
    assert_eq!(first, second);

    let mut raster = RasterSurface::new(64, 64);
    pad.redraw(&mut raster);
    let before = raster.image().clone();
    pad.redraw(&mut raster);
    assert_eq!(raster.image().as_raw(), before.as_raw());
}

#[test]
fn test_every_change_raises_redraw_signal() {
    let mut pad = sketchpad_with(StickerMode::SingleInstance);
    let mut list = DisplayList::default();
    let mut settle = |pad: &mut Sketchpad| {
        pad.redraw(&mut list);
        assert!(!pad.needs_redraw());
    };

    settle(&mut pad);
    pad.pointer_down(Pos2::new(1.0, 1.0));
    assert!(pad.needs_redraw());
    settle(&mut pad);

    pad.pointer_up(Pos2::new(1.0, 1.0));
    assert!(pad.needs_redraw());
    settle(&mut pad);

    pad.undo();
    assert!(pad.needs_redraw());
    settle(&mut pad);

    pad.redo();
    assert!(pad.needs_redraw());
    settle(&mut pad);

    // Nothing left to redo: no change, no signal
    pad.redo();
    assert!(!pad.needs_redraw());

    pad.select_brush(6.0);
    assert!(pad.needs_redraw());
}
