use egui::{Color32, Pos2};
use sketchpad::command::{Command, CommandContext, CommandOutcome};
use sketchpad::document::Document;
use sketchpad::error::PaintError;
use sketchpad::state::PenState;
use sketchpad::stroke::{CanvasItem, Ink};
use sketchpad::tools::{FreehandTool, TextTool, Tool};

fn run(doc: &mut Document, pen: &mut PenState, command: Command) -> Result<CommandOutcome, PaintError> {
    let mut ctx = CommandContext::new(doc, pen, None);
    command.execute(&mut ctx)
}

/// Drag the freehand tool through `points` and execute what it emits
fn drag(doc: &mut Document, pen: &mut PenState, points: &[Pos2]) {
    let mut tool = FreehandTool::new();
    let mut commands = Vec::new();
    commands.extend(tool.on_pointer_down(points[0]));
    for point in &points[1..] {
        commands.extend(tool.on_pointer_move(*point));
    }
    commands.extend(tool.on_pointer_up(points[points.len() - 1]));
    for command in commands {
        run(doc, pen, command).unwrap();
    }
}

#[test]
fn test_drag_draws_on_screen_and_bitmap() {
    let mut doc = Document::default();
    let mut pen = PenState::default();

    drag(
        &mut doc,
        &mut pen,
        &[Pos2::new(10.5, 10.5), Pos2::new(30.5, 10.5), Pos2::new(30.5, 40.5)],
    );

    assert_eq!(doc.items().len(), 2);
    assert!(matches!(
        doc.items()[0],
        CanvasItem::Segment { ink, width, .. } if ink == Ink::Color(Color32::BLACK) && width == 1.0
    ));
    assert_eq!(doc.pick_color(Pos2::new(20.0, 10.0)), Some(Color32::BLACK));
    assert_eq!(doc.pick_color(Pos2::new(30.0, 25.0)), Some(Color32::BLACK));
    assert_eq!(doc.pick_color(Pos2::new(20.0, 25.0)), Some(Color32::WHITE));
}

#[test]
fn test_pen_size_and_color_apply_to_new_strokes() {
    let mut doc = Document::default();
    let mut pen = PenState::default();
    run(&mut doc, &mut pen, Command::SetColor(Color32::RED)).unwrap();
    run(&mut doc, &mut pen, Command::SetPenSize(10)).unwrap();

    drag(&mut doc, &mut pen, &[Pos2::new(100.0, 100.0), Pos2::new(200.0, 100.0)]);

    assert_eq!(doc.pick_color(Pos2::new(150.0, 96.0)), Some(Color32::RED));
    assert_eq!(doc.pick_color(Pos2::new(150.0, 104.0)), Some(Color32::RED));
    assert_eq!(doc.pick_color(Pos2::new(150.0, 107.0)), Some(Color32::WHITE));
}

#[test]
fn test_eraser_paints_background_and_brush_restores_color() {
    let mut doc = Document::default();
    let mut pen = PenState::default();
    run(&mut doc, &mut pen, Command::SetColor(Color32::BLUE)).unwrap();
    run(&mut doc, &mut pen, Command::SetPenSize(5)).unwrap();
    drag(&mut doc, &mut pen, &[Pos2::new(50.0, 50.0), Pos2::new(150.0, 50.0)]);
    assert_eq!(doc.pick_color(Pos2::new(100.0, 50.0)), Some(Color32::BLUE));

    run(&mut doc, &mut pen, Command::ToggleEraser).unwrap();
    drag(&mut doc, &mut pen, &[Pos2::new(100.0, 30.0), Pos2::new(100.0, 70.0)]);
    assert_eq!(doc.pick_color(Pos2::new(100.0, 50.0)), Some(Color32::WHITE));
    assert_eq!(doc.pick_color(Pos2::new(60.0, 50.0)), Some(Color32::BLUE));

    run(&mut doc, &mut pen, Command::UseBrush).unwrap();
    drag(&mut doc, &mut pen, &[Pos2::new(50.0, 200.0), Pos2::new(150.0, 200.0)]);
    assert_eq!(doc.pick_color(Pos2::new(100.0, 200.0)), Some(Color32::BLUE));
}

#[test]
fn test_pick_color_sets_pen() {
    let mut doc = Document::default();
    let mut pen = PenState::default();
    run(&mut doc, &mut pen, Command::SetColor(Color32::GREEN)).unwrap();
    run(&mut doc, &mut pen, Command::SetPenSize(5)).unwrap();
    drag(&mut doc, &mut pen, &[Pos2::new(20.0, 20.0), Pos2::new(60.0, 20.0)]);
    run(&mut doc, &mut pen, Command::SetColor(Color32::BLACK)).unwrap();

    let outcome = run(
        &mut doc,
        &mut pen,
        Command::PickColor {
            position: Pos2::new(40.0, 20.0),
        },
    )
    .unwrap();
    assert_eq!(outcome, CommandOutcome::Picked(Color32::GREEN));
    assert_eq!(pen.color(), Color32::GREEN);

    let outside = run(
        &mut doc,
        &mut pen,
        Command::PickColor {
            position: Pos2::new(-1.0, 20.0),
        },
    )
    .unwrap();
    assert_eq!(outside, CommandOutcome::Ignored);
    assert_eq!(pen.color(), Color32::GREEN);
}

#[test]
fn test_clear_keeps_size_and_background() {
    let mut doc = Document::default();
    let mut pen = PenState::default();
    run(&mut doc, &mut pen, Command::SetBackground(Color32::YELLOW)).unwrap();
    drag(&mut doc, &mut pen, &[Pos2::new(20.0, 20.0), Pos2::new(60.0, 20.0)]);

    run(&mut doc, &mut pen, Command::Clear).unwrap();
    assert!(doc.items().is_empty());
    assert_eq!(doc.size(), [600, 400]);
    assert_eq!(doc.pick_color(Pos2::new(40.0, 20.0)), Some(Color32::YELLOW));
}

#[test]
fn test_background_change_keeps_drawing() {
    let mut doc = Document::default();
    let mut pen = PenState::default();
    run(&mut doc, &mut pen, Command::SetPenSize(5)).unwrap();
    drag(&mut doc, &mut pen, &[Pos2::new(20.0, 20.0), Pos2::new(60.0, 20.0)]);
    run(&mut doc, &mut pen, Command::ToggleEraser).unwrap();
    drag(&mut doc, &mut pen, &[Pos2::new(40.0, 10.0), Pos2::new(40.0, 30.0)]);

    run(&mut doc, &mut pen, Command::SetBackground(Color32::LIGHT_GRAY)).unwrap();
    assert_eq!(doc.background(), Color32::LIGHT_GRAY);
    assert_eq!(doc.pick_color(Pos2::new(25.0, 20.0)), Some(Color32::BLACK));
    assert_eq!(doc.pick_color(Pos2::new(300.0, 300.0)), Some(Color32::LIGHT_GRAY));
    // Erased pixels follow the background
    assert_eq!(doc.pick_color(Pos2::new(40.0, 20.0)), Some(Color32::LIGHT_GRAY));
}

#[test]
fn test_resize_command() {
    let mut doc = Document::default();
    let mut pen = PenState::default();
    drag(&mut doc, &mut pen, &[Pos2::new(10.5, 10.5), Pos2::new(20.5, 10.5)]);

    run(
        &mut doc,
        &mut pen,
        Command::ResizeCanvas {
            width: 800,
            height: 300,
        },
    )
    .unwrap();
    assert_eq!(doc.size(), [800, 300]);
    assert_eq!(doc.pick_color(Pos2::new(15.0, 10.0)), Some(Color32::BLACK));
    assert_eq!(doc.pick_color(Pos2::new(700.0, 200.0)), Some(Color32::WHITE));
    assert_eq!(doc.pick_color(Pos2::new(700.0, 350.0)), None);

    let err = run(
        &mut doc,
        &mut pen,
        Command::ResizeCanvas {
            width: 0,
            height: 300,
        },
    )
    .unwrap_err();
    assert!(matches!(err, PaintError::InvalidCanvasSize { width: 0, .. }));
    assert_eq!(doc.size(), [800, 300]);
}

#[test]
fn test_text_without_font_fails_cleanly() {
    let mut doc = Document::default();
    let mut pen = PenState::default();
    let mut tool = TextTool::new("hello");
    let command = tool.on_pointer_down(Pos2::new(10.0, 10.0)).unwrap();

    let err = run(&mut doc, &mut pen, command).unwrap_err();
    assert!(matches!(err, PaintError::FontUnavailable));
    assert!(doc.items().is_empty());
}

#[test]
fn test_shrink_then_grow_keeps_screen_and_bitmap_together() {
    let mut doc = Document::default();
    let mut pen = PenState::default();
    drag(&mut doc, &mut pen, &[Pos2::new(10.5, 10.5), Pos2::new(500.5, 10.5)]);

    run(&mut doc, &mut pen, Command::ResizeCanvas { width: 100, height: 100 }).unwrap();
    run(&mut doc, &mut pen, Command::ResizeCanvas { width: 600, height: 400 }).unwrap();

    // Every pixel the display list may still paint is ink in the bitmap, and
    // nothing beyond the clip is
    let item = &doc.items()[0];
    for x in 0..600 {
        let center = Pos2::new(x as f32 + 0.5, 10.5);
        let shown = item.clip().contains(center) && item.rect().contains(center);
        let expected = if shown { Color32::BLACK } else { Color32::WHITE };
        assert_eq!(doc.pick_color(center), Some(expected), "x = {}", x);
    }
}

#[test]
fn test_ink_in_background_color_survives_background_round_trip() {
    let mut doc = Document::default();
    let mut pen = PenState::default();
    run(&mut doc, &mut pen, Command::SetPenSize(5)).unwrap();
    drag(&mut doc, &mut pen, &[Pos2::new(20.0, 20.0), Pos2::new(60.0, 20.0)]);

    run(&mut doc, &mut pen, Command::SetBackground(Color32::BLACK)).unwrap();
    run(&mut doc, &mut pen, Command::SetBackground(Color32::WHITE)).unwrap();

    assert_eq!(doc.pick_color(Pos2::new(40.0, 20.0)), Some(Color32::BLACK));
    assert_eq!(doc.pick_color(Pos2::new(40.0, 40.0)), Some(Color32::WHITE));
}

