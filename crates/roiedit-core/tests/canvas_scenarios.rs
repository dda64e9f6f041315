//! End-to-end input scenarios driven through the public canvas API.

use kurbo::Point;
use roiedit_core::{
    ButtonState, Canvas, CanvasConfig, CommandRecorder, CursorKind, EngineCommand, GraphicsLine,
    GraphicsObject, GraphicsRectangle, GraphicsStyle, HitTest, Key, MouseButton, ObjectId,
    PointerEvent, SerializableColor, ToolKind,
};

fn canvas() -> Canvas<CommandRecorder> {
    Canvas::new(CommandRecorder::new(), CanvasConfig::default()).unwrap()
}

fn add_rect(c: &mut Canvas<CommandRecorder>, l: f64, t: f64, r: f64, b: f64) -> ObjectId {
    c.scene_mut()
        .add(GraphicsRectangle::new(l, t, r, b, GraphicsStyle::default()))
        .unwrap()
}

fn drag(c: &mut Canvas<CommandRecorder>, from: (f64, f64), to: (f64, f64)) {
    c.pointer_down(&PointerEvent::down(Point::new(from.0, from.1)));
    c.pointer_move(&PointerEvent::drag(Point::new(to.0, to.1)));
    c.pointer_up(&PointerEvent::up(Point::new(to.0, to.1)));
}

#[test]
fn line_gesture_reports_line_and_returns_to_pointer() {
    let mut c = canvas();
    add_rect(&mut c, 200.0, 200.0, 300.0, 300.0);
    c.set_tool(ToolKind::Line);

    drag(&mut c, (10.0, 10.0), (50.0, 30.0));

    assert_eq!(
        c.engine().commands(),
        &[
            EngineCommand::SetLine { x0: 10.0, y0: 10.0, x1: 50.0, y1: 30.0 },
            EngineCommand::RequestRedraw,
        ]
    );
    assert_eq!(c.tool(), ToolKind::Pointer);

    // The previous content was cleared; the line stays on the overlay.
    assert_eq!(c.len(), 1);
    let line = c.get(0).unwrap().as_line().unwrap();
    assert_eq!(line.start(), Point::new(10.0, 10.0));
    assert_eq!(line.end(), Point::new(50.0, 30.0));
}

#[test]
fn next_line_replaces_previous_line() {
    let mut c = canvas();
    c.set_tool(ToolKind::Line);
    drag(&mut c, (10.0, 10.0), (50.0, 30.0));
    let first = c.get(0).unwrap().id();

    c.set_tool(ToolKind::Line);
    drag(&mut c, (0.0, 0.0), (5.0, 80.0));

    assert_eq!(c.len(), 1);
    assert_ne!(c.get(0).unwrap().id(), first);
    assert_eq!(c.engine().commands().len(), 4);
    assert_eq!(
        c.engine().commands()[2],
        EngineCommand::SetLine { x0: 0.0, y0: 0.0, x1: 5.0, y1: 80.0 }
    );
}

#[test]
fn anchor_gesture_reports_polygon_and_removes_rectangle() {
    let mut c = canvas();
    let keep = add_rect(&mut c, 500.0, 500.0, 600.0, 600.0);
    c.set_tool(ToolKind::Anchor);

    c.pointer_down(&PointerEvent::down(Point::new(10.0, 20.0)));
    assert_eq!(c.capture_owner(), Some(ToolKind::Anchor));
    c.pointer_move(&PointerEvent::drag(Point::new(40.0, 30.0)));
    assert_eq!(c.cursor(), CursorKind::Crosshair);
    c.pointer_move(&PointerEvent::drag(Point::new(110.0, 70.0)));
    c.pointer_up(&PointerEvent::up(Point::new(110.0, 70.0)));

    assert_eq!(
        c.engine().commands(),
        &[
            EngineCommand::SetAnchorPoints {
                xs: [10.0, 110.0, 110.0, 10.0],
                ys: [20.0, 20.0, 70.0, 70.0],
            },
            EngineCommand::RequestRedraw,
        ]
    );
    assert_eq!(c.len(), 1);
    assert_eq!(c.get(0).unwrap().id(), keep);
    assert_eq!(c.tool(), ToolKind::Pointer);
    assert_eq!(c.cursor(), CursorKind::Default);
}

#[test]
fn control_rectangle_can_be_edited_afterwards() {
    let mut c = canvas();
    c.set_tool(ToolKind::Control);
    drag(&mut c, (0.0, 0.0), (100.0, 100.0));
    assert_eq!(c.engine().commands(), &[EngineCommand::RequestRedraw]);
    assert_eq!(c.tool(), ToolKind::Pointer);

    // Grab the body and move it.
    drag(&mut c, (50.0, 50.0), (60.0, 70.0));
    let r = c.get(0).unwrap().as_rectangle().unwrap();
    assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (10.0, 20.0, 110.0, 120.0));
}

#[test]
fn rectangle_resize_from_bottom_right_handle() {
    let mut c = canvas();
    let id = add_rect(&mut c, 0.0, 0.0, 100.0, 100.0);

    c.pointer_down(&PointerEvent::down(Point::new(100.0, 100.0)));
    c.pointer_move(&PointerEvent::drag(Point::new(125.0, 125.0)));
    c.pointer_move(&PointerEvent::drag(Point::new(150.0, 150.0)));
    c.pointer_up(&PointerEvent::up(Point::new(150.0, 150.0)));

    let r = c.scene().find(id).unwrap().as_rectangle().unwrap();
    assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (0.0, 0.0, 150.0, 150.0));
    assert!(r.is_selected());
    assert!(c.engine().commands().is_empty());
}

#[test]
fn topmost_object_is_selected() {
    let mut c = canvas();
    let a = add_rect(&mut c, 0.0, 0.0, 100.0, 100.0);
    let b = add_rect(&mut c, 50.0, 50.0, 150.0, 150.0);

    c.pointer_down(&PointerEvent::down(Point::new(75.0, 75.0)));
    assert!(c.scene().find(b).unwrap().is_selected());
    assert!(!c.scene().find(a).unwrap().is_selected());
    assert_eq!(c.selection_count(), 1);
}

#[test]
fn pointer_down_selects_at_most_one() {
    let mut c = canvas();
    for i in 0..5 {
        let o = i as f64 * 10.0;
        add_rect(&mut c, o, o, o + 100.0, o + 100.0);
    }
    roiedit_core::batch::select_all(c.scene_mut());

    for p in [(60.0, 60.0), (1000.0, 1000.0), (0.0, 0.0), (140.0, 140.0)] {
        c.pointer_down(&PointerEvent::down(Point::new(p.0, p.1)));
        assert!(c.selection_count() <= 1);
        c.pointer_up(&PointerEvent::up(Point::new(p.0, p.1)));
    }
}

#[test]
fn escape_then_delete_keeps_everything() {
    let mut c = canvas();
    add_rect(&mut c, 0.0, 0.0, 10.0, 10.0);
    add_rect(&mut c, 20.0, 20.0, 30.0, 30.0);
    roiedit_core::batch::select_all(c.scene_mut());

    assert!(c.key_down(&Key::Escape));
    assert_eq!(c.selection_count(), 0);
    assert!(c.key_down(&Key::Delete));
    assert_eq!(c.len(), 2);
}

#[test]
fn delete_removes_exactly_the_selection() {
    let mut c = canvas();
    let keep = add_rect(&mut c, 0.0, 0.0, 10.0, 10.0);
    let gone = add_rect(&mut c, 20.0, 20.0, 30.0, 30.0);
    c.scene_mut().find_mut(gone).unwrap().set_selected(true);

    c.key_down(&Key::Delete);
    assert_eq!(c.len(), 1);
    assert!(c.scene().find(keep).is_some());
    assert!(c.scene().find(gone).is_none());
}

#[test]
fn style_broadcast_touches_only_selection() {
    let mut c = canvas();
    let a = add_rect(&mut c, 0.0, 0.0, 10.0, 10.0);
    let b = add_rect(&mut c, 20.0, 20.0, 30.0, 30.0);
    c.scene_mut().find_mut(a).unwrap().set_selected(true);
    c.take_invalidated();

    c.set_line_width(6.0).unwrap();
    c.set_object_color(SerializableColor::black());

    let changed = c.take_invalidated();
    assert_eq!(changed, vec![a]);
    assert!((c.scene().find(a).unwrap().line_width() - 6.0).abs() < f64::EPSILON);
    assert!((c.scene().find(b).unwrap().line_width() - 2.0).abs() < f64::EPSILON);
    assert_eq!(c.scene().find(b).unwrap().color(), SerializableColor::accent());

    // Same value again touches nothing.
    c.set_line_width(6.0).unwrap();
    assert!(c.take_invalidated().is_empty());
}

#[test]
fn middle_button_move_is_swallowed() {
    let mut c = canvas();
    let id = add_rect(&mut c, 0.0, 0.0, 100.0, 100.0);
    c.pointer_down(&PointerEvent::down(Point::new(50.0, 50.0)));
    assert_eq!(c.cursor(), CursorKind::Move);

    let pan = PointerEvent {
        position: Point::new(90.0, 90.0),
        button: MouseButton::Primary,
        buttons: ButtonState::PRIMARY.with(MouseButton::Middle, true),
    };
    assert!(!c.pointer_move(&pan));
    assert_eq!(c.cursor(), CursorKind::Default);

    let r = c.scene().find(id).unwrap().as_rectangle().unwrap();
    assert_eq!((r.left(), r.top()), (0.0, 0.0));
}

#[test]
fn hit_test_codes_stay_in_range() {
    let line = GraphicsLine::new(
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        GraphicsStyle::default(),
    );
    let rect = GraphicsRectangle::new(0.0, 0.0, 50.0, 50.0, GraphicsStyle::default());

    for x in (-20..140).step_by(7) {
        for y in (-20..70).step_by(7) {
            let p = Point::new(x as f64, y as f64);
            let code = line.hit_test(p).code();
            assert!((-1..=2).contains(&code));
            let code = rect.hit_test(p).code();
            assert!((-1..=4).contains(&code));
        }
    }
    assert_eq!(rect.hit_test(Point::new(25.0, 25.0)), HitTest::Body);
    assert_eq!(rect.hit_test(Point::new(50.0, 0.0)), HitTest::Handle(2));
}

#[test]
fn normalize_is_idempotent() {
    let mut rect = GraphicsRectangle::new(80.0, 90.0, 10.0, 20.0, GraphicsStyle::default());
    rect.normalize();
    let once = rect.as_rect();
    rect.normalize();
    assert_eq!(rect.as_rect(), once);
    assert_eq!((rect.left(), rect.top(), rect.right(), rect.bottom()), (10.0, 20.0, 80.0, 90.0));
}
