//! Integration tests: undo/redo through the controller (sb-editor).
//!
//! Verifies that gestures collapse into single history steps and that
//! redo branches are discarded the way a linear history requires.

use pretty_assertions::assert_eq;
use sb_core::model::{ElementKind, Point};
use sb_core::transform::Viewport;
use sb_editor::{Controller, InputEvent, Tool};

const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

fn make_controller() -> Controller {
    Controller::new(VIEWPORT)
}

fn draw_line(controller: &mut Controller, from: (f32, f32), to: (f32, f32)) {
    controller.set_tool(Tool::Drawing(ElementKind::Line));
    controller.handle_event(InputEvent::PointerDown { x: from.0, y: from.1 });
    controller.handle_event(InputEvent::PointerMove { x: to.0, y: to.1 });
    controller.handle_event(InputEvent::PointerUp { x: to.0, y: to.1 });
    controller.set_tool(Tool::Selecting);
}

// ─── One gesture, one step ──────────────────────────────────────────────

#[test]
fn a_whole_drawing_gesture_is_one_undo_step() {
    let mut c = make_controller();
    c.set_tool(Tool::Drawing(ElementKind::Line));
    c.handle_event(InputEvent::PointerDown { x: 0.0, y: 0.0 });
    for i in 1..=20 {
        let p = i as f32 * 5.0;
        c.handle_event(InputEvent::PointerMove { x: p, y: p });
    }
    c.handle_event(InputEvent::PointerUp { x: 100.0, y: 100.0 });

    assert_eq!(c.current_elements().len(), 1);
    c.undo();
    assert_eq!(c.current_elements().len(), 0);
    c.redo();
    assert_eq!(c.current_elements().len(), 1);
    // Redo restores the final shape, not an intermediate one.
    assert_eq!(c.current_elements()[0].point2, Point::new(100.0, 100.0));
}

#[test]
fn a_whole_move_gesture_is_one_undo_step() {
    let mut c = make_controller();
    draw_line(&mut c, (0.0, 0.0), (100.0, 100.0));

    c.handle_event(InputEvent::PointerDown { x: 50.0, y: 50.0 });
    c.handle_event(InputEvent::PointerMove { x: 80.0, y: 80.0 });
    c.handle_event(InputEvent::PointerMove { x: 150.0, y: 150.0 });
    c.handle_event(InputEvent::PointerUp { x: 150.0, y: 150.0 });
    assert_eq!(c.current_elements()[0].point1, Point::new(100.0, 100.0));

    // One undo returns to the pre-move position, skipping the
    // intermediate drag states.
    c.undo();
    assert_eq!(c.current_elements()[0].point1, Point::new(0.0, 0.0));
    assert_eq!(c.current_elements()[0].point2, Point::new(100.0, 100.0));
}

// ─── History bounds ─────────────────────────────────────────────────────

#[test]
fn undo_past_the_empty_scene_is_a_no_op() {
    let mut c = make_controller();
    assert!(!c.can_undo());
    c.undo();
    c.undo();
    assert_eq!(c.current_elements().len(), 0);

    draw_line(&mut c, (0.0, 0.0), (10.0, 10.0));
    c.undo();
    c.undo();
    c.undo();
    assert_eq!(c.current_elements().len(), 0);
}

#[test]
fn redo_past_the_newest_scene_is_a_no_op() {
    let mut c = make_controller();
    draw_line(&mut c, (0.0, 0.0), (10.0, 10.0));
    assert!(!c.can_redo());
    c.redo();
    assert_eq!(c.current_elements().len(), 1);
}

// ─── Branch discard ─────────────────────────────────────────────────────

#[test]
fn a_new_gesture_after_undo_discards_the_redo_branch() {
    let mut c = make_controller();
    draw_line(&mut c, (0.0, 0.0), (10.0, 10.0));
    draw_line(&mut c, (20.0, 20.0), (30.0, 30.0));
    assert_eq!(c.current_elements().len(), 2);

    c.undo();
    assert_eq!(c.current_elements().len(), 1);
    assert!(c.can_redo());

    // Drawing now forks the history; the second line is gone for good.
    draw_line(&mut c, (50.0, 50.0), (60.0, 60.0));
    assert!(!c.can_redo());
    c.redo();

    let elements = c.current_elements();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[1].point1, Point::new(50.0, 50.0));
}

#[test]
fn undo_then_redo_round_trips_an_edit() {
    let mut c = make_controller();
    draw_line(&mut c, (0.0, 0.0), (100.0, 100.0));

    c.handle_event(InputEvent::PointerDown { x: 50.0, y: 50.0 });
    c.handle_event(InputEvent::PointerMove { x: 150.0, y: 150.0 });
    c.handle_event(InputEvent::PointerUp { x: 150.0, y: 150.0 });

    let moved = c.current_elements().to_vec();
    c.undo();
    c.redo();
    assert_eq!(c.current_elements(), &moved[..]);
}

// ─── View state is not history ──────────────────────────────────────────

#[test]
fn undo_never_touches_pan_or_zoom() {
    let mut c = make_controller();
    draw_line(&mut c, (0.0, 0.0), (100.0, 100.0));

    // Pan, then undo the line: the pan must survive.
    c.handle_event(InputEvent::PointerDown { x: 500.0, y: 500.0 });
    c.handle_event(InputEvent::PointerMove { x: 560.0, y: 500.0 });
    c.handle_event(InputEvent::PointerUp { x: 560.0, y: 500.0 });
    c.zoom_in();

    c.undo();
    assert_eq!(c.current_elements().len(), 0);
    assert_eq!(c.view().pan_offset, Point::new(60.0, 0.0));
    assert!((c.view().zoom() - 1.1).abs() < 1e-6);
}
