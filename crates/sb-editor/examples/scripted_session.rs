//! Drives a controller through a canned pointer session and prints the
//! resulting scene after each step. Run with `RUST_LOG=debug` to watch
//! the gesture transitions.

use sb_core::{ElementKind, Viewport};
use sb_editor::{Controller, InputEvent, Tool};

fn dump(label: &str, controller: &Controller) {
    println!("── {label}");
    for el in controller.current_elements() {
        println!(
            "  #{} {:?} ({}, {}) – ({}, {})",
            el.id, el.kind, el.point1.x, el.point1.y, el.point2.x, el.point2.y
        );
    }
}

fn main() {
    env_logger::init();

    let mut controller = Controller::new(Viewport {
        width: 800.0,
        height: 600.0,
    });

    // Draw a line from (0,0) to (100,100).
    controller.set_tool(Tool::Drawing(ElementKind::Line));
    controller.handle_event(InputEvent::PointerDown { x: 0.0, y: 0.0 });
    controller.handle_event(InputEvent::PointerMove { x: 100.0, y: 100.0 });
    controller.handle_event(InputEvent::PointerUp { x: 100.0, y: 100.0 });
    dump("after drawing a line", &controller);

    // Draw a rectangle right-to-left; release normalizes the corners.
    controller.set_tool(Tool::Drawing(ElementKind::Rectangle));
    controller.handle_event(InputEvent::PointerDown { x: 300.0, y: 250.0 });
    controller.handle_event(InputEvent::PointerMove { x: 200.0, y: 150.0 });
    controller.handle_event(InputEvent::PointerUp { x: 200.0, y: 150.0 });
    dump("after drawing a rectangle", &controller);

    // Grab the line by its body and drag it 50 units right and down.
    controller.set_tool(Tool::Selecting);
    controller.handle_event(InputEvent::PointerDown { x: 50.0, y: 50.0 });
    controller.handle_event(InputEvent::PointerMove { x: 100.0, y: 100.0 });
    controller.handle_event(InputEvent::PointerUp { x: 100.0, y: 100.0 });
    dump("after moving the line", &controller);

    // The whole drag is one history step.
    controller.undo();
    dump("after undo", &controller);
    controller.redo();
    dump("after redo", &controller);
}
