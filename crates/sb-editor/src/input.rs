//! Input abstraction layer.
//!
//! Normalizes whatever the host's pointer source produces (mouse, touch,
//! stylus) into one `InputEvent` stream. Positions are raw screen
//! coordinates; the controller maps them to scene space itself.

/// A normalized pointer event.
///
/// The engine assumes a single active pointer: one `PointerDown` is
/// followed by zero or more `PointerMove`s and one `PointerUp`. A
/// `PointerUp` without a matching down is tolerated as a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed (mouse down, touch start, pen contact).
    PointerDown { x: f32, y: f32 },

    /// Pointer moved while pressed.
    PointerMove { x: f32, y: f32 },

    /// Pointer released.
    PointerUp { x: f32, y: f32 },
}

impl InputEvent {
    /// The event's screen position.
    pub fn position(&self) -> (f32, f32) {
        match *self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                (x, y)
            }
        }
    }
}
