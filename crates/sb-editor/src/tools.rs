//! Tool selection.
//!
//! The host's tool UI sets exactly one of these on the controller; the
//! controller never reads widget state itself.

use sb_core::model::ElementKind;

/// The active tool determines how pointer events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Grab existing elements to move or resize them; pressing empty
    /// space pans the canvas.
    #[default]
    Selecting,
    /// Create a new element of the given kind by dragging.
    Drawing(ElementKind),
}

impl Tool {
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::Drawing(_))
    }
}
