//! Screen ↔ scene coordinate transform for pan and zoom.
//!
//! Zoom is re-centered on the viewport middle rather than the origin, so
//! stepping the zoom keeps whatever is under the center of the window in
//! place. Hit testing and element edits always run in scene coordinates;
//! the renderer applies the exact inverse.

use crate::model::Point;
use serde::{Deserialize, Serialize};

/// Canvas viewport dimensions, in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Pan offset and zoom factor for one session.
///
/// Mutated only by panning gestures and the explicit zoom commands; it is
/// not part of the undo history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Accumulated pan, in screen units.
    pub pan_offset: Point,
    /// Current zoom factor, always within [`ZOOM_MIN`, `ZOOM_MAX`].
    zoom: f32,
    viewport: Viewport,
}

/// Minimum zoom factor.
pub const ZOOM_MIN: f32 = 0.1;
/// Maximum zoom factor.
pub const ZOOM_MAX: f32 = 3.0;
/// Zoom change per explicit zoom command.
pub const ZOOM_STEP: f32 = 0.1;

impl ViewState {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pan_offset: Point::ZERO,
            zoom: 1.0,
            viewport,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Notify the transform that the host resized the canvas.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Shift the view by a screen-space delta. Unclamped.
    pub fn pan_by(&mut self, delta: Point) {
        self.pan_offset = self.pan_offset + delta;
    }

    /// Offset that re-centers scaling on the viewport middle: with no pan,
    /// the screen center maps to the same scene point at every zoom level.
    fn zoom_center_offset(&self) -> Point {
        Point::new(
            (self.viewport.width * self.zoom - self.viewport.width) / 2.0,
            (self.viewport.height * self.zoom - self.viewport.height) / 2.0,
        )
    }

    /// Map a raw pointer position to scene coordinates.
    pub fn to_scene(&self, screen: Point) -> Point {
        let zco = self.zoom_center_offset();
        Point::new(
            (screen.x - self.pan_offset.x * self.zoom + zco.x) / self.zoom,
            (screen.y - self.pan_offset.y * self.zoom + zco.y) / self.zoom,
        )
    }

    /// Map a scene position back to screen coordinates. Exact inverse of
    /// [`ViewState::to_scene`].
    pub fn to_screen(&self, scene: Point) -> Point {
        let zco = self.zoom_center_offset();
        Point::new(
            scene.x * self.zoom + self.pan_offset.x * self.zoom - zco.x,
            scene.y * self.zoom + self.pan_offset.y * self.zoom - zco.y,
        )
    }
}
