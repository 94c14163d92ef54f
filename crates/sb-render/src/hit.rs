//! Hit testing: point → element + handle lookup.
//!
//! Scans the scene in creation (index) order and returns the first
//! element any of whose handles or body contains the point. First match
//! wins; an element created earlier shadows a later one under the same
//! point. Flip the iteration order if "topmost visually first" is ever
//! wanted instead.

use sb_core::geom::{HANDLE_TOLERANCE, LINE_TOLERANCE, is_inside_rect, is_near_line, is_near_point};
use sb_core::model::{Element, ElementKind, Point, Scene};

/// A named manipulable part of an element. Closed, so a caller never
/// sees an unrecognized handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// The body / interior of the element.
    Inside,
    /// First endpoint of a line.
    Start,
    /// Second endpoint of a line.
    End,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Handle {
    /// Whether grabbing this handle resizes the element (as opposed to
    /// moving it whole).
    pub fn is_resize(self) -> bool {
        !matches!(self, Self::Inside)
    }
}

/// A successful hit: which element, and which part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub id: usize,
    pub handle: Handle,
}

/// Find the first element at `point`, and the handle that was grabbed.
/// Handles take priority over the body, so an endpoint or corner can be
/// picked up even when it sits inside another test region of the same
/// element. Returns `None` on background.
pub fn hit_test(point: Point, scene: &Scene) -> Option<Hit> {
    let hit = scene.elements().iter().find_map(|element| {
        hit_element(point, element).map(|handle| Hit {
            id: element.id,
            handle,
        })
    });
    log::trace!("hit_test at {point:?}: {hit:?}");
    hit
}

fn hit_element(point: Point, element: &Element) -> Option<Handle> {
    let (p1, p2) = (element.point1, element.point2);
    match element.kind {
        ElementKind::Line => {
            if is_near_point(point, p1, HANDLE_TOLERANCE) {
                Some(Handle::Start)
            } else if is_near_point(point, p2, HANDLE_TOLERANCE) {
                Some(Handle::End)
            } else if is_near_line(point, p1, p2, LINE_TOLERANCE) {
                Some(Handle::Inside)
            } else {
                None
            }
        }
        ElementKind::Rectangle => {
            // Corner positions assume committed (normalized) points:
            // point1 = top-left, point2 = bottom-right.
            let tr = Point::new(p2.x, p1.y);
            let bl = Point::new(p1.x, p2.y);
            if is_near_point(point, p1, HANDLE_TOLERANCE) {
                Some(Handle::TopLeft)
            } else if is_near_point(point, tr, HANDLE_TOLERANCE) {
                Some(Handle::TopRight)
            } else if is_near_point(point, bl, HANDLE_TOLERANCE) {
                Some(Handle::BottomLeft)
            } else if is_near_point(point, p2, HANDLE_TOLERANCE) {
                Some(Handle::BottomRight)
            } else if is_inside_rect(point, p1, p2) {
                Some(Handle::Inside)
            } else {
                None
            }
        }
    }
}
