//! Pure proximity predicates used by hit testing.
//!
//! All tolerances are fixed scene-unit constants, independent of zoom,
//! so zooming out makes a target proportionally harder to hit on screen.

use crate::model::Point;

/// How close (scene units) a point must be to count as "on" a line body.
pub const LINE_TOLERANCE: f32 = 10.0;

/// Half-width (scene units) of the square window around corner and
/// endpoint handles.
pub const HANDLE_TOLERANCE: f32 = 20.0;

/// Distance from `p` to the segment `a`–`b`, clamped to the endpoints.
pub fn distance_point_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let ap = p - a;
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    let nearest = Point::new(a.x + t * ab.x, a.y + t * ab.y);
    p.distance(nearest)
}

/// Whether `p` lies on the segment `a`–`b`, by the sum-of-distances test:
/// the round trip `a → p → b` must be within `tolerance` of the segment
/// length.
///
/// This is not the perpendicular distance. For nearly collinear points
/// just past an endpoint it accepts slightly more than a true distance
/// test would, which in practice makes line ends easier to grab.
pub fn is_near_line(p: Point, a: Point, b: Point, tolerance: f32) -> bool {
    let len = a.distance(b);
    let via = a.distance(p) + p.distance(b);
    (len - via).abs() <= tolerance
}

/// Whether `p` falls inside the axis-aligned box spanned by two corners,
/// boundary inclusive. The corners may be in any order.
pub fn is_inside_rect(p: Point, corner1: Point, corner2: Point) -> bool {
    let min_x = corner1.x.min(corner2.x);
    let max_x = corner1.x.max(corner2.x);
    let min_y = corner1.y.min(corner2.y);
    let max_y = corner1.y.max(corner2.y);
    p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
}

/// Whether both axis deltas between `p` and `target` are within
/// `tolerance` — a square window, used for handle grabbing.
pub fn is_near_point(p: Point, target: Point, tolerance: f32) -> bool {
    (p.x - target.x).abs() <= tolerance && (p.y - target.y).abs() <= tolerance
}
