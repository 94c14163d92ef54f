//! Scene → renderer drawing commands.
//!
//! The actual rasterizer lives in the host; this module hands it, per
//! frame, a `kurbo::BezPath` for each element, the default stroke, and
//! the view transform as a `kurbo::Affine` (the exact inverse of
//! `ViewState::to_scene`).

use kurbo::{Affine, BezPath, Stroke};
use peniko::Color;
use sb_core::model::{Element, PathCmd};
use sb_core::transform::ViewState;

/// Convert one element's derived path description to a Bézier path.
pub fn element_path(element: &Element) -> BezPath {
    let mut bez = BezPath::new();
    for cmd in element.path() {
        match *cmd {
            PathCmd::MoveTo(x, y) => bez.move_to((x as f64, y as f64)),
            PathCmd::LineTo(x, y) => bez.line_to((x as f64, y as f64)),
            PathCmd::Close => bez.close_path(),
        }
    }
    bez
}

/// The single default style: a solid black hairline stroke.
pub fn default_stroke() -> (Color, Stroke) {
    (Color::BLACK, Stroke::new(1.0))
}

/// Scene → screen transform for rendering: scale by the zoom factor, then
/// translate by `pan · zoom − zoom_center_offset`.
pub fn view_affine(view: &ViewState) -> Affine {
    let zoom = view.zoom() as f64;
    let viewport = view.viewport();
    let zco_x = (viewport.width as f64 * zoom - viewport.width as f64) / 2.0;
    let zco_y = (viewport.height as f64 * zoom - viewport.height as f64) / 2.0;
    let tx = view.pan_offset.x as f64 * zoom - zco_x;
    let ty = view.pan_offset.y as f64 * zoom - zco_y;
    Affine::translate((tx, ty)) * Affine::scale(zoom)
}
