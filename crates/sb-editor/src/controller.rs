//! The pointer-driven interaction state machine.
//!
//! One `Controller` per session owns the history store, the view
//! transform, the active tool, and the transient gesture state. Events
//! are processed strictly in arrival order; every transition completes
//! synchronously, so a renderer reading `current_elements` between
//! events always sees a consistent scene.
//!
//! ## Gesture lifecycle
//!
//! ```text
//! Idle ── press, Drawing tool ──────────────▶ Drawing
//! Idle ── press, Selecting tool, hit ───────▶ Moving | Resizing
//! Idle ── press, Selecting tool, no hit ────▶ Panning
//! any  ── release ──────────────────────────▶ Idle
//! ```
//!
//! A gesture commits one history checkpoint at press and overwrites it
//! on every move, so undo steps over the whole gesture at once.

use crate::history::HistoryStore;
use crate::input::InputEvent;
use crate::tools::Tool;
use sb_core::model::{Element, Point, SceneError};
use sb_core::transform::{ViewState, Viewport};
use sb_render::hit::{Handle, hit_test};
use thiserror::Error;

/// The element grabbed by the gesture in progress. Transient: created on
/// press, destroyed on release, never part of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedElement {
    pub id: usize,
    pub handle: Handle,
}

/// What the active pointer is doing right now.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Idle,
    Drawing,
    Moving {
        /// Press position minus the element's `point1`, so the element
        /// doesn't jump to the cursor on the first move.
        drag_offset: Point,
    },
    Resizing,
    Panning {
        /// Last pointer position in screen coordinates; panning is
        /// incremental and accumulates screen-space deltas.
        anchor: Point,
    },
}

/// Internal gesture failures. Never surfaced to the host: any of these
/// means an internal consistency bug, so the controller aborts the
/// gesture, leaves history as it was, and logs.
#[derive(Debug, Error)]
enum GestureError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("gesture in progress without a selected element")]
    MissingSelection,
    #[error("resize gesture holds a non-resize handle")]
    NotAResizeHandle,
}

/// Owns all interaction state for one drawing session.
pub struct Controller {
    history: HistoryStore,
    view: ViewState,
    tool: Tool,
    gesture: Gesture,
    selected: Option<SelectedElement>,
}

impl Controller {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            history: HistoryStore::new(),
            view: ViewState::new(viewport),
            tool: Tool::default(),
            gesture: Gesture::Idle,
            selected: None,
        }
    }

    // ─── Collaborator surfaces ───────────────────────────────────────────

    /// The elements a renderer should draw this frame, in paint order.
    pub fn current_elements(&self) -> &[Element] {
        self.history.current_scene().elements()
    }

    /// The view transform a renderer should apply this frame.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Set by the host's tool UI.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The element grabbed by the gesture in progress, if any.
    pub fn selected(&self) -> Option<SelectedElement> {
        self.selected
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.view.set_viewport(viewport);
    }

    // ─── Command surface ─────────────────────────────────────────────────

    pub fn undo(&mut self) {
        self.history.undo();
    }

    pub fn redo(&mut self) {
        self.history.redo();
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    /// Feed one pointer event through the state machine.
    ///
    /// Internal failures abort the gesture and reset to `Idle` without
    /// touching history; they are logged, not propagated (they indicate a
    /// bug, not recoverable input).
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Err(err) = self.dispatch(event) {
            log::error!("aborting gesture after {event:?}: {err}");
            self.selected = None;
            self.gesture = Gesture::Idle;
        }
    }

    fn dispatch(&mut self, event: InputEvent) -> Result<(), GestureError> {
        match event {
            InputEvent::PointerDown { x, y } => self.on_press(Point::new(x, y)),
            InputEvent::PointerMove { x, y } => self.on_move(Point::new(x, y)),
            InputEvent::PointerUp { .. } => self.on_release(),
        }
    }

    fn on_press(&mut self, screen: Point) -> Result<(), GestureError> {
        let pos = self.view.to_scene(screen);
        match self.tool {
            Tool::Drawing(kind) => {
                // One checkpoint per gesture: the new zero-size element is
                // committed now, then grown by overwrites on each move.
                let mut scene = self.history.current_scene().clone();
                let id = scene.add_element(pos, pos, kind);
                self.history.commit(scene);
                self.selected = Some(SelectedElement {
                    id,
                    handle: Handle::Inside,
                });
                self.gesture = Gesture::Drawing;
                log::debug!("press: drawing {kind:?} as element {id}");
            }
            Tool::Selecting => {
                if let Some(hit) = hit_test(pos, self.history.current_scene()) {
                    let element = self
                        .history
                        .current_scene()
                        .get(hit.id)
                        .ok_or(SceneError::IndexOutOfRange {
                            id: hit.id,
                            len: self.history.current_scene().len(),
                        })?;
                    let drag_offset = pos - element.point1;

                    // Re-commit the unchanged scene: this checkpoint is
                    // what undo returns to after the edit.
                    self.history.commit(self.history.current_scene().clone());
                    self.selected = Some(SelectedElement {
                        id: hit.id,
                        handle: hit.handle,
                    });
                    self.gesture = if hit.handle.is_resize() {
                        Gesture::Resizing
                    } else {
                        Gesture::Moving { drag_offset }
                    };
                    log::debug!("press: grabbed element {} by {:?}", hit.id, hit.handle);
                } else {
                    // Empty space: pan. View-only, nothing enters history.
                    self.gesture = Gesture::Panning { anchor: screen };
                    log::debug!("press: panning from {screen:?}");
                }
            }
        }
        Ok(())
    }

    fn on_move(&mut self, screen: Point) -> Result<(), GestureError> {
        match self.gesture {
            Gesture::Idle => Ok(()),
            Gesture::Drawing => {
                let pos = self.view.to_scene(screen);
                let sel = self.selected.ok_or(GestureError::MissingSelection)?;
                let mut scene = self.history.current_scene().clone();
                scene.update_element(sel.id, None, Some(pos), None)?;
                self.history.overwrite(scene);
                Ok(())
            }
            Gesture::Moving { drag_offset } => {
                let pos = self.view.to_scene(screen);
                let sel = self.selected.ok_or(GestureError::MissingSelection)?;
                let mut scene = self.history.current_scene().clone();
                let element = scene.get(sel.id).ok_or(SceneError::IndexOutOfRange {
                    id: sel.id,
                    len: scene.len(),
                })?;

                // Rigid translation: both corners shift by the same delta.
                let new_p1 = pos - drag_offset;
                let new_p2 = new_p1 + (element.point2 - element.point1);
                scene.update_element(sel.id, Some(new_p1), Some(new_p2), None)?;
                self.history.overwrite(scene);
                Ok(())
            }
            Gesture::Resizing => {
                let pos = self.view.to_scene(screen);
                let sel = self.selected.ok_or(GestureError::MissingSelection)?;
                let mut scene = self.history.current_scene().clone();
                let element = scene.get(sel.id).ok_or(SceneError::IndexOutOfRange {
                    id: sel.id,
                    len: scene.len(),
                })?;

                let (p1, p2) = resized_points(sel.handle, pos, element.point1, element.point2)
                    .ok_or(GestureError::NotAResizeHandle)?;
                scene.update_element(sel.id, Some(p1), Some(p2), None)?;
                self.history.overwrite(scene);
                Ok(())
            }
            Gesture::Panning { anchor } => {
                self.view.pan_by(screen - anchor);
                self.gesture = Gesture::Panning { anchor: screen };
                Ok(())
            }
        }
    }

    fn on_release(&mut self) -> Result<(), GestureError> {
        // Drawing and resizing may leave the corners in any order;
        // canonicalize once, now that handle identity no longer matters.
        // Moving preserves corner order, and an unmatched release (Idle)
        // is a plain no-op.
        if matches!(self.gesture, Gesture::Drawing | Gesture::Resizing) {
            let sel = self.selected.ok_or(GestureError::MissingSelection)?;
            let mut scene = self.history.current_scene().clone();
            let element = scene.get(sel.id).ok_or(SceneError::IndexOutOfRange {
                id: sel.id,
                len: scene.len(),
            })?;
            let (p1, p2) = element.normalized_points();
            scene.update_element(sel.id, Some(p1), Some(p2), None)?;
            self.history.overwrite(scene);
        }

        log::debug!("release: gesture {:?} finished", self.gesture);
        self.selected = None;
        self.gesture = Gesture::Idle;
        Ok(())
    }
}

/// New corner points for a resize: each handle replaces exactly the
/// coordinates it visually controls, leaving the opposite corner fixed.
/// `None` for `Inside`, which never resizes.
fn resized_points(handle: Handle, pos: Point, p1: Point, p2: Point) -> Option<(Point, Point)> {
    match handle {
        Handle::Inside => None,
        Handle::Start | Handle::TopLeft => Some((pos, p2)),
        Handle::End | Handle::BottomRight => Some((p1, pos)),
        Handle::TopRight => Some((Point::new(p1.x, pos.y), Point::new(pos.x, p2.y))),
        Handle::BottomLeft => Some((Point::new(pos.x, p1.y), Point::new(p2.x, pos.y))),
    }
}
