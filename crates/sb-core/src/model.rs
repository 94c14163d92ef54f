//! Core data model for a Sketchboard scene.
//!
//! A scene is an ordered list of elements. Element ids are their indices
//! in that list: elements are only ever appended or replaced in place,
//! never removed, so ids stay valid for the lifetime of a scene.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Add, Sub};
use thiserror::Error;

// ─── Points ──────────────────────────────────────────────────────────────

/// A position in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    /// Length of this point treated as a vector from the origin.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ─── Path data ───────────────────────────────────────────────────────────

/// A single path command (SVG-like but simplified).
///
/// This is the renderable description handed to the paint surface; it is
/// always derived from an element's corner points, never authored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCmd {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    Close,
}

/// Path storage. A line is 2 commands, a rectangle 5 — both fit inline.
pub type PathCmds = SmallVec<[PathCmd; 5]>;

// ─── Elements ────────────────────────────────────────────────────────────

/// The drawable shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Line,
    Rectangle,
}

/// A drawable element defined by two corner points.
///
/// For a `Line` the points are its endpoints; for a `Rectangle` they are
/// opposite corners of the box. No ordering is imposed while a drag is in
/// progress — [`Element::normalized_points`] restores the canonical order
/// and is applied by the editor on gesture release only, so that handle
/// identity ("which corner am I dragging") stays stable mid-drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Index of this element in its scene at creation time.
    pub id: usize,
    pub point1: Point,
    pub point2: Point,
    pub kind: ElementKind,
    /// Derived path description. Rebuilt by the constructor whenever the
    /// points or kind change; there is no way to edit it independently.
    path: PathCmds,
}

impl Element {
    /// Build an element, deriving its path from the two corner points.
    pub fn new(id: usize, point1: Point, point2: Point, kind: ElementKind) -> Self {
        let path = build_path(point1, point2, kind);
        Self {
            id,
            point1,
            point2,
            kind,
            path,
        }
    }

    /// The derived path description for the renderer.
    pub fn path(&self) -> &[PathCmd] {
        &self.path
    }

    /// Canonical corner order: lines are left-to-right (ties broken
    /// top-to-bottom); rectangles are top-left then bottom-right.
    pub fn normalized_points(&self) -> (Point, Point) {
        let (p1, p2) = (self.point1, self.point2);
        match self.kind {
            ElementKind::Line => {
                if p1.x < p2.x || (p1.x == p2.x && p1.y <= p2.y) {
                    (p1, p2)
                } else {
                    (p2, p1)
                }
            }
            ElementKind::Rectangle => (
                Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
                Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
            ),
        }
    }
}

fn build_path(point1: Point, point2: Point, kind: ElementKind) -> PathCmds {
    match kind {
        ElementKind::Line => SmallVec::from_slice(&[
            PathCmd::MoveTo(point1.x, point1.y),
            PathCmd::LineTo(point2.x, point2.y),
        ]),
        ElementKind::Rectangle => SmallVec::from_slice(&[
            PathCmd::MoveTo(point1.x, point1.y),
            PathCmd::LineTo(point2.x, point1.y),
            PathCmd::LineTo(point2.x, point2.y),
            PathCmd::LineTo(point1.x, point2.y),
            PathCmd::Close,
        ]),
    }
}

// ─── Scenes ──────────────────────────────────────────────────────────────

/// Error kinds surfaced by scene operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// An element id did not index into the scene. Cannot happen under the
    /// editor's own invariants; signalled instead of corrupting state when
    /// a host passes a stale id.
    #[error("element id {id} out of range (scene has {len} elements)")]
    IndexOutOfRange { id: usize, len: usize },
}

/// One snapshot of all elements. Cheap to clone, which is how the history
/// store checkpoints it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Id of the most recently added element.
    pub fn last_id(&self) -> Option<usize> {
        self.elements.len().checked_sub(1)
    }

    /// Append a new element spanning `point1`–`point2`. The element's id
    /// is its index in this scene.
    pub fn add_element(&mut self, point1: Point, point2: Point, kind: ElementKind) -> usize {
        let id = self.elements.len();
        self.elements.push(Element::new(id, point1, point2, kind));
        id
    }

    /// Replace fields of element `id` in place, rederiving its path.
    /// `None` fields keep their current value. Other elements are untouched.
    pub fn update_element(
        &mut self,
        id: usize,
        point1: Option<Point>,
        point2: Option<Point>,
        kind: Option<ElementKind>,
    ) -> Result<(), SceneError> {
        let len = self.elements.len();
        let old = self
            .elements
            .get(id)
            .ok_or(SceneError::IndexOutOfRange { id, len })?;
        self.elements[id] = Element::new(
            id,
            point1.unwrap_or(old.point1),
            point2.unwrap_or(old.point2),
            kind.unwrap_or(old.kind),
        );
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────
