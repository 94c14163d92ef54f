//! Linear undo/redo over scene snapshots.
//!
//! The store is a sequence of whole-scene snapshots plus a cursor. Two
//! write operations exist: `commit` creates a new undo checkpoint and
//! discards any redoable branch; `overwrite` amends the current
//! checkpoint in place. A drag gesture commits once at press and then
//! overwrites on every move, so the whole gesture collapses into a
//! single undo step.

use sb_core::model::Scene;

/// Append-only scene history with a cursor.
///
/// `history[0]` is the empty scene, seeded at construction and never
/// removed — the cursor always indexes a valid entry and undo/redo
/// saturate at the ends instead of failing.
pub struct HistoryStore {
    history: Vec<Scene>,
    current: usize,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![Scene::new()],
            current: 0,
        }
    }

    /// The scene at the cursor.
    pub fn current_scene(&self) -> &Scene {
        &self.history[self.current]
    }

    /// Number of checkpoints, including the seeded empty scene.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        false // seeded at construction; kept for completeness
    }

    /// Cursor position, for inspection.
    pub fn cursor(&self) -> usize {
        self.current
    }

    /// Truncate everything after the cursor, append `scene`, and advance.
    /// The only operation that creates an undo checkpoint; any previously
    /// redoable future is unreachable afterwards.
    pub fn commit(&mut self, scene: Scene) {
        self.history.truncate(self.current + 1);
        self.history.push(scene);
        self.current += 1;
    }

    /// Replace the scene at the cursor in place. Neither the cursor nor
    /// the history length changes.
    pub fn overwrite(&mut self, scene: Scene) {
        self.history[self.current] = scene;
    }

    /// Step the cursor back. No-op at the seeded empty scene.
    pub fn undo(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Step the cursor forward. No-op at the newest checkpoint.
    pub fn redo(&mut self) {
        self.current = (self.current + 1).min(self.history.len() - 1);
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_core::model::{ElementKind, Point, Scene};

    fn scene_with(n: usize) -> Scene {
        let mut scene = Scene::new();
        for i in 0..n {
            let p = Point::new(i as f32, i as f32);
            scene.add_element(p, p, ElementKind::Line);
        }
        scene
    }

    #[test]
    fn starts_with_the_empty_scene() {
        let store = HistoryStore::new();
        assert_eq!(store.len(), 1);
        assert_eq!(store.cursor(), 0);
        assert!(store.current_scene().is_empty());
        assert!(!store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn commit_advances_the_cursor() {
        let mut store = HistoryStore::new();
        store.commit(scene_with(1));
        store.commit(scene_with(2));
        assert_eq!(store.cursor(), 2);
        assert_eq!(store.len(), 3);
        assert_eq!(store.current_scene().len(), 2);
    }

    #[test]
    fn overwrite_moves_neither_cursor_nor_length() {
        let mut store = HistoryStore::new();
        store.commit(scene_with(1));

        for n in 2..6 {
            store.overwrite(scene_with(n));
            assert_eq!(store.cursor(), 1);
            assert_eq!(store.len(), 2);
        }
        assert_eq!(store.current_scene().len(), 5);
    }

    #[test]
    fn undo_then_redo_restores_the_committed_scene() {
        let mut store = HistoryStore::new();
        let scene = scene_with(3);
        store.commit(scene.clone());

        store.undo();
        assert!(store.current_scene().is_empty());
        store.redo();
        assert_eq!(store.current_scene(), &scene);
    }

    #[test]
    fn undo_saturates_at_the_seed() {
        let mut store = HistoryStore::new();
        store.commit(scene_with(1));
        store.undo();
        store.undo();
        store.undo();
        assert_eq!(store.cursor(), 0);
        assert!(store.current_scene().is_empty());
    }

    #[test]
    fn redo_saturates_at_the_newest_checkpoint() {
        let mut store = HistoryStore::new();
        store.commit(scene_with(1));
        store.redo();
        store.redo();
        assert_eq!(store.cursor(), 1);
    }

    #[test]
    fn commit_discards_the_redo_branch() {
        // history = [∅, A, B]; undo to A; commit C ⇒ [∅, A, C] and redo
        // is a no-op.
        let mut store = HistoryStore::new();
        let a = scene_with(1);
        let b = scene_with(2);
        let c = scene_with(3);

        store.commit(a.clone());
        store.commit(b);
        store.undo();
        assert_eq!(store.current_scene(), &a);

        store.commit(c.clone());
        assert_eq!(store.len(), 3);
        assert_eq!(store.current_scene(), &c);

        store.redo();
        assert_eq!(store.current_scene(), &c, "discarded branch must stay unreachable");
    }
}
