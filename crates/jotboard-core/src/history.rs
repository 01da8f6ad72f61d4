//! Linear undo/redo history over full scene snapshots.

use crate::scene::Scene;

/// Maximum number of snapshots kept.
const MAX_HISTORY: usize = 50;

/// A linear history of scene snapshots with a cursor.
///
/// Snapshots are deep copies: `Scene` owns its shapes, so a clone shares
/// nothing with the live scene. That independence is what keeps undo
/// correct; the editor never hands history a reference it could alias.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Scene>,
    /// Cursor into `snapshots`; always in `[0, snapshots.len() - 1]`.
    index: usize,
}

impl History {
    /// Create a history seeded with the initial scene (hydrated or empty).
    pub fn new(initial: Scene) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
        }
    }

    /// Record a new snapshot after a discrete edit.
    ///
    /// Everything after the cursor is discarded first, so a commit made
    /// after undoing can never be redone past.
    pub fn commit(&mut self, scene: &Scene) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(scene.clone());
        self.index += 1;

        if self.snapshots.len() > MAX_HISTORY {
            self.snapshots.remove(0);
            self.index -= 1;
        }
    }

    /// Step back one snapshot. A silent no-op at the beginning; callers
    /// disable the action rather than treat it as an error.
    pub fn undo(&mut self) -> Option<&Scene> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.snapshots[self.index])
    }

    /// Step forward one snapshot. A silent no-op at the end.
    pub fn redo(&mut self) -> Option<&Scene> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        Some(&self.snapshots[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &Scene {
        &self.snapshots[self.index]
    }

    /// Reset to a single empty-scene entry (used by clear-canvas).
    pub fn clear(&mut self) {
        self.snapshots = vec![Scene::new()];
        self.index = 0;
    }

    /// Number of stored snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Scene::new())
    }
}
