//! # Undo/Redo Stack
//!
//! Snapshot history for the editor.
//!
//! ## Design
//!
//! - `present` is the last checkpointed project, not necessarily the live one
//! - `checkpoint` moves present onto the past and clears the future
//! - Undo pops the most recent past snapshot and pushes the old present onto
//!   the front of the future; redo is the mirror image
//! - Snapshots are `Arc<Project>`, and projects share unchanged subtrees, so
//!   a deep history costs little more than the edited paths
//! - Past depth is capped; the oldest snapshot is evicted first

use pagekit_model::Project;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default number of undo levels
pub const DEFAULT_MAX_LEVELS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct UndoStack {
    /// Snapshots before present (most recent last)
    past: VecDeque<Arc<Project>>,

    present: Option<Arc<Project>>,

    /// Undone snapshots (next redo first)
    future: VecDeque<Arc<Project>>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: None,
            future: VecDeque::new(),
            max_levels,
        }
    }

    /// Drop all history and start over at `project`
    pub fn reset(&mut self, project: Arc<Project>) {
        self.past.clear();
        self.future.clear();
        self.present = Some(project);
    }

    /// Record `project` as the new present
    pub fn checkpoint(&mut self, project: Arc<Project>) {
        if let Some(previous) = self.present.replace(project) {
            self.push_past(previous);
        }
        self.future.clear();
    }

    /// Step back; returns the snapshot to restore
    pub fn undo(&mut self) -> Option<Arc<Project>> {
        let previous = self.past.pop_back()?;
        if let Some(present) = self.present.replace(previous.clone()) {
            self.future.push_front(present);
        }
        Some(previous)
    }

    /// Step forward; returns the snapshot to restore
    pub fn redo(&mut self) -> Option<Arc<Project>> {
        let next = self.future.pop_front()?;
        if let Some(present) = self.present.replace(next.clone()) {
            self.push_past(present);
        }
        Some(next)
    }

    fn push_past(&mut self, snapshot: Arc<Project>) {
        self.past.push_back(snapshot);

        if self.max_levels > 0 && self.past.len() > self.max_levels {
            self.past.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn present(&self) -> Option<&Arc<Project>> {
        self.present.as_ref()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Clear all history, including present
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.present = None;
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(name: &str) -> Arc<Project> {
        Arc::new(Project::new(name, ""))
    }

    #[test]
    fn test_undo_stack_creation() {
        let stack = UndoStack::new();
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 0);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert!(stack.present().is_none());
    }

    #[test]
    fn test_checkpoint_undo_redo() {
        let mut stack = UndoStack::new();
        let first = snapshot("first");
        let second = snapshot("second");

        stack.reset(first.clone());
        stack.checkpoint(second.clone());
        assert_eq!(stack.undo_levels(), 1);

        let undone = stack.undo().unwrap();
        assert!(Arc::ptr_eq(&undone, &first));
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 1);

        let redone = stack.redo().unwrap();
        assert!(Arc::ptr_eq(&redone, &second));
        assert!(Arc::ptr_eq(stack.present().unwrap(), &second));
        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_empty_undo_and_redo_are_none() {
        let mut stack = UndoStack::new();
        stack.reset(snapshot("only"));

        assert!(stack.undo().is_none());
        assert!(stack.redo().is_none());
        assert_eq!(stack.present().unwrap().name, "only");
    }

    #[test]
    fn test_checkpoint_clears_redo() {
        let mut stack = UndoStack::new();
        stack.reset(snapshot("a"));
        stack.checkpoint(snapshot("b"));
        stack.undo();

        assert_eq!(stack.redo_levels(), 1);

        stack.checkpoint(snapshot("c"));
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut stack = UndoStack::with_max_levels(2);
        stack.reset(snapshot("0"));

        for i in 1..=3 {
            stack.checkpoint(snapshot(&i.to_string()));
        }

        // Oldest snapshot "0" evicted
        assert_eq!(stack.undo_levels(), 2);
        assert_eq!(stack.undo().unwrap().name, "2");
        assert_eq!(stack.undo().unwrap().name, "1");
        assert!(stack.undo().is_none());
    }

    #[test]
    fn test_zero_means_unlimited() {
        let mut stack = UndoStack::with_max_levels(0);
        stack.reset(snapshot("start"));

        for i in 0..250 {
            stack.checkpoint(snapshot(&i.to_string()));
        }

        assert_eq!(stack.undo_levels(), 250);
    }
}
