//! # Pagekit Editor
//!
//! Editing engine for Pagekit projects.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ UI: emits Actions                           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorStore                         │
//! │  - reduce(state, action) → state            │
//! │  - tree mutations on the current page       │
//! │  - snapshot undo/redo                       │
//! │  - notify subscribers (autosave, views)     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ codegen: Project → markup + stylesheet      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Project is source of truth**: the current page and the live selection
//!    are looked up from it, never stored beside it
//! 2. **Immutable snapshots**: every action yields a new state; unchanged
//!    subtrees are shared between states
//! 3. **Explicit failures**: `try_reduce` says why an action did not apply,
//!    `reduce` keeps the old state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagekit_editor::{Action, EditorStore, FileStorage};
//!
//! let storage = FileStorage::new("project.json");
//! let mut store = EditorStore::default();
//! store.load_from(&storage)?;
//!
//! store.dispatch(Action::DeleteComponent("component_123".to_string()))?;
//! store.dispatch(Action::SaveHistory)?;
//! store.dispatch(Action::Undo)?;
//! ```

mod actions;
mod config;
mod errors;
mod mutations;
mod reducer;
mod state;
mod storage;
mod store;
mod undo_stack;

pub use actions::Action;
pub use config::EditorConfig;
pub use errors::EditorError;
pub use mutations::{delete, insert, reorder, update_props, MutationError, MutationResult};
pub use reducer::{reduce, try_reduce};
pub use state::EditorState;
pub use storage::{AutoSave, FileStorage, MemoryStorage, ProjectStorage};
pub use store::{Dispatched, EditorStore, Subscriber};
pub use undo_stack::{UndoStack, DEFAULT_MAX_LEVELS};

// Re-export model types for convenience
pub use pagekit_model::{Component, ComponentKind, Page, Project, PropValue, Props};
