use crate::config::EditorConfig;
use crate::undo_stack::UndoStack;
use pagekit_model::{Component, Page, Project};
use std::sync::Arc;

/// Everything the editor UI renders from.
///
/// Values are immutable snapshots: the reducer builds a new state per
/// action, and clones share the project and history through `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub(crate) project: Option<Arc<Project>>,
    pub(crate) current_page_id: Option<String>,
    pub(crate) selected_component: Option<Arc<Component>>,
    pub(crate) is_preview: bool,
    pub(crate) history: UndoStack,
    pub(crate) config: EditorConfig,
}

impl EditorState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            project: None,
            current_page_id: None,
            selected_component: None,
            is_preview: false,
            history: UndoStack::with_max_levels(config.history_limit),
            config,
        }
    }

    pub fn project(&self) -> Option<&Arc<Project>> {
        self.project.as_ref()
    }

    pub fn current_page_id(&self) -> Option<&str> {
        self.current_page_id.as_deref()
    }

    /// Page named by `current_page_id` in the live project. Derived on every
    /// call, so it can never lag behind the project.
    pub fn current_page(&self) -> Option<&Page> {
        let page_id = self.current_page_id.as_deref()?;
        self.project.as_ref()?.page(page_id)
    }

    /// The node as it was when selected
    pub fn selected_component(&self) -> Option<&Arc<Component>> {
        self.selected_component.as_ref()
    }

    /// The selected node as it is now on the current page
    pub fn selected_live(&self) -> Option<&Arc<Component>> {
        let selected = self.selected_component.as_ref()?;
        self.current_page()?.find_component(&selected.id)
    }

    pub fn is_preview(&self) -> bool {
        self.is_preview
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
