//! The closed set of actions the UI may dispatch.
//!
//! On the wire an action is `{"type": "ADD_COMPONENT", "payload": {...}}`;
//! actions without data carry no payload.

use pagekit_model::{Component, Page, Project, Props};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the project and reset history
    SetProject(Project),

    SetCurrentPage {
        #[serde(rename = "pageId")]
        page_id: String,
    },

    /// Replace the selection; `null` clears it
    SelectComponent(Option<Arc<Component>>),

    /// Merge props into a node of the current page
    UpdateComponent { id: String, props: Props },

    /// Add a node at the root of the current page, or under `parent_id`
    AddComponent {
        component: Arc<Component>,
        #[serde(rename = "parentId", default, skip_serializing_if = "Option::is_none")]
        parent_id: Option<String>,
    },

    /// Delete a node (and its subtree) from the current page
    DeleteComponent(String),

    /// Reorder root nodes of the current page
    MoveComponent {
        #[serde(rename = "activeId")]
        active_id: String,
        #[serde(rename = "overId")]
        over_id: String,
    },

    TogglePreview,

    /// Checkpoint the current project into history
    SaveHistory,

    Undo,

    Redo,

    /// Append a page and make it current
    AddPage(Page),

    RemovePage {
        #[serde(rename = "pageId")]
        page_id: String,
    },
}

impl Action {
    /// Wire tag, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetProject(_) => "SET_PROJECT",
            Action::SetCurrentPage { .. } => "SET_CURRENT_PAGE",
            Action::SelectComponent(_) => "SELECT_COMPONENT",
            Action::UpdateComponent { .. } => "UPDATE_COMPONENT",
            Action::AddComponent { .. } => "ADD_COMPONENT",
            Action::DeleteComponent(_) => "DELETE_COMPONENT",
            Action::MoveComponent { .. } => "MOVE_COMPONENT",
            Action::TogglePreview => "TOGGLE_PREVIEW",
            Action::SaveHistory => "SAVE_HISTORY",
            Action::Undo => "UNDO",
            Action::Redo => "REDO",
            Action::AddPage(_) => "ADD_PAGE",
            Action::RemovePage { .. } => "REMOVE_PAGE",
        }
    }

    /// Whether the action edits project content (trees or the page list)
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Action::UpdateComponent { .. }
                | Action::AddComponent { .. }
                | Action::DeleteComponent(_)
                | Action::MoveComponent { .. }
                | Action::AddPage(_)
                | Action::RemovePage { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_model::ComponentKind;

    #[test]
    fn test_action_serialization() {
        let action = Action::AddComponent {
            component: Arc::new(
                Component::new("c1", ComponentKind::Button, "Btn").with_prop("text", "Go"),
            ),
            parent_id: None,
        };

        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_wire_format() {
        let undo: Action = serde_json::from_str(r#"{"type": "UNDO"}"#).unwrap();
        assert_eq!(undo, Action::Undo);

        let delete: Action =
            serde_json::from_str(r#"{"type": "DELETE_COMPONENT", "payload": "c1"}"#).unwrap();
        assert_eq!(delete, Action::DeleteComponent("c1".to_string()));

        let moved: Action = serde_json::from_str(
            r#"{"type": "MOVE_COMPONENT", "payload": {"activeId": "a", "overId": "c"}}"#,
        )
        .unwrap();
        assert_eq!(
            moved,
            Action::MoveComponent {
                active_id: "a".to_string(),
                over_id: "c".to_string()
            }
        );

        let add: Action = serde_json::from_str(
            r#"{"type": "ADD_COMPONENT", "payload": {"component": {"id": "c2", "type": "text", "name": "T", "props": {}}, "parentId": "box"}}"#,
        )
        .unwrap();
        assert!(matches!(add, Action::AddComponent { parent_id: Some(ref p), .. } if p == "box"));

        let clear: Action =
            serde_json::from_str(r#"{"type": "SELECT_COMPONENT", "payload": null}"#).unwrap();
        assert_eq!(clear, Action::SelectComponent(None));
    }

    #[test]
    fn test_names_match_wire_tags() {
        let json = serde_json::to_value(Action::TogglePreview).unwrap();
        assert_eq!(json["type"], Action::TogglePreview.name());
    }
}
