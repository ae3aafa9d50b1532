//! # State Reducer
//!
//! `(state, action) -> state`. The input state is never modified.
//!
//! Every action that edits a page tree goes through [`commit_tree`], which
//! folds the new tree into a new project. The current page is looked up by
//! id on read, so there is no second copy of it to keep in sync.

use crate::actions::Action;
use crate::errors::EditorError;
use crate::mutations::{self, MutationResult};
use crate::state::EditorState;
use pagekit_model::{Component, Page, Project};
use std::sync::Arc;
use tracing::{debug, warn};

/// Apply `action`, or report why it does not apply
pub fn try_reduce(state: &EditorState, action: Action) -> Result<EditorState, EditorError> {
    let name = action.name();
    let is_edit = action.is_edit();

    let mut next = match action {
        Action::SetProject(project) => {
            let project = Arc::new(project);
            let mut next = state.clone();
            next.current_page_id = project.pages.first().map(|page| page.id.clone());
            next.history.reset(project.clone());
            next.project = Some(project);
            next
        }

        Action::SetCurrentPage { page_id } => EditorState {
            current_page_id: Some(page_id),
            ..state.clone()
        },

        Action::SelectComponent(component) => EditorState {
            selected_component: component,
            ..state.clone()
        },

        Action::UpdateComponent { id, props } => {
            commit_tree(state, |tree| mutations::update_props(tree, &id, &props))?
        }

        Action::AddComponent {
            component,
            parent_id,
        } => commit_tree(state, |tree| {
            mutations::insert(tree, component, parent_id.as_deref())
        })?,

        Action::DeleteComponent(id) => {
            let mut next = commit_tree(state, |tree| mutations::delete(tree, &id))?;
            next.selected_component = None;
            next
        }

        Action::MoveComponent { active_id, over_id } => {
            commit_tree(state, |tree| mutations::reorder(tree, &active_id, &over_id))?
        }

        Action::TogglePreview => EditorState {
            is_preview: !state.is_preview,
            ..state.clone()
        },

        Action::SaveHistory => {
            let project = state.project.clone().ok_or(EditorError::NoProject)?;
            let mut next = state.clone();
            next.history.checkpoint(project);
            next
        }

        Action::Undo => {
            let mut next = state.clone();
            match next.history.undo() {
                Some(snapshot) => restore(next, snapshot),
                None => next,
            }
        }

        Action::Redo => {
            let mut next = state.clone();
            match next.history.redo() {
                Some(snapshot) => restore(next, snapshot),
                None => next,
            }
        }

        Action::AddPage(page) => add_page(state, page)?,

        Action::RemovePage { page_id } => remove_page(state, &page_id)?,
    };

    if is_edit && next.config.auto_checkpoint {
        if let Some(project) = next.project.clone() {
            next.history.checkpoint(project);
        }
    }

    debug!(
        action = name,
        page = next.current_page_id.as_deref().unwrap_or(""),
        undo_levels = next.history.undo_levels(),
        redo_levels = next.history.redo_levels(),
        "Action applied"
    );

    Ok(next)
}

/// Total transition: an action that does not apply leaves the state as it was
pub fn reduce(state: &EditorState, action: Action) -> EditorState {
    let name = action.name();
    match try_reduce(state, action) {
        Ok(next) => next,
        Err(error) => {
            warn!(action = name, %error, "Action rejected");
            state.clone()
        }
    }
}

/// Run `mutate` over the current page's tree and fold the result back into
/// a new project
fn commit_tree(
    state: &EditorState,
    mutate: impl FnOnce(&[Arc<Component>]) -> MutationResult,
) -> Result<EditorState, EditorError> {
    let project = state.project.as_ref().ok_or(EditorError::NoProject)?;
    let page_id = state
        .current_page_id
        .as_deref()
        .ok_or(EditorError::NoCurrentPage)?;
    let index = project
        .page_index(page_id)
        .ok_or(EditorError::NoCurrentPage)?;

    let components = mutate(&project.pages[index].components)?;

    let mut project = Project::clone(project);
    project.pages[index].components = components;

    Ok(EditorState {
        project: Some(Arc::new(project)),
        ..state.clone()
    })
}

fn restore(mut state: EditorState, snapshot: Arc<Project>) -> EditorState {
    state.current_page_id = snapshot.pages.first().map(|page| page.id.clone());
    state.project = Some(snapshot);
    state
}

fn add_page(state: &EditorState, page: Page) -> Result<EditorState, EditorError> {
    let project = state.project.as_ref().ok_or(EditorError::NoProject)?;
    if project.page(&page.id).is_some() {
        return Err(EditorError::DuplicatePage(page.id));
    }

    let page_id = page.id.clone();
    let mut project = Project::clone(project);
    project.pages.push(page);

    Ok(EditorState {
        project: Some(Arc::new(project)),
        current_page_id: Some(page_id),
        ..state.clone()
    })
}

fn remove_page(state: &EditorState, page_id: &str) -> Result<EditorState, EditorError> {
    let project = state.project.as_ref().ok_or(EditorError::NoProject)?;
    let index = project
        .page_index(page_id)
        .ok_or_else(|| EditorError::PageNotFound(page_id.to_string()))?;

    let mut project = Project::clone(project);
    project.pages.remove(index);

    let current_page_id = if state.current_page_id.as_deref() == Some(page_id) {
        project.pages.first().map(|page| page.id.clone())
    } else {
        state.current_page_id.clone()
    };

    Ok(EditorState {
        project: Some(Arc::new(project)),
        current_page_id,
        ..state.clone()
    })
}
