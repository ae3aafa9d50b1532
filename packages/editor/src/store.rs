//! # Editor Store
//!
//! Owns the one live [`EditorState`] and is the only place actions enter.
//! After each applied action every subscriber sees the action and the new
//! state. A failing subscriber is logged; the state change stands.

use crate::actions::Action;
use crate::config::EditorConfig;
use crate::errors::EditorError;
use crate::reducer::try_reduce;
use crate::state::EditorState;
use crate::storage::ProjectStorage;
use std::sync::Arc;
use tracing::{error, info, warn};

/// What a subscriber is told after an action applied
#[derive(Debug)]
pub struct Dispatched<'a> {
    pub action: &'a Action,

    /// The project is a different snapshot than before the action
    pub project_changed: bool,

    pub state: &'a EditorState,
}

pub trait Subscriber {
    fn on_dispatch(&mut self, event: &Dispatched<'_>) -> Result<(), EditorError>;
}

pub struct EditorStore {
    state: EditorState,
    subscribers: Vec<Box<dyn Subscriber>>,
}

impl EditorStore {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: EditorState::new(config),
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply `action`. On error the state is left as it was and no
    /// subscriber is notified.
    pub fn dispatch(&mut self, action: Action) -> Result<&EditorState, EditorError> {
        let name = action.name();
        let next = match try_reduce(&self.state, action.clone()) {
            Ok(next) => next,
            Err(err) => {
                warn!(action = name, error = %err, "Action rejected");
                return Err(err);
            }
        };

        let project_changed = match (self.state.project(), next.project()) {
            (Some(before), Some(after)) => !Arc::ptr_eq(before, after),
            (None, None) => false,
            _ => true,
        };
        self.state = next;

        let event = Dispatched {
            action: &action,
            project_changed,
            state: &self.state,
        };
        for subscriber in &mut self.subscribers {
            if let Err(err) = subscriber.on_dispatch(&event) {
                error!(action = name, error = %err, "Subscriber failed");
            }
        }

        Ok(&self.state)
    }

    /// Load the stored project, if there is one. Returns whether a project
    /// was loaded.
    pub fn load_from(&mut self, storage: &impl ProjectStorage) -> Result<bool, EditorError> {
        match storage.load()? {
            Some(project) => {
                info!(project_id = %project.id, pages = project.pages.len(), "Project loaded");
                self.dispatch(Action::SetProject(project))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{AutoSave, MemoryStorage};
    use pagekit_model::Project;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        events: Rc<RefCell<Vec<(String, bool)>>>,
    }

    impl Subscriber for Recorder {
        fn on_dispatch(&mut self, event: &Dispatched<'_>) -> Result<(), EditorError> {
            self.events
                .borrow_mut()
                .push((event.action.name().to_string(), event.project_changed));
            Ok(())
        }
    }

    struct Failing;

    impl Subscriber for Failing {
        fn on_dispatch(&mut self, _event: &Dispatched<'_>) -> Result<(), EditorError> {
            Err(EditorError::NoProject)
        }
    }

    #[test]
    fn test_subscribers_see_applied_actions_only() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut store = EditorStore::default();
        store.subscribe(Recorder {
            events: events.clone(),
        });

        store.dispatch(Action::SetProject(Project::starter())).unwrap();
        store.dispatch(Action::TogglePreview).unwrap();
        assert!(store
            .dispatch(Action::DeleteComponent("ghost".to_string()))
            .is_err());

        assert_eq!(
            *events.borrow(),
            vec![
                ("SET_PROJECT".to_string(), true),
                ("TOGGLE_PREVIEW".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_failing_subscriber_does_not_roll_back() {
        let mut store = EditorStore::default();
        store.subscribe(Failing);

        let state = store.dispatch(Action::TogglePreview).unwrap();
        assert!(state.is_preview());
    }

    #[test]
    fn test_load_from_empty_storage() {
        let mut store = EditorStore::default();
        assert!(!store.load_from(&MemoryStorage::new()).unwrap());
        assert!(store.state().project().is_none());
    }

    #[test]
    fn test_autosave_on_project_change() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = EditorStore::default();
        store.subscribe(AutoSave::new(storage.clone()));

        store.dispatch(Action::TogglePreview).unwrap();
        assert!(storage.json().is_none());

        store.dispatch(Action::SetProject(Project::starter())).unwrap();
        let saved = storage.load().unwrap().unwrap();
        assert_eq!(&saved, store.state().project().unwrap().as_ref());
    }
}
