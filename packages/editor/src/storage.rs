//! Where projects live between sessions

use crate::errors::EditorError;
use crate::store::{Dispatched, Subscriber};
use pagekit_model::Project;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info};

/// Persistence port for a single project
pub trait ProjectStorage {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<Project>, EditorError>;

    fn save(&self, project: &Project) -> Result<(), EditorError>;
}

impl<S: ProjectStorage + ?Sized> ProjectStorage for Rc<S> {
    fn load(&self) -> Result<Option<Project>, EditorError> {
        (**self).load()
    }

    fn save(&self, project: &Project) -> Result<(), EditorError> {
        (**self).save(project)
    }
}

/// Holds the serialized project in memory, the way a browser keeps it in
/// local storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    json: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with raw JSON (which may not be valid)
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: RefCell::new(Some(json.into())),
        }
    }

    pub fn json(&self) -> Option<String> {
        self.json.borrow().clone()
    }
}

impl ProjectStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Project>, EditorError> {
        match self.json.borrow().as_deref() {
            Some(json) => Ok(Some(Project::from_json(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, project: &Project) -> Result<(), EditorError> {
        let json = serde_json::to_string(project)?;
        *self.json.borrow_mut() = Some(json);
        Ok(())
    }
}

/// A project stored as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectStorage for FileStorage {
    fn load(&self) -> Result<Option<Project>, EditorError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No saved project");
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path)?;
        Ok(Some(Project::from_json(&json)?))
    }

    fn save(&self, project: &Project) -> Result<(), EditorError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(&self.path, project.to_json_pretty()?)?;
        info!(path = %self.path.display(), project_id = %project.id, "Project saved");
        Ok(())
    }
}

/// Subscriber that writes the project out whenever it changes
pub struct AutoSave<S> {
    storage: S,
}

impl<S: ProjectStorage> AutoSave<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: ProjectStorage> Subscriber for AutoSave<S> {
    fn on_dispatch(&mut self, event: &Dispatched<'_>) -> Result<(), EditorError> {
        if !event.project_changed {
            return Ok(());
        }

        match event.state.project() {
            Some(project) => self.storage.save(project),
            None => Ok(()),
        }
    }
}
