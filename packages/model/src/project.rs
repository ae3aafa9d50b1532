use crate::component::{find_component, Component, ComponentKind, Style};
use crate::error::LoadError;
use crate::id_generator::{generate_page_id, generate_project_id};
use crate::validator::validate_project;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One page of a project and its root component sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub title: String,

    #[serde(default)]
    pub components: Vec<Arc<Component>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_style: Option<Style>,
}

impl Page {
    pub fn new(id: impl Into<String>, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: title.into(),
            components: Vec::new(),
            global_style: None,
        }
    }

    /// Page with a freshly generated id
    pub fn untitled(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(generate_page_id(), name.clone(), name)
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components.into_iter().map(Arc::new).collect();
        self
    }

    pub fn find_component(&self, id: &str) -> Option<&Arc<Component>> {
        find_component(&self.components, id)
    }
}

/// The root of ownership: a project exclusively owns its pages and trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,

    #[serde(default)]
    pub pages: Vec<Page>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Empty project with a generated id, stamped now
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: generate_project_id(),
            name: name.into(),
            description: description.into(),
            pages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The project a new editor session starts with: one home page holding
    /// a sample button and a sample text block.
    pub fn starter() -> Self {
        let button = Component::from_library(&ComponentKind::Button)
            .with_prop("text", "This is a test button")
            .with_prop("type", "primary");
        let text = Component::from_library(&ComponentKind::Text)
            .with_prop("content", "This is sample text")
            .with_prop("color", "#1890ff");

        Self::new("My Project", "A low-code page builder project")
            .with_page(Page::untitled("Home").with_components(vec![button, text]))
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn page_index(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.id == id)
    }

    /// Parse persisted JSON and validate its shape
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let project: Project = serde_json::from_str(json)?;
        validate_project(&project)?;
        Ok(project)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
