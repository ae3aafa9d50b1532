use thiserror::Error;

/// Persisted project data that cannot be accepted
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing id on {0}")]
    MissingId(String),

    #[error("Duplicate page id: {0}")]
    DuplicatePageId(String),

    #[error("Duplicate component id '{component_id}' on page '{page_id}'")]
    DuplicateComponentId {
        page_id: String,
        component_id: String,
    },
}
