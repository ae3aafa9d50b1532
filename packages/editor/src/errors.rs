//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("No project loaded")]
    NoProject,

    #[error("No current page")]
    NoCurrentPage,

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Page already exists: {0}")]
    DuplicatePage(String),

    #[error("Load error: {0}")]
    Load(#[from] pagekit_model::LoadError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
