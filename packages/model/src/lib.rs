//! # Pagekit Model
//!
//! The data the page builder edits: projects own pages, pages own an ordered
//! forest of component nodes.
//!
//! ```text
//! Project
//!  └─ Page*
//!      └─ Component*        (root sequence)
//!          └─ Component*    (children, any depth)
//! ```
//!
//! Component children live behind `Arc`, so a rewritten tree shares every
//! untouched subtree with the tree it was derived from. Editor history relies
//! on this to keep snapshots cheap.
//!
//! Everything here is plain serializable data. `Project::from_json` is the
//! entry point for persisted projects and validates shape before handing the
//! value back.

pub mod component;
pub mod error;
pub mod id_generator;
pub mod library;
pub mod project;
pub mod validator;
pub mod visitor;

pub use component::{find_component, Component, ComponentKind, PropValue, Props, Style};
pub use error::LoadError;
pub use id_generator::{
    generate_component_id, generate_page_id, generate_project_id, new_id, IdGenerator, IdKind,
};
pub use library::{component_library, ComponentMeta, LibraryCategory, PropKind, PropSpec, SelectOption};
pub use project::{Page, Project};
pub use validator::validate_project;
pub use visitor::{walk_component, walk_page, walk_project, Visitor};
