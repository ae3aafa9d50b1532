//! # Tree Mutations
//!
//! Pure rewrites of a page's component forest.
//!
//! ## Design Principles
//!
//! 1. **Pure**: input trees are never touched; every call returns a new forest
//! 2. **Shared**: only the path from the root to the change is rebuilt, every
//!    other subtree is the same `Arc` as before
//! 3. **Explicit misses**: a target id that does not exist is an error, not a
//!    silently unchanged tree
//!
//! ## Mutation Semantics
//!
//! ### Insert
//! - Without a parent the node is appended to the root sequence
//! - With a parent, the first pre-order match receives it as its last child
//!
//! ### UpdateProps
//! - Shallow merge into the first pre-order match; new keys overwrite
//!
//! ### Delete
//! - A filter, not a find: every node carrying the id is removed with its subtree
//!
//! ### Reorder
//! - Root sequence only; remove at the active index, insert at the over index

use pagekit_model::{Component, Props};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),
}

/// New forest, or the id that could not be found
pub type MutationResult = Result<Vec<Arc<Component>>, MutationError>;

/// Append `node` at the root, or as the last child of `parent_id`
pub fn insert(tree: &[Arc<Component>], node: Arc<Component>, parent_id: Option<&str>) -> MutationResult {
    match parent_id {
        None => {
            let mut nodes = tree.to_vec();
            nodes.push(node);
            Ok(nodes)
        }
        Some(parent_id) => rewrite_first(tree, parent_id, &mut |parent: &mut Component| {
            parent
                .children
                .get_or_insert_with(Vec::new)
                .push(node.clone());
        })
        .ok_or_else(|| MutationError::ParentNotFound(parent_id.to_string())),
    }
}

/// Shallow-merge `partial` into the props of `target_id`
pub fn update_props(tree: &[Arc<Component>], target_id: &str, partial: &Props) -> MutationResult {
    rewrite_first(tree, target_id, &mut |target: &mut Component| {
        for (key, value) in partial {
            target.props.insert(key.clone(), value.clone());
        }
    })
    .ok_or_else(|| MutationError::NodeNotFound(target_id.to_string()))
}

/// Remove every node with `target_id`, along with its subtree
pub fn delete(tree: &[Arc<Component>], target_id: &str) -> MutationResult {
    remove_all(tree, target_id).ok_or_else(|| MutationError::NodeNotFound(target_id.to_string()))
}

/// Move the root node `active_id` to the position of root node `over_id`
pub fn reorder(tree: &[Arc<Component>], active_id: &str, over_id: &str) -> MutationResult {
    let position = |id: &str| {
        tree.iter()
            .position(|node| node.id == id)
            .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))
    };

    let active_index = position(active_id)?;
    let over_index = position(over_id)?;

    let mut nodes = tree.to_vec();
    if active_index != over_index {
        let moved = nodes.remove(active_index);
        nodes.insert(over_index, moved);
    }
    Ok(nodes)
}

/// Apply `edit` to a copy of the first pre-order node with `id` and rebuild
/// the path above it. `None` when no node matches.
fn rewrite_first(
    nodes: &[Arc<Component>],
    id: &str,
    edit: &mut dyn FnMut(&mut Component),
) -> Option<Vec<Arc<Component>>> {
    for (index, node) in nodes.iter().enumerate() {
        let replacement = if node.id == id {
            let mut updated = Component::clone(node);
            edit(&mut updated);
            updated
        } else {
            let Some(children) = node.children.as_deref() else {
                continue;
            };
            match rewrite_first(children, id, edit) {
                Some(children) => Component {
                    children: Some(children),
                    ..Component::clone(node)
                },
                None => continue,
            }
        };

        let mut rebuilt = nodes.to_vec();
        rebuilt[index] = Arc::new(replacement);
        return Some(rebuilt);
    }
    None
}

/// `None` when nothing was removed, so untouched subtrees keep their `Arc`
fn remove_all(nodes: &[Arc<Component>], id: &str) -> Option<Vec<Arc<Component>>> {
    let mut removed = false;
    let mut kept = Vec::with_capacity(nodes.len());

    for node in nodes {
        if node.id == id {
            removed = true;
            continue;
        }

        match node.children.as_deref().and_then(|children| remove_all(children, id)) {
            Some(children) => {
                removed = true;
                kept.push(Arc::new(Component {
                    children: Some(children),
                    ..Component::clone(node)
                }));
            }
            None => kept.push(node.clone()),
        }
    }

    removed.then_some(kept)
}
