//! Shape checks applied to persisted projects before the editor accepts them

use crate::component::Component;
use crate::error::LoadError;
use crate::project::{Page, Project};
use crate::visitor::{walk_component, Visitor};
use std::collections::HashSet;
use tracing::debug;

/// Check ids are present and unique: page ids across the project, component
/// ids across each page's whole tree.
pub fn validate_project(project: &Project) -> Result<(), LoadError> {
    if project.id.is_empty() {
        return Err(LoadError::MissingId("project".to_string()));
    }

    let mut page_ids = HashSet::new();
    for page in &project.pages {
        if page.id.is_empty() {
            return Err(LoadError::MissingId(format!("page '{}'", page.name)));
        }
        if !page_ids.insert(page.id.as_str()) {
            return Err(LoadError::DuplicatePageId(page.id.clone()));
        }
        validate_page(page)?;
    }

    debug!(project_id = %project.id, pages = project.pages.len(), "Project validated");
    Ok(())
}

fn validate_page(page: &Page) -> Result<(), LoadError> {
    let mut checker = IdChecker {
        page,
        seen: HashSet::new(),
        error: None,
    };
    checker.visit_page(page);

    match checker.error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

struct IdChecker<'a> {
    page: &'a Page,
    seen: HashSet<String>,
    error: Option<LoadError>,
}

impl Visitor for IdChecker<'_> {
    fn visit_component(&mut self, component: &Component, depth: usize) {
        if self.error.is_some() {
            return;
        }

        if component.id.is_empty() {
            self.error = Some(LoadError::MissingId(format!(
                "component '{}' on page '{}'",
                component.name, self.page.id
            )));
            return;
        }

        if !self.seen.insert(component.id.clone()) {
            self.error = Some(LoadError::DuplicateComponentId {
                page_id: self.page.id.clone(),
                component_id: component.id.clone(),
            });
            return;
        }

        walk_component(self, component, depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;

    fn project_with(pages: Vec<Page>) -> Project {
        let mut project = Project::new("Test", "");
        project.pages = pages;
        project
    }

    #[test]
    fn test_valid_project() {
        let project = project_with(vec![
            Page::new("p1", "One", "One").with_components(vec![Component::new(
                "a",
                ComponentKind::Container,
                "A",
            )
            .with_children(vec![Component::new("b", ComponentKind::Text, "B")])]),
            // Component ids only need to be unique within a page
            Page::new("p2", "Two", "Two")
                .with_components(vec![Component::new("a", ComponentKind::Text, "A")]),
        ]);

        assert!(validate_project(&project).is_ok());
    }

    #[test]
    fn test_empty_page_list_is_valid() {
        assert!(validate_project(&project_with(vec![])).is_ok());
    }

    #[test]
    fn test_duplicate_page_id() {
        let project = project_with(vec![
            Page::new("p1", "One", "One"),
            Page::new("p1", "Again", "Again"),
        ]);

        assert!(matches!(
            validate_project(&project),
            Err(LoadError::DuplicatePageId(id)) if id == "p1"
        ));
    }

    #[test]
    fn test_duplicate_component_id_at_different_depths() {
        let project = project_with(vec![Page::new("p1", "One", "One").with_components(vec![
            Component::new("a", ComponentKind::Container, "A")
                .with_children(vec![Component::new("x", ComponentKind::Text, "X")]),
            Component::new("x", ComponentKind::Button, "X again"),
        ])]);

        match validate_project(&project) {
            Err(LoadError::DuplicateComponentId { page_id, component_id }) => {
                assert_eq!(page_id, "p1");
                assert_eq!(component_id, "x");
            }
            other => panic!("expected duplicate component error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_ids() {
        let mut project = project_with(vec![Page::new("", "Nameless", "")]);
        assert!(matches!(validate_project(&project), Err(LoadError::MissingId(_))));

        project.pages = vec![Page::new("p1", "One", "One")
            .with_components(vec![Component::new("", ComponentKind::Text, "T")])];
        assert!(matches!(validate_project(&project), Err(LoadError::MissingId(_))));

        project.id.clear();
        assert!(matches!(validate_project(&project), Err(LoadError::MissingId(_))));
    }
}
