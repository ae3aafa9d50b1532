use crate::component::Component;
use crate::project::{Page, Project};

/// Visitor pattern for traversing a project immutably
///
/// Default implementations walk the entire tree in pre-order.
/// Override specific visit_* methods to act on nodes.
pub trait Visitor: Sized {
    fn visit_project(&mut self, project: &Project) {
        walk_project(self, project);
    }

    fn visit_page(&mut self, page: &Page) {
        walk_page(self, page);
    }

    /// `depth` is 0 for nodes in a page's root sequence
    fn visit_component(&mut self, component: &Component, depth: usize) {
        walk_component(self, component, depth);
    }
}

pub fn walk_project<V: Visitor>(visitor: &mut V, project: &Project) {
    for page in &project.pages {
        visitor.visit_page(page);
    }
}

pub fn walk_page<V: Visitor>(visitor: &mut V, page: &Page) {
    for component in &page.components {
        visitor.visit_component(component, 0);
    }
}

pub fn walk_component<V: Visitor>(visitor: &mut V, component: &Component, depth: usize) {
    for child in component.children() {
        visitor.visit_component(child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;

    struct Collect(Vec<(String, usize)>);

    impl Visitor for Collect {
        fn visit_component(&mut self, component: &Component, depth: usize) {
            self.0.push((component.id.clone(), depth));
            walk_component(self, component, depth);
        }
    }

    #[test]
    fn test_walk_is_pre_order_with_depth() {
        let page = Page::new("p1", "Home", "Home").with_components(vec![
            Component::new("a", ComponentKind::Container, "A").with_children(vec![
                Component::new("b", ComponentKind::Card, "B")
                    .with_children(vec![Component::new("c", ComponentKind::Text, "C")]),
            ]),
            Component::new("d", ComponentKind::Button, "D"),
        ]);

        let mut collect = Collect(Vec::new());
        collect.visit_page(&page);

        let expected: Vec<(String, usize)> = vec![
            ("a".into(), 0),
            ("b".into(), 1),
            ("c".into(), 2),
            ("d".into(), 0),
        ];
        assert_eq!(collect.0, expected);
    }
}
