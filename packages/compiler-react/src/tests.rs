use crate::{compile_component, compile_page, compile_project, component_name, CompileOptions};
use pagekit_model::{Component, ComponentKind, Page, Project, PropValue};

fn home_page() -> Page {
    Page::new("p1", "Home", "Home").with_components(vec![
        Component::new("b", ComponentKind::Button, "Button")
            .with_prop("text", "Go")
            .with_prop("type", "primary")
            .with_prop("disabled", false),
        Component::new("box", ComponentKind::Container, "Box")
            .with_prop("padding", 16)
            .with_children(vec![Component::new("t", ComponentKind::Text, "Text")
                .with_prop("content", "Hi")
                .with_prop("fontSize", 14)]),
    ])
}

#[test]
fn test_page_output() {
    let result = compile_page(&home_page(), 0, CompileOptions::default());

    println!("Generated code:\n{}", result);

    let expected = r#"// Page0.jsx
import React from 'react';
import './Page0.css';

const Page0 = () => {
  return (
    <div className="page page-0">
      <button type="primary">Go</button>
      <div className="container" padding={16}>
        <span fontSize={14}>Hi</span>
      </div>
    </div>
  );
};

export default Page0;
"#;
    assert_eq!(result, expected);
}

#[test]
fn test_typescript_page() {
    let options = CompileOptions {
        use_typescript: true,
        include_css_imports: false,
        ..CompileOptions::default()
    };
    let result = compile_page(&home_page(), 2, options);

    println!("Generated code:\n{}", result);

    assert!(result.starts_with("// Page2.tsx\n"));
    assert!(result.contains("interface Page2Props {}"));
    assert!(result.contains("const Page2: React.FC<Page2Props> = () => {"));
    assert!(!result.contains(".css'"));
}

#[test]
fn test_project_has_router_and_pages() {
    let project = Project::new("Site", "")
        .with_page(home_page())
        .with_page(Page::new("about", "About", "About"));

    let options = CompileOptions {
        stylesheet_extension: "scss".to_string(),
        ..CompileOptions::default()
    };
    let result = compile_project(&project, options);

    println!("Generated code:\n{}", result);

    assert!(result.starts_with("// App.jsx\n"));
    assert!(result.contains("import Page1 from './Page1';"));
    assert!(result.contains("import './App.scss';"));
    assert!(result.contains("<Route path=\"/\" element={<Page0 />} />"));
    assert!(result.contains("<Route path=\"/about\" element={<Page1 />} />"));
    assert!(result.contains("\n// Page0.jsx\n"));
    assert!(result.contains("\n// Page1.jsx\n"));
    assert!(result.contains("<div className=\"page page-1\">"));
}

#[test]
fn test_attribute_rendering() {
    let component = Component::new("x", "widget", "Widget")
        .with_prop("label", "say \"hi\"")
        .with_prop("active", true)
        .with_prop("hidden", false)
        .with_prop("empty", PropValue::Null)
        .with_prop("ratio", 1.5)
        .with_prop("tags", vec![PropValue::from("a"), PropValue::from(1)]);

    let result = compile_component(&component, CompileOptions::default());

    println!("Generated code:\n{}", result);

    assert!(result.contains(
        r#"<div label={"say \"hi\""} active ratio={1.5} tags={["a",1]}>Unknown component</div>"#
    ));
    assert!(!result.contains("hidden"));
    assert!(!result.contains("empty"));
}

#[test]
fn test_content_templates() {
    let card = Component::new("c", ComponentKind::Card, "Feature card")
        .with_prop("title", "Features")
        .with_prop("bordered", true)
        .with_children(vec![
            Component::new("h", ComponentKind::Title, "Title")
                .with_prop("content", "Fast")
                .with_prop("level", 3),
            Component::new("i", ComponentKind::Image, "Image").with_prop("src", "a.png"),
            Component::new("n", ComponentKind::Badge, "Badge").with_prop("count", 7),
            Component::new("p", ComponentKind::Paragraph, "Paragraph").with_prop("content", "a < b"),
        ]);

    let result = compile_component(&card, CompileOptions::default());

    println!("Generated code:\n{}", result);

    assert!(result.contains("const FeatureCard = () => {"));
    assert!(result.contains("<div className=\"card\" bordered>"));
    assert!(result.contains("<div className=\"card-header\">Features</div>"));
    assert!(result.contains("<div className=\"card-body\">"));
    assert!(result.contains("<h3>Fast</h3>"));
    assert!(result.contains("<img src=\"a.png\" alt=\"Image\" />"));
    assert!(result.contains("<span className=\"badge\">7</span>"));
    assert!(result.contains("<p>{\"a < b\"}</p>"));
}

#[test]
fn test_defaults_for_missing_content() {
    let page = Page::new("p", "P", "P").with_components(vec![
        Component::new("b", ComponentKind::Button, "B"),
        Component::new("c", ComponentKind::Card, "C"),
        Component::new("s", ComponentKind::Space, "S"),
    ]);

    let result = compile_page(&page, 0, CompileOptions::default());

    assert!(result.contains("<button>Button</button>"));
    assert!(result.contains("<div className=\"card-header\">Card title</div>"));
    assert!(result.contains("<div className=\"card-body\">Card content</div>"));
    assert!(result.contains("<div className=\"space\"></div>"));
}

#[test]
fn test_component_names() {
    assert_eq!(component_name("hero banner"), "HeroBanner");
    assert_eq!(component_name("Button"), "Button");
    assert_eq!(component_name("2-col"), "Component2Col");
    assert_eq!(component_name("!!"), "Component");
}
