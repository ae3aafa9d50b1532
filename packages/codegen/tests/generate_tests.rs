use pagekit_codegen::{
    generate, markup_file_name, CodegenError, ExportScope, Framework, GenerateOptions, StyleDialect,
};
use pagekit_model::{Component, ComponentKind, Page, Project};

fn shop() -> Project {
    Project::new("Shop", "Demo shop")
        .with_page(Page::new("home", "Home", "Welcome").with_components(vec![
            Component::new("headline", ComponentKind::Title, "Headline")
                .with_prop("content", "Spring sale")
                .with_prop("level", 2),
            Component::new("promo", ComponentKind::Card, "Promo card")
                .with_prop("title", "Deal of the day")
                .with_children(vec![Component::new("buy", ComponentKind::Button, "Buy button")
                    .with_prop("text", "Buy now")
                    .with_prop("type", "primary")]),
        ]))
        .with_page(Page::new("contact", "Contact", "Contact us").with_components(vec![
            Component::new("email", ComponentKind::Input, "Email").with_prop("placeholder", "you@example.com"),
        ]))
}

#[test]
fn test_generate_project_react() {
    let code = generate(&shop(), &GenerateOptions::default()).unwrap();

    println!("Generated code:\n{}", code.markup);

    assert!(code.markup.starts_with("// App.jsx\n"));
    assert!(code.markup.contains("import Page0 from './Page0';"));
    assert!(code.markup.contains("<Route path=\"/\" element={<Page0 />} />"));
    assert!(code.markup.contains("<Route path=\"/contact\" element={<Page1 />} />"));
    assert!(code.markup.contains("// Page1.jsx"));
    assert!(code.markup.contains("<h2>Spring sale</h2>"));
    assert!(code.markup.contains("<button type=\"primary\">Buy now</button>"));
    assert!(code.markup.contains("<input placeholder=\"you@example.com\" />"));
    assert!(code.stylesheet.contains(".page {"));
}

#[test]
fn test_generate_is_deterministic() {
    let project = shop();
    for framework in [Framework::React, Framework::Html] {
        let options = GenerateOptions {
            framework,
            ..GenerateOptions::default()
        };
        let first = generate(&project, &options).unwrap();
        let second = generate(&project, &options).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_generate_page_typescript_scss() {
    let options = GenerateOptions {
        typescript: true,
        style: StyleDialect::Scss,
        export: ExportScope::Page,
        target: Some("contact".to_string()),
        ..GenerateOptions::default()
    };
    let code = generate(&shop(), &options).unwrap();

    println!("Generated code:\n{}", code.markup);

    assert!(code.markup.starts_with("// Page1.tsx\n"));
    assert!(code.markup.contains("import './Page1.scss';"));
    assert!(code.markup.contains("const Page1: React.FC<Page1Props> = () => {"));
    assert!(!code.markup.contains("Spring sale"));
    assert!(code.stylesheet.contains("$primary-color"));
}

#[test]
fn test_generate_component_from_nested_id() {
    let options = GenerateOptions {
        export: ExportScope::Component,
        target: Some("buy".to_string()),
        ..GenerateOptions::default()
    };
    let code = generate(&shop(), &options).unwrap();

    println!("Generated code:\n{}", code.markup);

    assert!(code.markup.starts_with("// BuyButton.jsx\n"));
    assert!(code.markup.contains("export default BuyButton;"));
    assert!(!code.markup.contains("Deal of the day"));
}

#[test]
fn test_generate_html_project() {
    let options = GenerateOptions {
        framework: Framework::Html,
        style: StyleDialect::Tailwind,
        ..GenerateOptions::default()
    };
    let code = generate(&shop(), &options).unwrap();

    println!("Generated HTML:\n{}", code.markup);

    assert_eq!(code.markup.matches("<!DOCTYPE html>").count(), 2);
    assert!(code.markup.contains("<title>Welcome</title>"));
    assert!(code.markup.contains("<div class=\"card-header\">Deal of the day</div>"));
    assert!(code.markup.contains("<!-- contact.html -->"));
    assert!(code.stylesheet.starts_with("@tailwind base;"));
}

#[test]
fn test_unknown_targets_are_errors() {
    let project = shop();

    let page = GenerateOptions {
        export: ExportScope::Page,
        target: Some("missing".to_string()),
        ..GenerateOptions::default()
    };
    assert_eq!(
        generate(&project, &page),
        Err(CodegenError::TargetNotFound {
            scope: ExportScope::Page,
            id: "missing".to_string(),
        })
    );

    let component = GenerateOptions {
        export: ExportScope::Component,
        target: Some("missing".to_string()),
        ..GenerateOptions::default()
    };
    assert!(matches!(
        markup_file_name(&project, &component),
        Err(CodegenError::TargetNotFound { .. })
    ));
}

#[test]
fn test_options_from_export_dialog_json() {
    let options: GenerateOptions =
        serde_json::from_str(r#"{"framework": "react", "style": "css", "typescript": false, "export": "page"}"#)
            .unwrap();
    let code = generate(&shop(), &options).unwrap();

    assert!(code.markup.starts_with("// Page0.jsx\n"));
    assert_eq!(markup_file_name(&shop(), &options).unwrap(), "Page0.jsx");
}
