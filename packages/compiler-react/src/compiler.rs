use crate::context::{CompileOptions, CompilerContext};
use pagekit_model::{Component, ComponentKind, Page, Project, PropValue};

/// Compile a whole project: an `App` router file followed by one file per page
pub fn compile_project(project: &Project, options: CompileOptions) -> String {
    let ctx = CompilerContext::new(options);

    compile_app(project, &ctx);

    for (index, page) in project.pages.iter().enumerate() {
        ctx.add("\n");
        compile_page_file(page, index, &ctx);
    }

    ctx.get_output()
}

/// Compile one page as `Page{index}`
pub fn compile_page(page: &Page, index: usize, options: CompileOptions) -> String {
    let ctx = CompilerContext::new(options);
    compile_page_file(page, index, &ctx);
    ctx.get_output()
}

/// Compile one component tree as a standalone function component
pub fn compile_component(component: &Component, options: CompileOptions) -> String {
    let ctx = CompilerContext::new(options);
    let name = component_name(&component.name);

    compile_file_header(&name, &ctx);
    compile_function_open(&name, &ctx);
    ctx.indent();
    ctx.add_line("return (");
    ctx.indent();
    compile_element(component, &ctx);
    ctx.dedent();
    ctx.add_line(");");
    ctx.dedent();
    compile_function_close(&name, &ctx);

    ctx.get_output()
}

/// PascalCase identifier for a display name ("hero banner" → `HeroBanner`)
pub fn component_name(name: &str) -> String {
    let mut ident: String = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert_str(0, "Component");
    }
    ident
}

fn compile_app(project: &Project, ctx: &CompilerContext) {
    ctx.add_line(&format!("// App.{}", ctx.options.extension()));
    ctx.add_line("import React from 'react';");
    ctx.add_line("import { BrowserRouter as Router, Routes, Route } from 'react-router-dom';");
    for index in 0..project.pages.len() {
        ctx.add_line(&format!("import Page{0} from './Page{0}';", index));
    }
    compile_stylesheet_import("App", ctx);
    ctx.add("\n");

    compile_function_open("App", ctx);
    ctx.indent();
    ctx.add_line("return (");
    ctx.indent();
    ctx.add_line("<Router>");
    ctx.indent();
    ctx.add_line("<div className=\"app\">");
    ctx.indent();
    ctx.add_line("<Routes>");
    ctx.indent();

    for (index, page) in project.pages.iter().enumerate() {
        let path = if index == 0 {
            "/".to_string()
        } else {
            format!("/{}", page.id)
        };
        ctx.add_line(&format!(
            "<Route path=\"{}\" element={{<Page{} />}} />",
            path, index
        ));
    }

    ctx.dedent();
    ctx.add_line("</Routes>");
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</Router>");
    ctx.dedent();
    ctx.add_line(");");
    ctx.dedent();
    compile_function_close("App", ctx);
}

fn compile_page_file(page: &Page, index: usize, ctx: &CompilerContext) {
    let name = format!("Page{}", index);

    compile_file_header(&name, ctx);
    compile_function_open(&name, ctx);
    ctx.indent();
    ctx.add_line("return (");
    ctx.indent();
    ctx.add_line(&format!("<div className=\"page page-{}\">", index));
    ctx.indent();
    for component in &page.components {
        compile_element(component, ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line(");");
    ctx.dedent();
    compile_function_close(&name, ctx);
}

fn compile_file_header(name: &str, ctx: &CompilerContext) {
    ctx.add_line(&format!("// {}.{}", name, ctx.options.extension()));
    ctx.add_line("import React from 'react';");
    compile_stylesheet_import(name, ctx);
    ctx.add("\n");
}

fn compile_stylesheet_import(name: &str, ctx: &CompilerContext) {
    if ctx.options.include_css_imports {
        ctx.add_line(&format!(
            "import './{}.{}';",
            name, ctx.options.stylesheet_extension
        ));
    }
}

fn compile_function_open(name: &str, ctx: &CompilerContext) {
    if ctx.options.use_typescript {
        ctx.add_line(&format!("interface {}Props {{}}", name));
        ctx.add("\n");
        ctx.add_line(&format!("const {0}: React.FC<{0}Props> = () => {{", name));
    } else {
        ctx.add_line(&format!("const {} = () => {{", name));
    }
}

fn compile_function_close(name: &str, ctx: &CompilerContext) {
    ctx.add_line("};");
    ctx.add("\n");
    ctx.add_line(&format!("export default {};", name));
}

fn compile_element(component: &Component, ctx: &CompilerContext) {
    let attrs = compile_attributes(component);

    match &component.kind {
        ComponentKind::Button => ctx.add_line(&format!(
            "<button{}>{}</button>",
            attrs,
            text_content(component, "text", "Button")
        )),

        ComponentKind::Input => ctx.add_line(&format!("<input{} />", attrs)),

        ComponentKind::Text => ctx.add_line(&format!(
            "<span{}>{}</span>",
            attrs,
            text_content(component, "content", "Text")
        )),

        ComponentKind::Title => {
            let level = heading_level(component);
            ctx.add_line(&format!(
                "<h{0}{1}>{2}</h{0}>",
                level,
                attrs,
                text_content(component, "content", "Title")
            ))
        }

        ComponentKind::Paragraph => ctx.add_line(&format!(
            "<p{}>{}</p>",
            attrs,
            text_content(component, "content", "Paragraph")
        )),

        ComponentKind::Card => {
            ctx.add_line(&format!("<div className=\"card\"{}>", attrs));
            ctx.indent();
            ctx.add_line(&format!(
                "<div className=\"card-header\">{}</div>",
                text_content(component, "title", "Card title")
            ));
            compile_wrapper(
                "<div className=\"card-body\">",
                "</div>",
                component,
                &text_content(component, "content", "Card content"),
                ctx,
            );
            ctx.dedent();
            ctx.add_line("</div>");
        }

        ComponentKind::Space => compile_wrapper(
            &format!("<div className=\"space\"{}>", attrs),
            "</div>",
            component,
            "",
            ctx,
        ),

        ComponentKind::Container => compile_wrapper(
            &format!("<div className=\"container\"{}>", attrs),
            "</div>",
            component,
            "",
            ctx,
        ),

        ComponentKind::Image => {
            let alt = component
                .prop_str("alt")
                .filter(|alt| !alt.is_empty())
                .unwrap_or("Image");
            ctx.add_line(&format!("<img{} {} />", attrs, string_attribute("alt", alt)))
        }

        ComponentKind::Textarea => ctx.add_line(&format!("<textarea{} />", attrs)),

        ComponentKind::Select => ctx.add_line(&format!("<select{}></select>", attrs)),

        ComponentKind::Switch => ctx.add_line(&format!("<input type=\"checkbox\"{} />", attrs)),

        ComponentKind::Divider => ctx.add_line(&format!("<hr{} />", attrs)),

        ComponentKind::Badge => ctx.add_line(&format!(
            "<span className=\"badge\"{}>{}</span>",
            attrs,
            badge_count(component)
        )),

        ComponentKind::Custom(_) => compile_wrapper(
            &format!("<div{}>", attrs),
            "</div>",
            component,
            "Unknown component",
            ctx,
        ),
    }
}

/// Children one level deeper between `open` and `close`, or `fallback`
/// inline when there are none
fn compile_wrapper(
    open: &str,
    close: &str,
    component: &Component,
    fallback: &str,
    ctx: &CompilerContext,
) {
    if !component.has_children() {
        ctx.add_line(&format!("{}{}{}", open, fallback, close));
        return;
    }

    ctx.add_line(open);
    ctx.indent();
    for child in component.children() {
        compile_element(child, ctx);
    }
    ctx.dedent();
    ctx.add_line(close);
}

fn compile_attributes(component: &Component) -> String {
    let mut out = String::new();

    for (key, value) in component.attribute_props() {
        match value {
            PropValue::String(text) => {
                out.push(' ');
                out.push_str(&string_attribute(key, text));
            }
            PropValue::Bool(true) => {
                out.push(' ');
                out.push_str(key);
            }
            PropValue::Bool(false) | PropValue::Null => {}
            // Numbers, arrays and objects as JS literals
            other => out.push_str(&format!(" {}={{{}}}", key, other)),
        }
    }

    out
}

fn string_attribute(key: &str, value: &str) -> String {
    if value.contains('"') {
        format!("{}={{{}}}", key, js_string(value))
    } else {
        format!("{}=\"{}\"", key, value)
    }
}

fn text_content(component: &Component, key: &str, fallback: &str) -> String {
    match component.props.get(key) {
        Some(PropValue::String(text)) if !text.is_empty() => jsx_text(text),
        Some(PropValue::Number(number)) => number.to_string(),
        _ => fallback.to_string(),
    }
}

/// Text with JSX-significant characters goes in as a string expression
fn jsx_text(text: &str) -> String {
    if text.contains(|c: char| matches!(c, '<' | '>' | '{' | '}')) {
        format!("{{{}}}", js_string(text))
    } else {
        text.to_string()
    }
}

fn js_string(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

fn heading_level(component: &Component) -> u64 {
    let level = match component.props.get("level") {
        Some(PropValue::String(text)) => text.trim().parse().ok(),
        Some(value) => value.as_u64(),
        None => None,
    };
    level.unwrap_or(1).clamp(1, 6)
}

fn badge_count(component: &Component) -> String {
    match component.props.get("count") {
        Some(PropValue::String(text)) => jsx_text(text),
        Some(PropValue::Number(number)) => number.to_string(),
        _ => "0".to_string(),
    }
}
