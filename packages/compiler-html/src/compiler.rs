use pagekit_model::{Component, ComponentKind, Page, Project, PropValue};

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Stylesheet linked from each document's head
    pub stylesheet_href: Option<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            stylesheet_href: Some("styles.css".to_string()),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// File a page is written to: the first page is the site index
pub fn page_file_name(page: &Page, index: usize) -> String {
    if index == 0 {
        "index.html".to_string()
    } else {
        format!("{}.html", page.id)
    }
}

/// Compile every page to its own document, in page order
pub fn compile_project(project: &Project, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    for (index, page) in project.pages.iter().enumerate() {
        if index > 0 {
            ctx.add("\n");
        }
        compile_document(page, index, &mut ctx);
    }

    ctx.get_output()
}

/// Compile one page to a standalone HTML document
pub fn compile_page(page: &Page, index: usize, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    compile_document(page, index, &mut ctx);
    ctx.get_output()
}

/// Compile one component tree to an HTML fragment
pub fn compile_component(component: &Component, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    compile_element(component, &mut ctx);
    ctx.get_output()
}

fn compile_document(page: &Page, index: usize, ctx: &mut Context) {
    ctx.add_line(&format!("<!-- {} -->", page_file_name(page, index)));
    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");

    compile_head(page, ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<div class=\"app\">");
    ctx.indent();
    ctx.add_line(&format!("<div class=\"page page-{}\">", index));
    ctx.indent();

    for component in &page.components {
        compile_element(component, ctx);
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</body>");
    ctx.add_line("</html>");
}

fn compile_head(page: &Page, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    let title = if page.title.is_empty() {
        &page.name
    } else {
        &page.title
    };
    ctx.add_line(&format!("<title>{}</title>", escape_text(title)));

    if let Some(href) = ctx.options.stylesheet_href.clone() {
        ctx.add_line(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">",
            escape_attribute(&href)
        ));
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_element(component: &Component, ctx: &mut Context) {
    let attrs = compile_attributes(component);

    match &component.kind {
        ComponentKind::Button => ctx.add_line(&format!(
            "<button{}>{}</button>",
            attrs,
            text_content(component, "text", "Button")
        )),

        ComponentKind::Input => ctx.add_line(&format!("<input{}>", attrs)),

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
            ctx.add_line(&format!("<div class=\"card\"{}>", attrs));
            ctx.indent();
            ctx.add_line(&format!(
                "<div class=\"card-header\">{}</div>",
                text_content(component, "title", "Card title")
            ));
            let content = text_content(component, "content", "Card content");
            compile_wrapper("<div class=\"card-body\">", component, &content, ctx);
            ctx.dedent();
            ctx.add_line("</div>");
        }

        ComponentKind::Space => {
            compile_wrapper(&format!("<div class=\"space\"{}>", attrs), component, "", ctx)
        }

        ComponentKind::Container => compile_wrapper(
            &format!("<div class=\"container\"{}>", attrs),
            component,
            "",
            ctx,
        ),

        ComponentKind::Image => {
            let alt = component
                .prop_str("alt")
                .filter(|alt| !alt.is_empty())
                .unwrap_or("Image");
            ctx.add_line(&format!("<img{} alt=\"{}\">", attrs, escape_attribute(alt)))
        }

        ComponentKind::Textarea => ctx.add_line(&format!("<textarea{}></textarea>", attrs)),

        ComponentKind::Select => ctx.add_line(&format!("<select{}></select>", attrs)),

        ComponentKind::Switch => ctx.add_line(&format!("<input type=\"checkbox\"{}>", attrs)),

        ComponentKind::Divider => ctx.add_line(&format!("<hr{}>", attrs)),

        ComponentKind::Badge => ctx.add_line(&format!(
            "<span class=\"badge\"{}>{}</span>",
            attrs,
            badge_count(component)
        )),

        ComponentKind::Custom(_) => compile_wrapper(
            &format!("<div{}>", attrs),
            component,
            "Unknown component",
            ctx,
        ),
    }
}

/// `open` + children + `</div>`, or `fallback` inline when there are no children
fn compile_wrapper(open: &str, component: &Component, fallback: &str, ctx: &mut Context) {
    if !component.has_children() {
        ctx.add_line(&format!("{}{}</div>", open, fallback));
        return;
    }

    ctx.add_line(open);
    ctx.indent();
    for child in component.children() {
        compile_element(child, ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

fn compile_attributes(component: &Component) -> String {
    let mut out = String::new();

    for (key, value) in component.attribute_props() {
        match value {
            PropValue::Bool(true) => {
                out.push(' ');
                out.push_str(key);
            }
            PropValue::Bool(false) | PropValue::Null => {}
            PropValue::String(text) => {
                out.push_str(&format!(" {}=\"{}\"", key, escape_attribute(text)));
            }
            // Numbers as-is, arrays and objects as JSON, all quoted
            other => {
                out.push_str(&format!(" {}=\"{}\"", key, escape_attribute(&other.to_string())));
            }
        }
    }

    out
}

fn text_content(component: &Component, key: &str, fallback: &str) -> String {
    match component.props.get(key) {
        Some(PropValue::String(text)) if !text.is_empty() => escape_text(text),
        Some(PropValue::Number(number)) => number.to_string(),
        _ => fallback.to_string(),
    }
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
        Some(PropValue::String(text)) => escape_text(text),
        Some(PropValue::Number(number)) => number.to_string(),
        _ => "0".to_string(),
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
