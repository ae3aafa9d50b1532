//! # Pagekit Codegen
//!
//! Turns a project (or one page, or one component tree) into source text for
//! the selected framework, plus a stylesheet in the selected dialect.
//!
//! Output is a pure function of the inputs: no timestamps, no randomness.
//!
//! ```rust,ignore
//! use pagekit_codegen::{generate, GenerateOptions};
//!
//! let code = generate(&project, &GenerateOptions::default())?;
//! std::fs::write("App.jsx", code.markup)?;
//! ```

mod options;

pub use options::{ExportScope, Framework, GenerateOptions};
pub use pagekit_compiler_css::StyleDialect;

use pagekit_compiler_css::compile_stylesheet;
use pagekit_compiler_html as html;
use pagekit_compiler_react as react;
use pagekit_model::{find_component, Component, Page, Project};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodegenError {
    #[error("{scope} not found: {id}")]
    TargetNotFound { scope: ExportScope, id: String },

    #[error("Project has no pages")]
    NoPages,

    #[error("Page has no components: {0}")]
    EmptyPage(String),
}

/// Generated source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    pub markup: String,
    pub stylesheet: String,
}

/// Generate markup and stylesheet for `project`
pub fn generate(project: &Project, options: &GenerateOptions) -> Result<GeneratedCode, CodegenError> {
    let markup = match options.export {
        ExportScope::Project => match options.framework {
            Framework::React => react::compile_project(project, react_options(options)),
            Framework::Html => html::compile_project(project, html_options()),
        },
        ExportScope::Page => {
            let (index, page) = select_page(project, options.target.as_deref())?;
            match options.framework {
                Framework::React => react::compile_page(page, index, react_options(options)),
                Framework::Html => html::compile_page(page, index, html_options()),
            }
        }
        ExportScope::Component => {
            let component = select_component(project, options.target.as_deref())?;
            match options.framework {
                Framework::React => react::compile_component(component, react_options(options)),
                Framework::Html => html::compile_component(component, html_options()),
            }
        }
    };

    let stylesheet = compile_stylesheet(options.style);

    debug!(
        framework = %options.framework,
        style = %options.style,
        export = %options.export,
        markup_bytes = markup.len(),
        "Code generated"
    );

    Ok(GeneratedCode { markup, stylesheet })
}

/// File name the markup would be saved under
pub fn markup_file_name(project: &Project, options: &GenerateOptions) -> Result<String, CodegenError> {
    let react_ext = if options.typescript { "tsx" } else { "jsx" };

    let name = match (options.export, options.framework) {
        (ExportScope::Project, Framework::React) => format!("App.{}", react_ext),
        (ExportScope::Project, Framework::Html) => "index.html".to_string(),
        (ExportScope::Page, Framework::React) => {
            let (index, _) = select_page(project, options.target.as_deref())?;
            format!("Page{}.{}", index, react_ext)
        }
        (ExportScope::Page, Framework::Html) => {
            let (index, page) = select_page(project, options.target.as_deref())?;
            html::page_file_name(page, index)
        }
        (ExportScope::Component, framework) => {
            let component = select_component(project, options.target.as_deref())?;
            let name = react::component_name(&component.name);
            match framework {
                Framework::React => format!("{}.{}", name, react_ext),
                Framework::Html => format!("{}.html", name),
            }
        }
    };

    Ok(name)
}

fn react_options(options: &GenerateOptions) -> react::CompileOptions {
    react::CompileOptions {
        use_typescript: options.typescript,
        include_css_imports: true,
        stylesheet_extension: options.style.extension().to_string(),
    }
}

fn html_options() -> html::CompileOptions {
    html::CompileOptions::default()
}

fn select_page<'a>(project: &'a Project, target: Option<&str>) -> Result<(usize, &'a Page), CodegenError> {
    match target {
        Some(id) => project
            .pages
            .iter()
            .enumerate()
            .find(|(_, page)| page.id == id)
            .ok_or_else(|| CodegenError::TargetNotFound {
                scope: ExportScope::Page,
                id: id.to_string(),
            }),
        None => project.pages.first().map(|page| (0, page)).ok_or(CodegenError::NoPages),
    }
}

fn select_component<'a>(project: &'a Project, target: Option<&str>) -> Result<&'a Component, CodegenError> {
    match target {
        Some(id) => project
            .pages
            .iter()
            .find_map(|page| find_component(&page.components, id))
            .map(|component| component.as_ref())
            .ok_or_else(|| CodegenError::TargetNotFound {
                scope: ExportScope::Component,
                id: id.to_string(),
            }),
        None => {
            let page = project.pages.first().ok_or(CodegenError::NoPages)?;
            page.components
                .first()
                .map(|component| component.as_ref())
                .ok_or_else(|| CodegenError::EmptyPage(page.id.clone()))
        }
    }
}
