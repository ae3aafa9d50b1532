use pagekit_compiler_css::StyleDialect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// React function components (JSX or TSX)
    #[default]
    React,
    /// Static HTML documents
    Html,
}

/// How much of the project to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    Component,
    Page,
    #[default]
    Project,
}

/// Generation options, as sent by the export dialog
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOptions {
    pub framework: Framework,
    pub style: StyleDialect,
    pub typescript: bool,
    pub export: ExportScope,

    /// Page id (page export) or component id (component export). Defaults to
    /// the first page, or the first root component of the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Framework::React => "react",
            Framework::Html => "html",
        })
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "react" => Ok(Framework::React),
            "html" => Ok(Framework::Html),
            other => Err(format!("Unknown framework: {}. Use: react or html", other)),
        }
    }
}

impl fmt::Display for ExportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportScope::Component => "component",
            ExportScope::Page => "page",
            ExportScope::Project => "project",
        })
    }
}

impl FromStr for ExportScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "component" => Ok(ExportScope::Component),
            "page" => Ok(ExportScope::Page),
            "project" => Ok(ExportScope::Project),
            other => Err(format!(
                "Unknown export scope: {}. Use: component, page, or project",
                other
            )),
        }
    }
}
