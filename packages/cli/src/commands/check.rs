use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagekit_model::{walk_component, walk_page, Component, Page, Project, Visitor};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Project file (defaults to the one named in the config)
    pub project: Option<String>,
}

/// Per-page tree statistics
#[derive(Debug, Default, PartialEq)]
pub struct PageSummary {
    pub components: usize,
    pub max_depth: usize,
    pub unknown_kinds: Vec<String>,
}

impl Visitor for PageSummary {
    fn visit_component(&mut self, component: &Component, depth: usize) {
        self.components += 1;
        self.max_depth = self.max_depth.max(depth + 1);
        if component.kind.is_custom() && !self.unknown_kinds.contains(&component.kind.to_string()) {
            self.unknown_kinds.push(component.kind.to_string());
        }
        walk_component(self, component, depth);
    }
}

pub fn summarize_page(page: &Page) -> PageSummary {
    let mut summary = PageSummary::default();
    walk_page(&mut summary, page);
    summary
}

pub fn check(args: CheckArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = match args.project {
        Some(ref project) => PathBuf::from(cwd).join(project),
        None => config.get_project_path(cwd),
    };

    let project = load_project(&path)?;

    println!(
        "{} {} ({} pages)",
        "✓".green(),
        project.name.bright_white().bold(),
        project.pages.len()
    );

    for page in &project.pages {
        let summary = summarize_page(page);
        println!(
            "  {} {} - {} components, depth {}",
            "•".bright_blue(),
            page.name,
            summary.components,
            summary.max_depth
        );
        for kind in &summary.unknown_kinds {
            println!(
                "    {} unknown component type '{}' renders as a placeholder",
                "⚠️".yellow(),
                kind
            );
        }
    }

    Ok(())
}

/// Read and validate a project file
pub fn load_project(path: &Path) -> Result<Project> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read project file {}", path.display()))?;
    let project = Project::from_json(&json)
        .with_context(|| format!("Invalid project file {}", path.display()))?;
    Ok(project)
}
