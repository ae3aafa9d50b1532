use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagekit_codegen::{Framework, StyleDialect};
use pagekit_model::Project;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project name
    #[arg(short, long, default_value = "My Project")]
    pub name: String,

    /// Target framework (react, html)
    #[arg(long, default_value = "react")]
    pub framework: Framework,

    /// Stylesheet dialect (css, scss, tailwind)
    #[arg(long, default_value = "css")]
    pub style: StyleDialect,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagekit project...".bright_blue().bold());

    let config = Config {
        framework: args.framework,
        style: args.style,
        ..Config::default()
    };

    // Starter project, unless one is already there
    let project_path = config.get_project_path(cwd);
    if !project_path.exists() {
        let mut project = Project::starter();
        project.name = args.name.clone();
        fs::write(&project_path, project.to_json_pretty()?)
            .with_context(|| format!("Cannot write {}", project_path.display()))?;
        println!("  {} Created {}", "✓".green(), config.project);
    }

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pagekit check {}", config.project);
    println!("  2. Run: pagekit generate");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(force: bool) -> InitArgs {
        InitArgs {
            name: "Landing".to_string(),
            framework: Framework::Html,
            style: StyleDialect::Scss,
            force,
        }
    }

    #[test]
    fn test_init_writes_config_and_starter_project() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(args(false), &cwd).unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.framework, Framework::Html);
        assert_eq!(config.style, StyleDialect::Scss);

        let json = fs::read_to_string(dir.path().join("project.json")).unwrap();
        let project = Project::from_json(&json).unwrap();
        assert_eq!(project.name, "Landing");
        assert_eq!(project.pages.len(), 1);
        assert_eq!(project.pages[0].components.len(), 2);
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{}").unwrap();

        init(args(false), &cwd).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join(DEFAULT_CONFIG_NAME)).unwrap(),
            "{}"
        );
        assert!(!dir.path().join("project.json").exists());

        init(args(true), &cwd).unwrap();
        assert_eq!(Config::load(&cwd).unwrap().framework, Framework::Html);
    }
}
