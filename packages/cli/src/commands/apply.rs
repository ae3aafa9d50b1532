use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use pagekit_editor::{Action, AutoSave, EditorStore, FileStorage};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON file holding an array of editor actions
    pub actions: String,

    /// Project file (defaults to the one named in the config)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Stop at the first rejected action
    #[arg(long)]
    pub strict: bool,
}

/// Replay editor actions against a project file, saving after every change
pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let project_path = match args.project {
        Some(ref project) => PathBuf::from(cwd).join(project),
        None => config.get_project_path(cwd),
    };

    let actions_path = PathBuf::from(cwd).join(&args.actions);
    let json = fs::read_to_string(&actions_path)
        .with_context(|| format!("Cannot read actions file {}", actions_path.display()))?;
    let actions: Vec<Action> = serde_json::from_str(&json)
        .with_context(|| format!("Invalid actions file {}", actions_path.display()))?;

    let storage = FileStorage::new(&project_path);
    let mut store = EditorStore::new(config.editor.clone());
    if !store.load_from(&storage)? {
        return Err(anyhow!("Project file does not exist: {}", project_path.display()));
    }
    store.subscribe(AutoSave::new(storage));

    println!(
        "{}",
        format!("🔧 Applying {} actions...", actions.len()).bright_blue().bold()
    );

    let mut rejected = 0;
    for action in actions {
        let name = action.name();
        match store.dispatch(action) {
            Ok(_) => println!("  {} {}", "✓".green(), name),
            Err(err) => {
                rejected += 1;
                eprintln!("  {} {} - {}", "✗".red(), name, err.to_string().red());
                if args.strict {
                    return Err(anyhow!("Stopped at rejected action {}", name));
                }
            }
        }
    }

    println!();
    if rejected == 0 {
        println!("{} Project saved to {}", "✅".green(), project_path.display());
    } else {
        println!(
            "{} Project saved to {}, {} actions rejected",
            "⚠️".yellow(),
            project_path.display(),
            rejected
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_model::Project;

    fn setup(actions: &str) -> (tempfile::TempDir, String, String) {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::starter();
        let page_id = project.pages[0].id.clone();
        fs::write(dir.path().join("project.json"), project.to_json_pretty().unwrap()).unwrap();
        fs::write(
            dir.path().join("actions.json"),
            actions.replace("PAGE_ID", &page_id),
        )
        .unwrap();
        let cwd = dir.path().display().to_string();
        (dir, cwd, page_id)
    }

    fn args(strict: bool) -> ApplyArgs {
        ApplyArgs {
            actions: "actions.json".to_string(),
            project: None,
            strict,
        }
    }

    #[test]
    fn test_apply_saves_edits() {
        let (dir, cwd, _) = setup(
            r#"[
                {"type": "SET_CURRENT_PAGE", "payload": {"pageId": "PAGE_ID"}},
                {"type": "ADD_COMPONENT", "payload": {"component": {"id": "x1", "type": "badge", "name": "Badge", "props": {"count": 3}}}},
                {"type": "UPDATE_COMPONENT", "payload": {"id": "x1", "props": {"count": 4}}}
            ]"#,
        );

        apply(args(false), &cwd).unwrap();

        let json = fs::read_to_string(dir.path().join("project.json")).unwrap();
        let project = Project::from_json(&json).unwrap();
        let badge = project.pages[0].find_component("x1").unwrap();
        assert_eq!(badge.props.get("count").and_then(|count| count.as_u64()), Some(4));
    }

    #[test]
    fn test_apply_strict_stops_on_rejection() {
        let (dir, cwd, _) = setup(
            r#"[
                {"type": "SET_CURRENT_PAGE", "payload": {"pageId": "PAGE_ID"}},
                {"type": "DELETE_COMPONENT", "payload": "ghost"},
                {"type": "ADD_COMPONENT", "payload": {"component": {"id": "late", "type": "text", "name": "Text", "props": {}}}}
            ]"#,
        );

        assert!(apply(args(true), &cwd).is_err());

        let json = fs::read_to_string(dir.path().join("project.json")).unwrap();
        let project = Project::from_json(&json).unwrap();
        assert!(project.pages[0].find_component("late").is_none());

        // Lenient mode skips the rejected action and keeps going
        apply(args(false), &cwd).unwrap();
        let json = fs::read_to_string(dir.path().join("project.json")).unwrap();
        let project = Project::from_json(&json).unwrap();
        assert!(project.pages[0].find_component("late").is_some());
    }

    #[test]
    fn test_apply_without_project_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("actions.json"), "[]").unwrap();
        let cwd = dir.path().display().to_string();

        let err = apply(args(false), &cwd).unwrap_err();
        assert!(err.to_string().starts_with("Project file does not exist"));
    }
}
