use pagekit_codegen::{ExportScope, Framework, GenerateOptions, StyleDialect};
use pagekit_editor::EditorConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagekit.config.json";

/// Pagekit configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Project file, relative to the config
    #[serde(default = "default_project")]
    pub project: String,

    /// Where generated files are written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default)]
    pub framework: Framework,

    #[serde(default)]
    pub style: StyleDialect,

    #[serde(default)]
    pub typescript: bool,

    #[serde(default)]
    pub export: ExportScope,

    /// History settings used by `pagekit apply`
    #[serde(default)]
    pub editor: EditorConfig,
}

fn default_project() -> String {
    "project.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to the project file
    pub fn get_project_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.project)
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }

    /// Generation options before any command-line overrides
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            framework: self.framework,
            style: self.style,
            typescript: self.typescript,
            export: self.export,
            target: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: default_project(),
            out_dir: default_out_dir(),
            framework: Framework::default(),
            style: StyleDialect::default(),
            typescript: false,
            export: ExportScope::default(),
            editor: EditorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "project": "site/project.json",
            "outDir": "build",
            "framework": "html",
            "style": "tailwind",
            "typescript": true,
            "export": "page",
            "editor": { "historyLimit": 20, "autoCheckpoint": true }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.project, "site/project.json");
        assert_eq!(config.out_dir, "build");
        assert_eq!(config.framework, Framework::Html);
        assert_eq!(config.style, StyleDialect::Tailwind);
        assert!(config.typescript);
        assert_eq!(config.export, ExportScope::Page);
        assert_eq!(config.editor.history_limit, 20);
        assert!(config.editor.auto_checkpoint);
    }

    #[test]
    fn test_default_config() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.project, "project.json");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.generate_options(), GenerateOptions::default());
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.get_project_path(&cwd), dir.path().join("project.json"));
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "outDir": "out", "style": "scss" }"#,
        )
        .unwrap();

        let cwd = dir.path().display().to_string();
        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.get_out_dir(&cwd), dir.path().join("out"));
        assert_eq!(config.style, StyleDialect::Scss);
        assert_eq!(config.framework, Framework::React);
    }
}
