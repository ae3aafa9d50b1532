use crate::commands::check::load_project;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagekit_codegen::{
    generate as generate_code, markup_file_name, ExportScope, Framework, GenerateOptions, StyleDialect,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project file (defaults to the one named in the config)
    pub project: Option<String>,

    /// Target framework (react, html)
    #[arg(short, long)]
    pub framework: Option<Framework>,

    /// Stylesheet dialect (css, scss, tailwind)
    #[arg(short, long)]
    pub style: Option<StyleDialect>,

    /// Emit TypeScript (React only)
    #[arg(long)]
    pub typescript: bool,

    /// What to export (component, page, project)
    #[arg(short, long)]
    pub export: Option<ExportScope>,

    /// Page or component id to export
    #[arg(short, long)]
    pub target: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,
}

impl GenerateArgs {
    /// Command-line flags layered over the config file
    pub fn options(&self, config: &Config) -> GenerateOptions {
        let base = config.generate_options();
        GenerateOptions {
            framework: self.framework.unwrap_or(base.framework),
            style: self.style.unwrap_or(base.style),
            typescript: self.typescript || base.typescript,
            export: self.export.unwrap_or(base.export),
            target: self.target.clone(),
        }
    }
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = match args.project {
        Some(ref project) => PathBuf::from(cwd).join(project),
        None => config.get_project_path(cwd),
    };
    let options = args.options(&config);

    let project = load_project(&path)?;
    let code = generate_code(&project, &options)?;

    if args.stdout {
        println!("{}", code.markup);
        println!("{}", code.stylesheet);
        return Ok(());
    }

    println!("{}", "🔨 Generating code...".bright_blue().bold());

    let out_dir = match args.out_dir {
        Some(ref out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };
    fs::create_dir_all(&out_dir)?;

    let markup_name = markup_file_name(&project, &options)?;
    let stylesheet_name = stylesheet_file_name(&markup_name, &options);

    for (name, contents) in [(&markup_name, &code.markup), (&stylesheet_name, &code.stylesheet)] {
        let file = out_dir.join(name);
        fs::write(&file, contents)?;
        debug!(path = %file.display(), bytes = contents.len(), "Wrote file");
        println!("  {} {}", "✓".green(), display_path(&file, cwd));
    }

    println!();
    println!(
        "{} Generated {} {} ({})",
        "✅".green(),
        options.framework,
        options.export,
        options.style
    );

    Ok(())
}

/// HTML documents link `styles.css`; React files import a stylesheet named
/// after themselves.
fn stylesheet_file_name(markup_name: &str, options: &GenerateOptions) -> String {
    let extension = options.style.extension();
    match options.framework {
        Framework::Html => format!("styles.{}", extension),
        Framework::React => {
            let stem = Path::new(markup_name)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("App");
            format!("{}.{}", stem, extension)
        }
    }
}

fn display_path(file: &Path, cwd: &str) -> String {
    file.strip_prefix(cwd).unwrap_or(file).display().to_string()
}
