//! Site generation command.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::Input;
use std::path::{Path, PathBuf};
use tracing::info;

use sitesmith_codegen::{generate_app, generate_file_structure, write_file_structure};
use sitesmith_core::app::APP_CONFIG_FILE;
use sitesmith_core::config::SitesmithConfig;

use crate::output;

#[derive(Args)]
pub struct GenerateArgs {
    /// Business description, e.g. "yoga studio called Still Water in teal"
    pub prompt: Option<String>,

    /// Output directory (defaults to ./<site-name>)
    #[arg(short, long, env = "SITESMITH_OUTPUT_DIR")]
    pub out: Option<PathBuf>,

    /// Show what would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the generated config as JSON
    #[arg(long)]
    pub json: bool,

    /// Write into a non-empty output directory
    #[arg(long)]
    pub force: bool,
}

pub async fn execute(args: GenerateArgs, project_dir: &Path, config: &SitesmithConfig) -> Result<()> {
    let prompt = match args.prompt {
        Some(p) => p,
        None => Input::<String>::new()
            .with_prompt("Describe the business")
            .interact_text()
            .context("Failed to read prompt")?,
    };
    if prompt.trim().is_empty() {
        bail!("Prompt is empty");
    }

    let app = generate_app(&prompt);
    let files = generate_file_structure(&app)?;

    if args.json {
        println!("{}", app.to_json()?);
        if args.dry_run {
            return Ok(());
        }
    }

    let site_slug = app.domain.trim_end_matches(".com").to_string();
    let out_dir = resolve_out_dir(args.out, config, project_dir, &site_slug);

    if args.dry_run {
        output::print_app_summary(&app);
        output::print_file_list(&out_dir, files.paths(), "Would write");
        return Ok(());
    }

    if !args.force && is_non_empty_dir(&out_dir).await? {
        bail!(
            "{} is not empty (use --force to write anyway)",
            out_dir.display()
        );
    }

    let written = write_file_structure(&files, &out_dir)?;
    let config_path = out_dir.join(APP_CONFIG_FILE);
    tokio::fs::write(&config_path, app.to_json()?)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    info!("Wrote {} files to {}", written.len() + 1, out_dir.display());

    if !args.json {
        output::print_app_summary(&app);
        let paths = files.paths().chain(std::iter::once(APP_CONFIG_FILE));
        output::print_file_list(&out_dir, paths, "Wrote");
        println!(
            "\n{} Run {} to check the copy before publishing.",
            "Next:".bold(),
            format!("sitesmith audit {}", out_dir.display()).cyan()
        );
    }

    Ok(())
}

/// `--out`, else the configured output directory joined with the site slug,
/// else the site slug under the project directory.
fn resolve_out_dir(
    out: Option<PathBuf>,
    config: &SitesmithConfig,
    project_dir: &Path,
    site_slug: &str,
) -> PathBuf {
    let dir = match (out, &config.generate.output_dir) {
        (Some(out), _) => out,
        (None, Some(base)) => base.join(site_slug),
        (None, None) => PathBuf::from(site_slug),
    };
    if dir.is_absolute() {
        dir
    } else {
        project_dir.join(dir)
    }
}

async fn is_non_empty_dir(path: &Path) -> Result<bool> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Ok(false);
    }
    let mut entries = tokio::fs::read_dir(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(entries.next_entry().await?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_out_dir_precedence() {
        let project = Path::new("/work");
        let mut config = SitesmithConfig::default();

        assert_eq!(
            resolve_out_dir(None, &config, project, "still-water"),
            PathBuf::from("/work/still-water")
        );

        config.generate.output_dir = Some(PathBuf::from("sites"));
        assert_eq!(
            resolve_out_dir(None, &config, project, "still-water"),
            PathBuf::from("/work/sites/still-water")
        );

        assert_eq!(
            resolve_out_dir(Some(PathBuf::from("/tmp/out")), &config, project, "still-water"),
            PathBuf::from("/tmp/out")
        );
    }

    #[tokio::test]
    async fn test_is_non_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_non_empty_dir(&dir.path().join("missing")).await.unwrap());
        assert!(!is_non_empty_dir(dir.path()).await.unwrap());

        std::fs::write(dir.path().join("index.html"), "x").unwrap();
        assert!(is_non_empty_dir(dir.path()).await.unwrap());
    }
}
