//! Content audit command.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use ignore::WalkBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use sitesmith_audit::{audit_files, SourceFile};
use sitesmith_core::app::APP_CONFIG_FILE;
use sitesmith_core::config::{AuditConfig, SitesmithConfig};
use sitesmith_core::{generate_theme, parse_theme_prompt, AppConfig, ThemeConfig};

use crate::output;

#[derive(Args)]
pub struct AuditArgs {
    /// Directory or file to audit (defaults to the project directory)
    pub path: Option<PathBuf>,

    /// Check terminology against the theme this prompt compiles to
    #[arg(long)]
    pub prompt: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Also save the report as markdown
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Exit with an error when any critical issue is found
    #[arg(long)]
    pub strict: bool,
}

pub async fn execute(args: AuditArgs, project_dir: &Path, config: &SitesmithConfig) -> Result<()> {
    let root = match args.path {
        Some(p) if p.is_absolute() => p,
        Some(p) => project_dir.join(p),
        None => project_dir.to_path_buf(),
    };
    if !root.exists() {
        bail!("{} does not exist", root.display());
    }

    let theme = resolve_theme(args.prompt.as_deref(), &root)?;
    let paths = collect_files(&root, &config.audit);
    if paths.is_empty() {
        println!("{}", "No matching files found.".dimmed());
        return Ok(());
    }

    let sources = read_sources(&root, &paths).await;
    let report = audit_files(&sources, theme.as_ref());

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        output::print_audit_report(&report);
    }

    if let Some(report_path) = &args.report {
        let markdown = format!(
            "{}_Generated {} from {}_\n",
            report.to_markdown(),
            chrono::Local::now().format("%Y-%m-%d %H:%M"),
            root.display()
        );
        tokio::fs::write(report_path, markdown)
            .await
            .with_context(|| format!("Failed to write {}", report_path.display()))?;
        if !args.json {
            println!("\n{} {}", "Report saved to".dimmed(), report_path.display());
        }
    }

    if args.strict && report.has_critical() {
        bail!(
            "Audit found {} critical issue(s)",
            report.summary.critical
        );
    }

    Ok(())
}

/// Theme from `--prompt`, else from a generated site's saved config.
fn resolve_theme(prompt: Option<&str>, root: &Path) -> Result<Option<ThemeConfig>> {
    if let Some(prompt) = prompt {
        return Ok(Some(generate_theme(&parse_theme_prompt(prompt))));
    }

    let saved = if root.is_dir() {
        root.join(APP_CONFIG_FILE)
    } else {
        return Ok(None);
    };
    if !saved.exists() {
        return Ok(None);
    }

    let app = AppConfig::load(&saved)
        .with_context(|| format!("Failed to load {}", saved.display()))?;
    debug!("Using theme from {}", saved.display());
    Ok(Some(app.theme))
}

/// Files under `root` that pass the extension, exclusion and size filters.
///
/// Honors `.gitignore` files even outside a git repository.
fn collect_files(root: &Path, config: &AuditConfig) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let filter = config.clone();
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .require_git(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir && filter.is_excluded(&entry.file_name().to_string_lossy()))
        })
        .build();

    let mut files = Vec::new();
    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() || !config.accepts(path) {
            continue;
        }
        match path.metadata() {
            Ok(meta) if meta.len() > config.max_file_size => {
                debug!("Skipping {} ({} bytes)", path.display(), meta.len());
            }
            Ok(_) => files.push(path.to_path_buf()),
            Err(e) => warn!("Cannot stat {}: {}", path.display(), e),
        }
    }
    files.sort();
    files
}

async fn read_sources(root: &Path, paths: &[PathBuf]) -> Vec<SourceFile> {
    let progress = ProgressBar::new(paths.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {bar:30.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let display = display_path(root, path);
        progress.set_message(display.clone());
        match tokio::fs::read_to_string(path).await {
            Ok(content) => sources.push(SourceFile::new(display, content)),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    sources
}

/// Path relative to the audit root, or the file name when auditing one file.
fn display_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    if rel.as_os_str().is_empty() {
        path.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    } else {
        rel.to_string_lossy().replace('\\', "/")
    }
}
