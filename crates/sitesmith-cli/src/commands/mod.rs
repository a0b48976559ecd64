//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sitesmith_core::config::SitesmithConfig;

pub mod audit;
pub mod generate;
pub mod presets;
pub mod theme;

/// Sitesmith - themed booking sites from a one-line prompt
#[derive(Parser)]
#[command(name = "sitesmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a site from a prompt
    Generate(generate::GenerateArgs),

    /// Show the theme a prompt compiles to
    Theme(theme::ThemeArgs),

    /// Audit site files for template leftovers, placeholders and missing SEO
    Audit(audit::AuditArgs),

    /// List the color, industry and style presets
    Presets,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to resolve current directory")?,
        };
        let config = SitesmithConfig::load(&project_dir)?;

        match self.command {
            Commands::Generate(args) => generate::execute(args, &project_dir, &config).await,
            Commands::Theme(args) => theme::execute(args),
            Commands::Audit(args) => audit::execute(args, &project_dir, &config).await,
            Commands::Presets => {
                presets::execute();
                Ok(())
            }
        }
    }
}
