//! Sitesmith CLI
//!
//! Turns a one-line business description into a themed booking site and
//! audits site files for leftover template content.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing on stderr so stdout stays clean for `--json` output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "sitesmith=debug,sitesmith_core=debug,sitesmith_codegen=debug,sitesmith_audit=debug"
    } else {
        "sitesmith=info,sitesmith_core=info,sitesmith_codegen=info,sitesmith_audit=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
