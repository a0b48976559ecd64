//! Theme preview command.

use anyhow::{Context, Result};
use clap::Args;

use sitesmith_core::{generate_theme, parse_theme_prompt};

use crate::output;

#[derive(Args)]
pub struct ThemeArgs {
    /// Business description to compile
    pub prompt: String,

    /// Print the parsed prompt and theme as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ThemeArgs) -> Result<()> {
    let prompt = parse_theme_prompt(&args.prompt);
    let theme = generate_theme(&prompt);

    if args.json {
        let value = serde_json::json!({
            "prompt": prompt,
            "theme": theme,
        });
        let json = serde_json::to_string_pretty(&value).context("Failed to serialize theme")?;
        println!("{}", json);
    } else {
        output::print_theme(&prompt, &theme);
    }

    Ok(())
}
