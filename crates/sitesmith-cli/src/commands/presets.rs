//! Preset catalog listing.

use colored::Colorize;

use sitesmith_core::theme::catalog::{
    COLOR_SCHEMES, DEFAULT_COLOR, DEFAULT_INDUSTRY, INDUSTRY_PRESETS, VIBES,
    VISUAL_STYLE_PRESETS,
};
use sitesmith_core::theme::model::VisualStyle;

use crate::output::{pad_visual, truncate_visual};

/// Print the catalogs in detection order.
pub fn execute() {
    println!("{}", "Colors".bold());
    for scheme in COLOR_SCHEMES {
        let name = if scheme.name == DEFAULT_COLOR {
            format!("{} (default)", scheme.name)
        } else {
            scheme.name.to_string()
        };
        println!(
            "  {} {}  {}",
            pad_visual(&name, 16),
            scheme.primary.dimmed(),
            scheme.aliases.join(", ").dimmed()
        );
    }

    println!("\n{}", "Industries".bold());
    for preset in INDUSTRY_PRESETS {
        let name = if preset.slug == DEFAULT_INDUSTRY {
            format!("{} (default)", preset.slug)
        } else {
            preset.slug.to_string()
        };
        let t = &preset.terminology;
        println!(
            "  {} {} {} / {} / {}",
            pad_visual(&name, 24),
            "terms:".dimmed(),
            t.book,
            t.service,
            t.client
        );
        println!(
            "  {} {}",
            " ".repeat(24),
            truncate_visual(&preset.keywords.join(", "), 50).dimmed()
        );
    }

    println!("\n{}", "Styles".bold());
    for preset in VISUAL_STYLE_PRESETS {
        let name = if preset.style == VisualStyle::MODERN {
            format!("{} (default)", preset.style)
        } else {
            preset.style.to_string()
        };
        let particles = if preset.particle_count > 0 {
            format!(", {} particles", preset.particle_count)
        } else {
            String::new()
        };
        println!(
            "  {} {}{}",
            pad_visual(&name, 20),
            preset.animations.join(", "),
            particles.dimmed()
        );
    }

    println!("\n{} {}", "Vibes:".bold(), VIBES.join(", "));
}
