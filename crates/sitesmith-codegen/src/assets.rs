//! Asset checklist generation.
//!
//! Guidance branches only on maximalist vs standard, mirroring the
//! typography switch in the theme compiler.

use sitesmith_core::app::model::{AssetSpec, AssetSuggestions};
use sitesmith_core::theme::model::{ThemeConfig, VisualStyle};

/// Suggest the images and brand guidance a generated site needs.
pub fn generate_assets(theme: &ThemeConfig, name: &str) -> AssetSuggestions {
    let colors = &theme.colors;
    let typo = &theme.typography;
    let decorative = theme.decorative_elements.join(", ");

    let (logo, hero, color_rule, type_rule) = match theme.visual_style {
        VisualStyle::Maximalist => (
            spec(
                "512x512",
                "SVG + PNG",
                format!("Bold emblem for {} built from {}; must hold up on dark backgrounds", name, decorative),
            ),
            spec(
                "1920x1080",
                "WebP",
                "Dramatic, high-contrast artwork split into foreground and background layers for parallax, with room for particle overlays".to_string(),
            ),
            format!("Use gradients from {} to {} on hero and call-to-action sections", colors.primary, colors.dark),
            format!("Set {} headings in uppercase with {} tracking", typo.heading_font, typo.letter_spacing),
        ),
        VisualStyle::Standard(_) => (
            spec(
                "512x512",
                "SVG + PNG",
                format!("Simple wordmark for {} that reads at 32px", name),
            ),
            spec(
                "1920x1080",
                "WebP",
                "Bright, uncluttered photograph with negative space on one side for the headline".to_string(),
            ),
            format!("Keep {} to accents and calls to action; let white space carry the layout", colors.primary),
            format!("Set {} headings in sentence case with {} tracking", typo.heading_font, typo.letter_spacing),
        ),
    };

    let mut files: Vec<String> = [
        "public/logo.svg",
        "public/logo.png",
        "public/favicon.ico",
        "public/apple-touch-icon.png",
        "public/og-image.png",
        "public/hero.webp",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    if theme.visual_style.is_maximalist() {
        files.push("public/hero-layer-back.webp".to_string());
        files.push("public/hero-layer-front.webp".to_string());
    }

    AssetSuggestions {
        logo,
        favicon: spec(
            "32x32, 180x180, 512x512",
            "ICO + PNG",
            format!("Logo mark only, {} on a transparent background", colors.primary),
        ),
        og_image: spec(
            "1200x630",
            "PNG",
            format!("{} name and tagline over {} with the logo in a corner", name, colors.darker),
        ),
        hero,
        color_guidance: vec![
            format!("Primary {}: buttons, links and highlights", colors.primary),
            format!("Secondary {}: hover states and secondary buttons", colors.secondary),
            format!("Accent {}: badges, icons and focus rings", colors.accent),
            format!("Dark {}: header, footer and body text on light backgrounds", colors.dark),
            format!("Darker {}: page backgrounds and overlays", colors.darker),
            color_rule,
        ],
        typography_guidance: vec![
            format!("Headings: {} at weight {}", typo.heading_font, typo.heading_weight),
            format!("Body: {} at weight 400, 16px minimum", typo.body_font),
            type_rule,
        ],
        files,
    }
}

fn spec(dimensions: &str, format: &str, guidance: String) -> AssetSpec {
    AssetSpec {
        dimensions: dimensions.to_string(),
        format: format.to_string(),
        guidance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitesmith_core::{generate_theme, parse_theme_prompt};

    #[test]
    fn test_maximalist_guidance() {
        let theme = generate_theme(&parse_theme_prompt("epic mtg tournament in orange"));
        let assets = generate_assets(&theme, "Bosca's Slingers");

        assert!(assets.logo.guidance.contains("mana-symbols"));
        assert!(assets.hero.guidance.contains("parallax"));
        assert!(assets.files.contains(&"public/hero-layer-front.webp".to_string()));
        assert!(assets.typography_guidance[2].contains("uppercase"));
        assert_eq!(assets.og_image.dimensions, "1200x630");
    }

    #[test]
    fn test_standard_guidance() {
        let theme = generate_theme(&parse_theme_prompt("calm minimal yoga studio in teal"));
        let assets = generate_assets(&theme, "Still Water");

        assert!(assets.logo.guidance.starts_with("Simple wordmark for Still Water"));
        assert_eq!(assets.files.len(), 6);
        assert!(assets.color_guidance[0].contains("#0d9488"));
        assert!(assets.typography_guidance[2].contains("sentence case"));
    }
}
