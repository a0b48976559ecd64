//! Keyword parser turning a free-text prompt into a `ThemePrompt`.
//!
//! Detection is plain substring matching on the lower-cased prompt, except
//! color aliases, which must appear as whole words. Each
//! catalog is walked in its declared order and the first entry with a
//! matching keyword wins; nothing here can fail, unmatched fields fall
//! back to the catalog defaults.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::catalog::{
    COLOR_SCHEMES, DEFAULT_COLOR, DEFAULT_INDUSTRY, DEFAULT_VIBE, INDUSTRY_PRESETS, VIBES,
    VISUAL_STYLE_PRESETS,
};
use super::model::{ThemePrompt, VisualStyle};
use crate::app::model::Feature;

/// Feature keywords, in detection order.
static FEATURE_KEYWORDS: &[(Feature, &[&str])] = &[
    (Feature::Payments, &["payment", "stripe", "checkout", "deposit"]),
    (Feature::Analytics, &["analytics", "tracking", "metrics", "insights"]),
];

static BUSINESS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)\b(?:called|named)\s+(.+?)(?:\s+(?:with|for|that|and|in|using|featuring)\b|[,.;!?]|$)",
    )
    .expect("business name pattern is valid")
});

/// Parse a prompt into industry, vibe, color and style.
pub fn parse_theme_prompt(text: &str) -> ThemePrompt {
    let lower = text.to_lowercase();

    let industry = detect_industry(&lower).unwrap_or_else(|| {
        debug!("No industry keyword in prompt, using '{}'", DEFAULT_INDUSTRY);
        DEFAULT_INDUSTRY
    });
    let primary_color = detect_color(&lower).unwrap_or(DEFAULT_COLOR);
    let visual_style = detect_style(&lower).unwrap_or(VisualStyle::MODERN);
    let vibe = detect_vibe(&lower).unwrap_or(DEFAULT_VIBE);

    ThemePrompt {
        industry: industry.to_string(),
        vibe: vibe.to_string(),
        primary_color: primary_color.to_string(),
        visual_style: visual_style.slug().to_string(),
    }
}

/// Scan the prompt for features that need deployment support.
pub fn detect_features(text: &str) -> Vec<Feature> {
    let lower = text.to_lowercase();
    FEATURE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(feature, _)| *feature)
        .collect()
}

/// Pull a business name out of "... called X with ..." style prompts.
pub fn extract_business_name(text: &str) -> Option<String> {
    let caps = BUSINESS_NAME.captures(text)?;
    let name = caps
        .get(1)?
        .as_str()
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '“' || c == '”')
        .trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn detect_industry(lower: &str) -> Option<&'static str> {
    INDUSTRY_PRESETS
        .iter()
        .find(|p| p.keywords.iter().any(|k| lower.contains(k)))
        .map(|p| p.slug)
}

fn detect_color(lower: &str) -> Option<&'static str> {
    COLOR_SCHEMES
        .iter()
        .find(|c| lower.contains(c.name) || c.aliases.iter().any(|a| contains_word(lower, a)))
        .map(|c| c.name)
}

/// Aliases like "sage" hide inside ordinary words, so they match whole words only.
fn contains_word(lower: &str, word: &str) -> bool {
    lower
        .split(|ch: char| !ch.is_alphanumeric())
        .any(|w| w == word)
}

fn detect_style(lower: &str) -> Option<VisualStyle> {
    VISUAL_STYLE_PRESETS
        .iter()
        .find(|p| p.keywords.iter().any(|k| lower.contains(k)))
        .map(|p| p.style)
}

fn detect_vibe(lower: &str) -> Option<&'static str> {
    VIBES.iter().copied().find(|v| lower.contains(v))
}
