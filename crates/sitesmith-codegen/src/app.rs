//! Prompt to `AppConfig` orchestration.
//!
//! parser → theme compiler → business name → SEO → assets → content →
//! deployment. Every stage degrades to a named default, so generation
//! always succeeds and the same prompt always yields the same config.

use tracing::{debug, info};

use sitesmith_core::app::model::{AppConfig, Feature};
use sitesmith_core::theme::model::ThemePrompt;
use sitesmith_core::{detect_features, extract_business_name, generate_theme, parse_theme_prompt};

use crate::assets::generate_assets;
use crate::content::generate_content;
use crate::deployment::generate_deployment;
use crate::seo::generate_seo;
use crate::text::slugify;

/// Business name used when neither the prompt nor the industry supplies one.
pub const DEFAULT_BUSINESS_NAME: &str = "Professional Services";

static BUSINESS_NAMES: &[(&str, &str)] = &[
    ("mtg-tournaments", "Tournament Arena"),
    ("livestock", "Livestock Exchange"),
    ("fitness", "Fitness Studio"),
    ("beauty", "Beauty Studio"),
    ("healthcare", "Health Clinic"),
    ("education", "Learning Centre"),
    ("photography", "Photography Studio"),
];

/// Generate a complete app config from free text.
pub fn generate_app(text: &str) -> AppConfig {
    let prompt = parse_theme_prompt(text);
    let features = detect_features(text);
    let name = extract_business_name(text);
    generate_app_from_prompt(&prompt, name.as_deref(), &features)
}

/// Generate an app config from an already parsed prompt.
pub fn generate_app_from_prompt(
    prompt: &ThemePrompt,
    name: Option<&str>,
    features: &[Feature],
) -> AppConfig {
    let theme = generate_theme(prompt);

    let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(n) => n.to_string(),
        None => {
            let fallback = default_business_name(&theme.industry);
            debug!("No business name in prompt, using '{}'", fallback);
            fallback.to_string()
        }
    };
    let domain = format!("{}.com", slugify(&name));

    let seo = generate_seo(&theme, &name, &domain);
    let assets = generate_assets(&theme, &name);
    let content = generate_content(&theme, &name);
    let deployment = generate_deployment(&name, &domain, features);

    info!(
        "Generated app '{}' ({}, {}, {})",
        name, theme.industry, theme.colors.scheme, theme.visual_style
    );

    AppConfig {
        name,
        domain,
        theme,
        seo,
        assets,
        content,
        deployment,
    }
}

/// Industry-keyed fallback business name.
pub fn default_business_name(industry: &str) -> &'static str {
    BUSINESS_NAMES
        .iter()
        .find(|(slug, _)| *slug == industry)
        .map(|(_, name)| *name)
        .unwrap_or(DEFAULT_BUSINESS_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MTG_PROMPT: &str =
        "MTG tournament platform called Bosca's Slingers with epic warrior theme and orange colors";

    #[test]
    fn test_mtg_app() {
        let app = generate_app(MTG_PROMPT);

        assert_eq!(app.name, "Bosca's Slingers");
        assert_eq!(app.domain, "boscas-slingers.com");
        assert_eq!(app.theme.industry, "mtg-tournaments");
        assert_eq!(app.theme.typography.heading_font, "Cinzel");
        assert!(app.content.copy.hero.subheadline.contains("register your format"));
        assert_eq!(app.seo.canonical_url, "https://boscas-slingers.com");
        assert!(app.deployment.features.is_empty());
    }

    #[test]
    fn test_business_name_fallbacks() {
        let app = generate_app("cattle saleyard in green");
        assert_eq!(app.name, "Livestock Exchange");
        assert_eq!(app.domain, "livestock-exchange.com");

        let app = generate_app("");
        assert_eq!(app.name, DEFAULT_BUSINESS_NAME);
        assert_eq!(app.theme.industry, "consulting");
    }

    #[test]
    fn test_features_reach_deployment() {
        let app = generate_app("yoga studio called Still Water with stripe payments and analytics");
        assert_eq!(app.name, "Still Water");
        assert_eq!(app.deployment.features, vec![Feature::Payments, Feature::Analytics]);
        assert!(app.deployment.env_vars.contains_key("VITE_ANALYTICS_ID"));
    }

    #[test]
    fn test_blank_name_uses_fallback() {
        let prompt = parse_theme_prompt("dental clinic");
        let app = generate_app_from_prompt(&prompt, Some("   "), &[]);
        assert_eq!(app.name, "Health Clinic");
    }

    proptest! {
        #[test]
        fn prop_generate_app_is_deterministic(text in ".{0,160}") {
            prop_assert_eq!(generate_app(&text), generate_app(&text));
        }

        #[test]
        fn prop_generate_app_always_validates(text in ".{0,160}") {
            prop_assert!(generate_app(&text).validate().is_ok());
        }
    }
}
