//! SEO tag generation.
//!
//! Industry-keyed description and keyword tables with a generic fallback.
//! Descriptions are templates where `{name}` is replaced by the business
//! name.

use sitesmith_core::app::model::SeoConfig;
use sitesmith_core::theme::model::ThemeConfig;

struct SeoPreset {
    industry: &'static str,
    tagline: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
}

static SEO_PRESETS: &[SeoPreset] = &[
    SeoPreset {
        industry: "mtg-tournaments",
        tagline: "Competitive MTG Tournaments",
        description: "{name} runs competitive Magic: The Gathering tournaments. Register your format, check the event calendar and battle for glory.",
        keywords: &["mtg tournaments", "magic the gathering events", "competitive mtg", "trading card game"],
    },
    SeoPreset {
        industry: "livestock",
        tagline: "Livestock Sales and Reservations",
        description: "{name} connects producers with buyers. Reserve your mob, follow the sale calendar and manage every reservation online.",
        keywords: &["livestock sales", "cattle", "sheep", "saleyard reservations"],
    },
    SeoPreset {
        industry: "fitness",
        tagline: "Classes and Training",
        description: "{name} has a class for every member. Reserve your spot and plan your week with our timetable.",
        keywords: &["fitness classes", "gym", "personal training", "group training"],
    },
    SeoPreset {
        industry: "beauty",
        tagline: "Beauty Treatments",
        description: "{name} offers relaxing treatments for every guest. Make an appointment online in seconds.",
        keywords: &["beauty salon", "treatments", "hair", "nails"],
    },
    SeoPreset {
        industry: "healthcare",
        tagline: "Trusted Care",
        description: "{name} provides trusted care for every patient. Schedule a treatment and manage appointments online.",
        keywords: &["clinic", "healthcare", "appointments", "treatment"],
    },
    SeoPreset {
        industry: "education",
        tagline: "Lessons and Tutoring",
        description: "{name} helps every student learn with confidence. Enrol in a lesson and view the timetable online.",
        keywords: &["tutoring", "lessons", "education", "enrolment"],
    },
    SeoPreset {
        industry: "photography",
        tagline: "Photography Sessions",
        description: "{name} captures the moments that matter. Check the calendar and reserve a session today.",
        keywords: &["photographer", "photo sessions", "portraits", "events"],
    },
];

const GENERIC_TAGLINE: &str = "Professional Services";
const GENERIC_DESCRIPTION: &str =
    "{name} makes it easy to book professional services online. Check availability and secure your spot in minutes.";
const GENERIC_KEYWORDS: &[&str] = &["online booking", "professional services", "appointments"];

pub const OG_IMAGE_PATH: &str = "/og-image.png";
pub const TWITTER_CARD: &str = "summary_large_image";

/// Build the SEO tag set for a site.
pub fn generate_seo(theme: &ThemeConfig, name: &str, domain: &str) -> SeoConfig {
    let preset = SEO_PRESETS.iter().find(|p| p.industry == theme.industry);

    let (tagline, description, keywords) = match preset {
        Some(p) => (p.tagline, p.description, p.keywords),
        None => (GENERIC_TAGLINE, GENERIC_DESCRIPTION, GENERIC_KEYWORDS),
    };

    let title = format!("{} | {}", name, tagline);
    let description = description.replace("{name}", name);

    let mut keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
    keywords.push(name.to_lowercase());

    SeoConfig {
        og_title: title.clone(),
        og_description: description.clone(),
        title,
        description,
        keywords,
        og_image: OG_IMAGE_PATH.to_string(),
        twitter_card: TWITTER_CARD.to_string(),
        canonical_url: format!("https://{}", domain),
        theme_color: theme.colors.primary.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitesmith_core::{generate_theme, parse_theme_prompt};

    #[test]
    fn test_industry_description() {
        let theme = generate_theme(&parse_theme_prompt("mtg tournament store in red"));
        let seo = generate_seo(&theme, "Bosca's Slingers", "boscas-slingers.com");

        assert_eq!(seo.title, "Bosca's Slingers | Competitive MTG Tournaments");
        assert!(seo.description.starts_with("Bosca's Slingers runs competitive"));
        assert_eq!(seo.canonical_url, "https://boscas-slingers.com");
        assert_eq!(seo.theme_color, "#dc2626");
        assert!(seo.keywords.contains(&"bosca's slingers".to_string()));
    }

    #[test]
    fn test_generic_fallback() {
        let theme = generate_theme(&parse_theme_prompt("something unusual"));
        let seo = generate_seo(&theme, "Professional Services", "professional-services.com");

        assert!(seo.description.starts_with("Professional Services makes it easy"));
        assert_eq!(seo.keywords[0], "online booking");
        assert_eq!(seo.og_title, seo.title);
        assert_eq!(seo.og_image, "/og-image.png");
        assert_eq!(seo.twitter_card, "summary_large_image");
    }
}
