//! Theme domain model.
//!
//! `ThemePrompt` is what the prompt parser extracts from free text;
//! `ThemeConfig` is the compiled, fully populated theme every generator
//! consumes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured reading of a free-text prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePrompt {
    pub industry: String,
    pub vibe: String,
    pub primary_color: String,
    pub visual_style: String,
}

/// Non-maximalist styles. They share typography and asset guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardStyle {
    Minimalist,
    Modern,
    Corporate,
}

/// Visual style of a theme.
///
/// Typography and asset guidance only branch on `Maximalist` vs `Standard`;
/// the standard sub-style selects animation and spacing presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum VisualStyle {
    Maximalist,
    Standard(StandardStyle),
}

impl VisualStyle {
    pub const MODERN: Self = Self::Standard(StandardStyle::Modern);

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Maximalist => "maximalist",
            Self::Standard(StandardStyle::Minimalist) => "minimalist",
            Self::Standard(StandardStyle::Modern) => "modern",
            Self::Standard(StandardStyle::Corporate) => "corporate",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_lowercase().as_str() {
            "maximalist" => Some(Self::Maximalist),
            "minimalist" => Some(Self::Standard(StandardStyle::Minimalist)),
            "modern" => Some(Self::Standard(StandardStyle::Modern)),
            "corporate" => Some(Self::Standard(StandardStyle::Corporate)),
            _ => None,
        }
    }

    pub fn is_maximalist(&self) -> bool {
        matches!(self, Self::Maximalist)
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.slug())
    }
}

impl From<VisualStyle> for String {
    fn from(style: VisualStyle) -> Self {
        style.slug().to_string()
    }
}

impl TryFrom<String> for VisualStyle {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_slug(&value).ok_or_else(|| format!("unknown visual style '{}'", value))
    }
}

/// Compiled theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub industry: String,
    pub vibe: String,
    pub visual_style: VisualStyle,
    pub colors: ColorPalette,
    pub typography: Typography,
    pub animations: Animations,
    pub components: ComponentClasses,
    pub terminology: Terminology,
    pub decorative_elements: Vec<String>,
    /// Section padding classes.
    pub spacing: String,
}

/// The five swatches of a color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    /// Catalog name the swatches came from, e.g. `orange`.
    pub scheme: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub dark: String,
    pub darker: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
    pub heading_weight: u16,
    /// CSS `text-transform` for headings.
    pub heading_transform: String,
    pub letter_spacing: String,
    /// Tailwind size classes for the hero heading.
    pub heading_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animations {
    pub enabled: Vec<String>,
    pub effects: Vec<String>,
    /// Present only for styles with particles; absence is the signal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particle_system: Option<ParticleSystem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleSystem {
    pub count: u32,
    pub colors: Vec<String>,
}

/// Utility class strings for the generated components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentClasses {
    pub button: String,
    pub card: String,
    pub section: String,
    pub heading: String,
    pub input: String,
}

/// Industry words substituted for the generic booking vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminology {
    pub book: String,
    pub service: String,
    pub client: String,
    pub booking: String,
    pub schedule: String,
}

impl Terminology {
    /// Pairs of (generic word, themed word) checked by terminology audits.
    pub fn substitutions(&self) -> [(&'static str, &str); 4] {
        [
            ("book", self.book.as_str()),
            ("service", self.service.as_str()),
            ("client", self.client.as_str()),
            ("booking", self.booking.as_str()),
        ]
    }
}
