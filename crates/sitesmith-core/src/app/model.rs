//! Generated application data types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::theme::model::ThemeConfig;

/// Everything needed to emit one themed site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub name: String,
    pub domain: String,
    pub theme: ThemeConfig,
    pub seo: SeoConfig,
    pub assets: AssetSuggestions,
    pub content: ContentStructure,
    pub deployment: DeploymentConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
    pub canonical_url: String,
    pub theme_color: String,
}

/// Checklist of images and brand guidance for a generated site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSuggestions {
    pub logo: AssetSpec,
    pub favicon: AssetSpec,
    pub og_image: AssetSpec,
    pub hero: AssetSpec,
    pub color_guidance: Vec<String>,
    pub typography_guidance: Vec<String>,
    /// Relative paths the site expects under `public/`.
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSpec {
    pub dimensions: String,
    pub format: String,
    pub guidance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStructure {
    pub pages: Vec<PageSpec>,
    pub copy: SiteCopy,
    pub forms: Vec<FormSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    pub path: String,
    pub title: String,
    pub sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCopy {
    pub hero: HeroCopy,
    pub about: SectionCopy,
    pub services: SectionCopy,
    pub booking: SectionCopy,
    pub contact: SectionCopy,
    pub footer: FooterCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub headline: String,
    pub subheadline: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCopy {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterCopy {
    pub tagline: String,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSpec {
    pub id: String,
    pub title: String,
    pub submit_label: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Select,
    Textarea,
}

/// Optional site capabilities detected in the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Payments,
    Analytics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    pub platform: String,
    pub region: String,
    pub build_command: String,
    pub output_dir: String,
    pub features: Vec<Feature>,
    /// Variable name to default value; secrets default to empty.
    pub env_vars: BTreeMap<String, String>,
}
