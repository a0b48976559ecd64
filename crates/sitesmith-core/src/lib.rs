//! Sitesmith Core Library
//!
//! Preset catalogs, prompt parsing, theme compilation and the application
//! model shared by the generators and the content auditor.

pub mod app;
pub mod config;
pub mod error;
pub mod theme;

pub use error::{SitesmithError, SitesmithResult};
pub use theme::model::{ThemeConfig, ThemePrompt, VisualStyle};
pub use theme::parser::{detect_features, extract_business_name, parse_theme_prompt};
pub use theme::generate_theme;
pub use app::model::{AppConfig, Feature};
