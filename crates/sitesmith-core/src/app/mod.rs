//! Application model.
//!
//! `AppConfig` aggregates everything generated for one site. It is the
//! boundary type between the generators, the file emitter and the CLI,
//! which persists it as `sitesmith.json` next to the emitted tree.

pub mod model;

use std::path::Path;

use crate::error::{SitesmithError, SitesmithResult};
use model::AppConfig;

/// File name the CLI stores the app config under.
pub const APP_CONFIG_FILE: &str = "sitesmith.json";

impl AppConfig {
    /// Check the fields the file emitter interpolates unconditionally.
    pub fn validate(&self) -> SitesmithResult<()> {
        if self.name.trim().is_empty() {
            return Err(SitesmithError::invalid_app_config("name is empty"));
        }
        if self.domain.trim().is_empty() {
            return Err(SitesmithError::invalid_app_config("domain is empty"));
        }
        if self.content.pages.is_empty() {
            return Err(SitesmithError::invalid_app_config("content has no pages"));
        }
        if self.content.forms.is_empty() {
            return Err(SitesmithError::invalid_app_config("content has no forms"));
        }
        Ok(())
    }

    pub fn to_json(&self) -> SitesmithResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a previously saved `sitesmith.json`.
    pub fn load(path: &Path) -> SitesmithResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
