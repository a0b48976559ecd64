//! Centralized error types for Sitesmith.

use thiserror::Error;

/// Main error type for Sitesmith operations.
#[derive(Error, Debug)]
pub enum SitesmithError {
    #[error("Invalid app config: {0}")]
    InvalidAppConfig(String),

    #[error("Refusing to write outside the output directory: {0}")]
    UnsafePath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Sitesmith operations.
pub type SitesmithResult<T> = Result<T, SitesmithError>;

impl SitesmithError {
    /// Create an invalid app config error.
    pub fn invalid_app_config(msg: impl Into<String>) -> Self {
        Self::InvalidAppConfig(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
