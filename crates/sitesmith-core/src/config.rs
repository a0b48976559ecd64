//! Layered configuration.
//!
//! Resolution order: built-in defaults, then the global file
//! (`<config dir>/sitesmith/config.toml`), then the project file
//! (`<project>/sitesmith.toml`). Later layers override individual keys of
//! earlier ones; missing files are skipped.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SitesmithError, SitesmithResult};

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "sitesmith.toml";

/// Full Sitesmith configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SitesmithConfig {
    pub generate: GenerateConfig,
    pub audit: AuditConfig,
}

/// Settings for `sitesmith generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GenerateConfig {
    /// Default output directory; `./<domain-slug>` when unset.
    pub output_dir: Option<PathBuf>,
}

/// Settings for `sitesmith audit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// File extensions (without the dot) that are scanned.
    pub extensions: Vec<String>,
    /// Directory names skipped while walking.
    pub exclude: Vec<String>,
    /// Files larger than this many bytes are skipped.
    pub max_file_size: u64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            extensions: ["html", "tsx", "ts", "jsx", "js", "md", "json"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude: ["node_modules", "dist", ".git", "build"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_file_size: 1024 * 1024,
        }
    }
}

impl AuditConfig {
    /// Whether a path has one of the configured extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(false, |ext| {
                self.extensions.iter().any(|x| x.eq_ignore_ascii_case(ext))
            })
    }

    /// Whether a directory name is excluded from the walk.
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|x| x == dir_name)
    }
}

impl SitesmithConfig {
    /// Load the global and project layers for `project_dir`.
    pub fn load(project_dir: &Path) -> SitesmithResult<Self> {
        let mut layers = Vec::new();
        if let Some(global) = global_config_path() {
            layers.push(global);
        }
        layers.push(project_dir.join(PROJECT_CONFIG_FILE));
        Self::load_layers(&layers)
    }

    /// Merge the given files, in order, over the defaults.
    pub fn load_layers(paths: &[PathBuf]) -> SitesmithResult<Self> {
        let mut merged = toml::Value::try_from(Self::default())
            .map_err(|e| SitesmithError::config(format!("Failed to serialize defaults: {}", e)))?;

        for path in paths {
            if !path.exists() {
                continue;
            }
            debug!("Loading config layer from: {}", path.display());
            let raw = std::fs::read_to_string(path)?;
            let layer: toml::Value = toml::from_str(&raw)?;
            merge_values(&mut merged, layer);
        }

        let config = Self::deserialize(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no command can work with.
    pub fn validate(&self) -> SitesmithResult<()> {
        if self.audit.extensions.is_empty() {
            return Err(SitesmithError::config("audit.extensions must not be empty"));
        }
        if self.audit.max_file_size == 0 {
            return Err(SitesmithError::config("audit.max_file_size must be greater than 0"));
        }
        Ok(())
    }
}

/// Path to the global config file, if the platform has a config directory.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sitesmith").join("config.toml"))
}

/// Recursively overlay `layer` onto `base`; tables merge, everything else replaces.
fn merge_values(base: &mut toml::Value, layer: toml::Value) {
    match (base, layer) {
        (toml::Value::Table(base), toml::Value::Table(layer)) => {
            for (key, value) in layer {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, layer) => *base = layer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = SitesmithConfig::load_layers(&[dir.path().join("missing.toml")]).unwrap();
        assert_eq!(config, SitesmithConfig::default());
        assert_eq!(config.audit.max_file_size, 1024 * 1024);
        assert!(config.generate.output_dir.is_none());
    }

    #[test]
    fn test_project_layer_overrides_single_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "[audit]\nmax_file_size = 2048\n").unwrap();

        let config = SitesmithConfig::load_layers(&[path]).unwrap();
        assert_eq!(config.audit.max_file_size, 2048);
        // Untouched keys keep their defaults
        assert_eq!(config.audit.extensions, AuditConfig::default().extensions);
    }

    #[test]
    fn test_later_layer_wins() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        std::fs::write(&global, "[generate]\noutput_dir = \"out-global\"\n").unwrap();
        std::fs::write(&project, "[generate]\noutput_dir = \"out-project\"\n").unwrap();

        let config = SitesmithConfig::load_layers(&[global, project]).unwrap();
        assert_eq!(config.generate.output_dir, Some(PathBuf::from("out-project")));
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "[audit]\nextensions = []\n").unwrap();

        let err = SitesmithConfig::load_layers(&[path]).unwrap_err();
        assert!(matches!(err, SitesmithError::Config(_)));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&path, "[audit\n").unwrap();

        let err = SitesmithConfig::load_layers(&[path]).unwrap_err();
        assert!(matches!(err, SitesmithError::TomlParse(_)));
    }

    #[test]
    fn test_accepts_and_excludes() {
        let audit = AuditConfig::default();
        assert!(audit.accepts(Path::new("src/pages/Home.tsx")));
        assert!(audit.accepts(Path::new("INDEX.HTML")));
        assert!(!audit.accepts(Path::new("logo.png")));
        assert!(!audit.accepts(Path::new("Makefile")));
        assert!(audit.is_excluded("node_modules"));
        assert!(!audit.is_excluded("src"));
    }
}
