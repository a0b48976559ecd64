//! Deployment settings.

use std::collections::BTreeMap;

use sitesmith_core::app::model::{DeploymentConfig, Feature};

pub const PLATFORM: &str = "digitalocean-app-platform";
pub const REGION: &str = "syd1";

/// Static platform defaults plus env vars for the detected features.
pub fn generate_deployment(name: &str, domain: &str, features: &[Feature]) -> DeploymentConfig {
    let mut features = features.to_vec();
    features.sort();
    features.dedup();

    let mut env_vars = BTreeMap::new();
    env_vars.insert("VITE_SITE_NAME".to_string(), name.to_string());
    env_vars.insert("VITE_SITE_URL".to_string(), format!("https://{}", domain));

    for feature in &features {
        match feature {
            Feature::Payments => {
                env_vars.insert("VITE_STRIPE_PUBLISHABLE_KEY".to_string(), String::new());
                env_vars.insert("STRIPE_SECRET_KEY".to_string(), String::new());
            }
            Feature::Analytics => {
                env_vars.insert("VITE_ANALYTICS_ID".to_string(), String::new());
            }
        }
    }

    DeploymentConfig {
        platform: PLATFORM.to_string(),
        region: REGION.to_string(),
        build_command: "npm run build".to_string(),
        output_dir: "dist".to_string(),
        features,
        env_vars,
    }
}

/// Whether an env var must be stored as a secret rather than a build value.
pub fn is_secret(key: &str) -> bool {
    !key.starts_with("VITE_")
}
