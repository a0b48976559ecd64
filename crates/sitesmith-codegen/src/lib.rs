//! # Sitesmith Codegen
//!
//! Expands a compiled theme into a complete `AppConfig` (copy, SEO tags,
//! asset checklist, deployment settings) and renders that config into the
//! file tree of a themed site.

pub mod app;
pub mod assets;
pub mod content;
pub mod deployment;
pub mod files;
pub mod seo;
mod text;

pub use app::{default_business_name, generate_app, generate_app_from_prompt};
pub use assets::generate_assets;
pub use content::generate_content;
pub use deployment::generate_deployment;
pub use files::{FileStructure, generate_file_structure, write_file_structure};
pub use seo::generate_seo;
