//! File structure emission.
//!
//! Renders an `AppConfig` into a fixed set of site files by plain string
//! interpolation. Nothing is written here except by `write_file_structure`,
//! which the CLI calls to persist an emitted tree.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use sitesmith_core::app::model::{AppConfig, AssetSpec};
use sitesmith_core::SitesmithError;

use crate::content::{booking_path, services_path};
use crate::deployment::is_secret;
use crate::text::{escape_html, slugify};

pub const INDEX_HTML: &str = "index.html";
pub const TAILWIND_CONFIG: &str = "tailwind.config.js";
pub const THEME_TS: &str = "src/config/theme.ts";
pub const CONTENT_TS: &str = "src/config/content.ts";
pub const HOME_TSX: &str = "src/pages/Home.tsx";
pub const ENV_EXAMPLE: &str = ".env.example";
pub const APP_SPEC: &str = ".do/app.yaml";
pub const ASSETS_MD: &str = "ASSETS.md";

/// Relative path → file content for one emitted site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileStructure {
    files: BTreeMap<String, String>,
}

impl FileStructure {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.files
    }

    fn insert(&mut self, path: &str, content: String) {
        self.files.insert(path.to_string(), content);
    }
}

/// Render every site file for `config`.
///
/// A config missing required fields is rejected as a whole; no partial
/// structure is returned.
pub fn generate_file_structure(config: &AppConfig) -> Result<FileStructure> {
    config.validate()?;

    let mut files = FileStructure::default();
    files.insert(INDEX_HTML, render_index_html(config));
    files.insert(TAILWIND_CONFIG, render_tailwind_config(config));
    files.insert(THEME_TS, render_theme_ts(config)?);
    files.insert(CONTENT_TS, render_content_ts(config)?);
    files.insert(HOME_TSX, render_home_tsx(config));
    files.insert(ENV_EXAMPLE, render_env_example(config)?);
    files.insert(APP_SPEC, render_app_spec(config)?);
    files.insert(ASSETS_MD, render_assets_md(config));

    debug!("Emitted {} files for {}", files.len(), config.domain);
    Ok(files)
}

/// Write an emitted structure under `root`, returning the written paths.
pub fn write_file_structure(files: &FileStructure, root: &Path) -> Result<Vec<PathBuf>> {
    // Validate everything before touching the disk.
    for path in files.paths() {
        ensure_relative(path)?;
    }

    let mut written = Vec::with_capacity(files.len());
    for (rel, content) in files.iter() {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

fn ensure_relative(path: &str) -> Result<()> {
    let safe = !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if safe {
        Ok(())
    } else {
        Err(SitesmithError::UnsafePath(path.to_string()).into())
    }
}

fn render_index_html(config: &AppConfig) -> String {
    let seo = &config.seo;
    let typo = &config.theme.typography;
    let font_family = typo.heading_font.replace(' ', "+");

    let mut html = String::new();
    html.push_str("<!doctype html>\n<html lang=\"en\">\n  <head>\n");
    html.push_str("    <meta charset=\"UTF-8\" />\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n");
    html.push_str(&format!("    <title>{}</title>\n", escape_html(&seo.title)));
    html.push_str(&format!("    <meta name=\"description\" content=\"{}\" />\n", escape_html(&seo.description)));
    html.push_str(&format!("    <meta name=\"keywords\" content=\"{}\" />\n", escape_html(&seo.keywords.join(", "))));
    html.push_str(&format!("    <meta name=\"theme-color\" content=\"{}\" />\n", seo.theme_color));
    html.push_str(&format!("    <link rel=\"canonical\" href=\"{}\" />\n", seo.canonical_url));
    html.push_str("    <meta property=\"og:type\" content=\"website\" />\n");
    html.push_str(&format!("    <meta property=\"og:url\" content=\"{}\" />\n", seo.canonical_url));
    html.push_str(&format!("    <meta property=\"og:title\" content=\"{}\" />\n", escape_html(&seo.og_title)));
    html.push_str(&format!("    <meta property=\"og:description\" content=\"{}\" />\n", escape_html(&seo.og_description)));
    html.push_str(&format!("    <meta property=\"og:image\" content=\"{}{}\" />\n", seo.canonical_url, seo.og_image));
    html.push_str(&format!("    <meta name=\"twitter:card\" content=\"{}\" />\n", seo.twitter_card));
    html.push_str(&format!("    <meta name=\"twitter:title\" content=\"{}\" />\n", escape_html(&seo.og_title)));
    html.push_str("    <link rel=\"icon\" href=\"/favicon.ico\" />\n");
    html.push_str("    <link rel=\"apple-touch-icon\" href=\"/apple-touch-icon.png\" />\n");
    html.push_str("    <link rel=\"preconnect\" href=\"https://fonts.googleapis.com\" />\n");
    html.push_str(&format!(
        "    <link href=\"https://fonts.googleapis.com/css2?family={}:wght@{}&family={}:wght@400;600&display=swap\" rel=\"stylesheet\" />\n",
        font_family,
        typo.heading_weight,
        typo.body_font.replace(' ', "+")
    ));
    html.push_str("  </head>\n");
    html.push_str("  <body class=\"font-body antialiased\">\n");
    html.push_str("    <div id=\"root\"></div>\n");
    html.push_str("    <script type=\"module\" src=\"/src/main.tsx\"></script>\n");
    html.push_str("  </body>\n</html>\n");
    html
}

/// Keyframes and animation shorthand for each named animation.
fn animation_definition(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        "float" => Some((
            "{ '0%, 100%': { transform: 'translateY(0)' }, '50%': { transform: 'translateY(-12px)' } }",
            "float 6s ease-in-out infinite",
        )),
        "glow" => Some((
            "{ '0%, 100%': { opacity: '0.6' }, '50%': { opacity: '1' } }",
            "glow 3s ease-in-out infinite",
        )),
        "pulse" => Some((
            "{ '0%, 100%': { transform: 'scale(1)' }, '50%': { transform: 'scale(1.05)' } }",
            "pulse 2s ease-in-out infinite",
        )),
        "shimmer" => Some((
            "{ '0%': { backgroundPosition: '-200% 0' }, '100%': { backgroundPosition: '200% 0' } }",
            "shimmer 4s linear infinite",
        )),
        "fade-in" => Some((
            "{ '0%': { opacity: '0' }, '100%': { opacity: '1' } }",
            "fade-in 0.6s ease-out both",
        )),
        "slide-up" => Some((
            "{ '0%': { opacity: '0', transform: 'translateY(24px)' }, '100%': { opacity: '1', transform: 'translateY(0)' } }",
            "slide-up 0.6s ease-out both",
        )),
        _ => None,
    }
}

fn font_fallback(font: &str) -> &'static str {
    match font {
        "Cinzel" => "serif",
        _ => "sans-serif",
    }
}

fn render_tailwind_config(config: &AppConfig) -> String {
    let colors = &config.theme.colors;
    let typo = &config.theme.typography;

    let mut js = String::new();
    js.push_str("/** @type {import('tailwindcss').Config} */\n");
    js.push_str("export default {\n");
    js.push_str("  content: ['./index.html', './src/**/*.{ts,tsx}'],\n");
    js.push_str("  theme: {\n    extend: {\n");

    js.push_str("      colors: {\n        primary: {\n");
    js.push_str(&format!("          DEFAULT: '{}',\n", colors.primary));
    js.push_str(&format!("          secondary: '{}',\n", colors.secondary));
    js.push_str(&format!("          accent: '{}',\n", colors.accent));
    js.push_str(&format!("          dark: '{}',\n", colors.dark));
    js.push_str(&format!("          darker: '{}',\n", colors.darker));
    js.push_str("        },\n      },\n");

    js.push_str("      fontFamily: {\n");
    js.push_str(&format!(
        "        heading: ['{}', '{}'],\n",
        typo.heading_font,
        font_fallback(&typo.heading_font)
    ));
    js.push_str(&format!(
        "        body: ['{}', '{}'],\n",
        typo.body_font,
        font_fallback(&typo.body_font)
    ));
    js.push_str("      },\n");

    let defined: Vec<(&str, (&str, &str))> = config
        .theme
        .animations
        .enabled
        .iter()
        .filter_map(|name| animation_definition(name).map(|def| (name.as_str(), def)))
        .collect();

    js.push_str("      keyframes: {\n");
    for (name, (frames, _)) in &defined {
        js.push_str(&format!("        '{}': {},\n", name, frames));
    }
    js.push_str("      },\n");
    js.push_str("      animation: {\n");
    for (name, (_, shorthand)) in &defined {
        js.push_str(&format!("        '{}': '{}',\n", name, shorthand));
    }
    js.push_str("      },\n");

    js.push_str("    },\n  },\n  plugins: [],\n};\n");
    js
}

fn render_theme_ts(config: &AppConfig) -> Result<String> {
    let json = serde_json::to_string_pretty(&config.theme).context("Failed to serialize theme")?;

    let mut ts = String::new();
    ts.push_str(&format!("// Theme for {}.\n", config.name));
    ts.push_str(&format!("export const theme = {} as const;\n\n", json));
    ts.push_str("export type Theme = typeof theme;\n");
    Ok(ts)
}

const CONTENT_TYPES: &str = r#"export type FieldKind = 'text' | 'email' | 'tel' | 'date' | 'select' | 'textarea';

export interface PageSpec {
  path: string;
  title: string;
  sections: string[];
}

export interface SectionCopy {
  title: string;
  body: string;
}

export interface FormField {
  name: string;
  label: string;
  kind: FieldKind;
  required: boolean;
  options?: string[];
}

export interface FormSpec {
  id: string;
  title: string;
  submitLabel: string;
  fields: FormField[];
}

export interface SiteContent {
  pages: PageSpec[];
  copy: {
    hero: { headline: string; subheadline: string; cta: string };
    about: SectionCopy;
    services: SectionCopy;
    booking: SectionCopy;
    contact: SectionCopy;
    footer: { tagline: string; copyright: string };
  };
  forms: FormSpec[];
}

export interface SeoTags {
  title: string;
  description: string;
  keywords: string[];
  ogTitle: string;
  ogDescription: string;
  ogImage: string;
  twitterCard: string;
  canonicalUrl: string;
  themeColor: string;
}
"#;

fn render_content_ts(config: &AppConfig) -> Result<String> {
    let content =
        serde_json::to_string_pretty(&config.content).context("Failed to serialize content")?;
    let seo = serde_json::to_string_pretty(&config.seo).context("Failed to serialize SEO tags")?;

    let mut ts = String::new();
    ts.push_str(CONTENT_TYPES);
    ts.push('\n');
    ts.push_str(&format!("export const siteName = {};\n\n", json_string(&config.name)?));
    ts.push_str(&format!("export const siteContent: SiteContent = {};\n\n", content));
    ts.push_str(&format!("export const seo: SeoTags = {};\n", seo));
    Ok(ts)
}

fn render_home_tsx(config: &AppConfig) -> String {
    let theme = &config.theme;
    let c = &theme.components;

    let mut tsx = String::new();
    tsx.push_str("import { Helmet } from 'react-helmet-async';\n");
    tsx.push_str("import { seo, siteContent } from '../config/content';\n\n");
    tsx.push_str("export default function Home() {\n");
    tsx.push_str("  const { hero, services, about } = siteContent.copy;\n\n");
    tsx.push_str("  return (\n    <>\n");

    tsx.push_str("      <Helmet>\n");
    tsx.push_str("        <title>{seo.title}</title>\n");
    tsx.push_str("        <meta name=\"description\" content={seo.description} />\n");
    tsx.push_str("        <meta property=\"og:title\" content={seo.ogTitle} />\n");
    tsx.push_str("        <meta property=\"og:description\" content={seo.ogDescription} />\n");
    tsx.push_str("        <meta property=\"og:image\" content={seo.canonicalUrl + seo.ogImage} />\n");
    tsx.push_str("        <meta name=\"twitter:card\" content={seo.twitterCard} />\n");
    tsx.push_str("      </Helmet>\n\n");

    if let Some(particles) = &theme.animations.particle_system {
        let colors = particles
            .colors
            .iter()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<_>>()
            .join(", ");
        tsx.push_str("      <div aria-hidden className=\"pointer-events-none fixed inset-0 overflow-hidden\">\n");
        tsx.push_str(&format!(
            "        {{Array.from({{ length: {} }}).map((_, i) => (\n",
            particles.count
        ));
        tsx.push_str("          <span\n");
        tsx.push_str("            key={i}\n");
        tsx.push_str("            className=\"absolute h-2 w-2 rounded-full animate-float\"\n");
        tsx.push_str(&format!(
            "            style={{{{ left: `${{(i * 37) % 100}}%`, top: `${{(i * 53) % 100}}%`, background: [{}][i % {}], animationDelay: `${{i * 0.4}}s` }}}}\n",
            colors,
            particles.colors.len().max(1)
        ));
        tsx.push_str("          />\n");
        tsx.push_str("        ))}\n");
        tsx.push_str("      </div>\n\n");
    }

    tsx.push_str(&format!("      <section className=\"{} text-center\">\n", c.section));
    tsx.push_str(&format!(
        "        <h1 className=\"font-heading {}\">{{hero.headline}}</h1>\n",
        c.heading
    ));
    tsx.push_str("        <p className=\"mx-auto mt-6 max-w-2xl text-lg\">{hero.subheadline}</p>\n");
    tsx.push_str(&format!(
        "        <a href=\"{}\" className=\"mt-10 inline-block {}\">\n",
        booking_path(theme),
        c.button
    ));
    tsx.push_str("          {hero.cta}\n");
    tsx.push_str("        </a>\n");
    tsx.push_str("      </section>\n\n");

    tsx.push_str(&format!("      <section id=\"{}\" className=\"{}\">\n", services_path(theme).trim_start_matches('/'), c.section));
    tsx.push_str(&format!("        <div className=\"mx-auto max-w-4xl {}\">\n", c.card));
    tsx.push_str("          <h2 className=\"font-heading text-3xl\">{services.title}</h2>\n");
    tsx.push_str("          <p className=\"mt-4\">{services.body}</p>\n");
    tsx.push_str("        </div>\n");
    tsx.push_str("      </section>\n\n");

    tsx.push_str(&format!("      <section id=\"about\" className=\"{}\">\n", c.section));
    tsx.push_str("        <h2 className=\"font-heading text-3xl\">{about.title}</h2>\n");
    tsx.push_str("        <p className=\"mt-4 max-w-2xl\">{about.body}</p>\n");
    tsx.push_str("      </section>\n");

    tsx.push_str("    </>\n  );\n}\n");
    tsx
}

/// Values are double-quoted so a `#` in a business name is not read as a comment.
fn render_env_example(config: &AppConfig) -> Result<String> {
    let mut env = String::new();
    env.push_str(&format!("# Environment for {}\n", config.name.replace('\n', " ")));
    env.push_str("# Copy to .env and fill in empty values.\n");
    for (key, value) in &config.deployment.env_vars {
        env.push_str(&format!("{}={}\n", key, json_string(value)?));
    }
    Ok(env)
}

fn render_app_spec(config: &AppConfig) -> Result<String> {
    let deploy = &config.deployment;

    let mut yaml = String::new();
    yaml.push_str(&format!("name: {}\n", slugify(&config.name)));
    yaml.push_str(&format!("region: {}\n", deploy.region));
    yaml.push_str("domains:\n");
    yaml.push_str(&format!("  - domain: {}\n", config.domain));
    yaml.push_str("    type: PRIMARY\n");
    yaml.push_str("static_sites:\n");
    yaml.push_str("  - name: web\n");
    yaml.push_str("    environment_slug: node-js\n");
    yaml.push_str(&format!("    build_command: {}\n", deploy.build_command));
    yaml.push_str(&format!("    output_dir: {}\n", deploy.output_dir));
    yaml.push_str("    envs:\n");
    for (key, value) in &deploy.env_vars {
        yaml.push_str(&format!("      - key: {}\n", key));
        // JSON strings are valid double-quoted YAML scalars
        yaml.push_str(&format!("        value: {}\n", json_string(value)?));
        if is_secret(key) {
            yaml.push_str("        type: SECRET\n");
            yaml.push_str("        scope: RUN_TIME\n");
        } else {
            yaml.push_str("        scope: BUILD_TIME\n");
        }
    }
    Ok(yaml)
}

fn render_assets_md(config: &AppConfig) -> String {
    let assets = &config.assets;

    let mut md = String::new();
    md.push_str(&format!("# Assets for {}\n\n", config.name));

    md.push_str("## Images\n\n");
    md.push_str("| Asset | Dimensions | Format | Guidance |\n");
    md.push_str("|-------|------------|--------|----------|\n");
    let rows: [(&str, &AssetSpec); 4] = [
        ("Logo", &assets.logo),
        ("Favicon", &assets.favicon),
        ("Social image", &assets.og_image),
        ("Hero", &assets.hero),
    ];
    for (label, spec) in rows {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            label, spec.dimensions, spec.format, spec.guidance
        ));
    }
    md.push('\n');

    md.push_str("## Colors\n\n");
    for line in &assets.color_guidance {
        md.push_str(&format!("- {}\n", line));
    }
    md.push('\n');

    md.push_str("## Typography\n\n");
    for line in &assets.typography_guidance {
        md.push_str(&format!("- {}\n", line));
    }
    md.push('\n');

    md.push_str("## Checklist\n\n");
    for file in &assets.files {
        md.push_str(&format!("- [ ] `{}`\n", file));
    }
    md
}

fn json_string(value: &str) -> Result<String> {
    serde_json::to_string(value).context("Failed to quote string")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::generate_app;
    use proptest::prelude::*;
    use sitesmith_audit::{IssueType, Severity, audit_files, SourceFile};
    use sitesmith_core::theme::catalog::INDUSTRY_PRESETS;

    const MTG_PROMPT: &str =
        "MTG tournament platform called Bosca's Slingers with epic warrior theme and orange colors";

    const EXPECTED_PATHS: [&str; 8] = [
        ".do/app.yaml",
        ".env.example",
        "ASSETS.md",
        "index.html",
        "src/config/content.ts",
        "src/config/theme.ts",
        "src/pages/Home.tsx",
        "tailwind.config.js",
    ];

    #[test]
    fn test_fixed_file_set() {
        let files = generate_file_structure(&generate_app(MTG_PROMPT)).unwrap();
        let paths: Vec<&str> = files.paths().collect();
        assert_eq!(paths, EXPECTED_PATHS);
        for path in files.paths() {
            assert!(Path::new(path).is_relative(), "{} is not relative", path);
        }
    }

    #[test]
    fn test_index_html_content() {
        let files = generate_file_structure(&generate_app(MTG_PROMPT)).unwrap();
        let html = files.get(INDEX_HTML).unwrap();

        assert!(html.contains("<title>Bosca's Slingers | Competitive MTG Tournaments</title>"));
        assert!(html.contains("property=\"og:image\" content=\"https://boscas-slingers.com/og-image.png\""));
        assert!(html.contains("family=Cinzel:wght@900"));
        assert!(html.contains("name=\"theme-color\" content=\"#ea580c\""));
    }

    #[test]
    fn test_tailwind_config() {
        let files = generate_file_structure(&generate_app(MTG_PROMPT)).unwrap();
        let js = files.get(TAILWIND_CONFIG).unwrap();

        assert!(js.contains("DEFAULT: '#ea580c'"));
        assert!(js.contains("heading: ['Cinzel', 'serif']"));
        assert!(js.contains("'float': 'float 6s ease-in-out infinite'"));
    }

    #[test]
    fn test_particles_only_for_maximalist() {
        let max = generate_file_structure(&generate_app(MTG_PROMPT)).unwrap();
        assert!(max.get(HOME_TSX).unwrap().contains("Array.from({ length: 12 })"));

        let calm = generate_file_structure(&generate_app("calm minimal yoga studio")).unwrap();
        assert!(!calm.get(HOME_TSX).unwrap().contains("Array.from"));
    }

    #[test]
    fn test_env_and_app_spec() {
        let app = generate_app("salon called Gloss with stripe checkout");
        let files = generate_file_structure(&app).unwrap();

        let env = files.get(ENV_EXAMPLE).unwrap();
        assert!(env.contains("VITE_SITE_URL=\"https://gloss.com\"\n"));
        assert!(env.contains("STRIPE_SECRET_KEY=\"\"\n"));

        let yaml = files.get(APP_SPEC).unwrap();
        assert!(yaml.contains("name: gloss\n"));
        assert!(yaml.contains("- key: STRIPE_SECRET_KEY\n        value: \"\"\n        type: SECRET"));
        assert!(yaml.contains("value: \"Gloss\""));
    }

    #[test]
    fn test_env_values_are_quoted() {
        let mut app = generate_app(MTG_PROMPT);
        app.deployment
            .env_vars
            .insert("VITE_SITE_NAME".to_string(), "Slingers #1 \"Arena\"".to_string());
        let files = generate_file_structure(&app).unwrap();

        let env = files.get(ENV_EXAMPLE).unwrap();
        assert!(env.contains("VITE_SITE_NAME=\"Slingers #1 \\\"Arena\\\"\"\n"));
        assert!(env.lines().filter(|l| !l.starts_with('#')).all(|l| l.contains("=\"")));
    }

    #[test]
    fn test_content_ts_embeds_copy() {
        let files = generate_file_structure(&generate_app(MTG_PROMPT)).unwrap();
        let ts = files.get(CONTENT_TS).unwrap();

        assert!(ts.contains("export const siteContent: SiteContent = {"));
        assert!(ts.contains("register your format"));
        assert!(ts.contains("\"submitLabel\": \"Register Now\""));
        assert!(ts.contains("export const siteName = \"Bosca's Slingers\";"));
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let mut app = generate_app(MTG_PROMPT);
        app.name = String::new();
        assert!(generate_file_structure(&app).is_err());

        let mut app = generate_app(MTG_PROMPT);
        app.content.pages.clear();
        assert!(generate_file_structure(&app).is_err());
    }

    #[test]
    fn test_emitted_tree_passes_audit() {
        let mut prompts = vec![MTG_PROMPT.to_string()];
        prompts.extend(INDUSTRY_PRESETS.iter().map(|p| format!("{} business", p.keywords[0])));

        for prompt in &prompts {
            let app = generate_app(prompt);
            let files = generate_file_structure(&app).unwrap();
            let sources: Vec<SourceFile> = files
                .iter()
                .map(|(path, content)| SourceFile::new(path, content))
                .collect();

            let report = audit_files(&sources, Some(&app.theme));
            for result in &report.results {
                assert!(
                    result.issues.iter().all(|i| i.severity < Severity::High
                        && i.issue_type != IssueType::TemplateContent),
                    "{} ({}): {:?}",
                    result.file,
                    app.theme.industry,
                    result.issues
                );
                assert!(!result.issues.iter().any(|i| i.issue_type == IssueType::MissingSeo));
            }
        }
    }

    #[test]
    fn test_write_file_structure() {
        let dir = tempfile::tempdir().unwrap();
        let files = generate_file_structure(&generate_app(MTG_PROMPT)).unwrap();

        let written = write_file_structure(&files, dir.path()).unwrap();
        assert_eq!(written.len(), files.len());
        let html = std::fs::read_to_string(dir.path().join(INDEX_HTML)).unwrap();
        assert_eq!(html, files.get(INDEX_HTML).unwrap());
        assert!(dir.path().join(".do/app.yaml").exists());
    }

    #[test]
    fn test_write_rejects_escaping_paths() {
        let dir = tempfile::tempdir().unwrap();
        for bad in ["../outside.txt", "/etc/passwd", ""] {
            let mut files = FileStructure::default();
            files.insert(bad, "x".to_string());
            assert!(write_file_structure(&files, dir.path()).is_err(), "{:?} accepted", bad);
        }
        assert!(!dir.path().join("../outside.txt").exists());
    }

    proptest! {
        #[test]
        fn prop_file_paths_are_stable(text in ".{0,120}") {
            let first: Vec<String> = generate_file_structure(&generate_app(&text))
                .unwrap()
                .paths()
                .map(String::from)
                .collect();
            let second: Vec<String> = generate_file_structure(&generate_app(&text))
                .unwrap()
                .paths()
                .map(String::from)
                .collect();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), EXPECTED_PATHS.len());
        }
    }
}
