//! Static detection catalogs.
//!
//! All regexes compile once on first use and are shared process-wide.
//! Catalog order is the order issues are reported in.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{IssueType, Severity};

/// One content pattern with its classification.
pub struct ContentPattern {
    pub regex: Regex,
    pub severity: Severity,
    pub issue_type: IssueType,
    pub suggestion: &'static str,
    /// Industry whose own sites legitimately use the matched wording.
    pub exempt_industry: Option<&'static str>,
}

impl ContentPattern {
    fn except_for(mut self, industry: &'static str) -> Self {
        self.exempt_industry = Some(industry);
        self
    }

    /// Whether this pattern runs for a site with the given industry.
    pub fn applies_to(&self, industry: Option<&str>) -> bool {
        match (self.exempt_industry, industry) {
            (Some(exempt), Some(industry)) => exempt != industry,
            _ => true,
        }
    }
}

/// A tag every page must carry.
pub struct SeoRequirement {
    pub tag: &'static str,
    pub regex: Regex,
    pub suggestion: &'static str,
}

/// A generic word that themed sites usually replace.
pub struct TermPattern {
    pub word: &'static str,
    pub regex: Regex,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static audit pattern is valid")
}

fn content(
    pattern: &str,
    severity: Severity,
    issue_type: IssueType,
    suggestion: &'static str,
) -> ContentPattern {
    ContentPattern {
        regex: compile(pattern),
        severity,
        issue_type,
        suggestion,
        exempt_industry: None,
    }
}

pub static CONTENT_PATTERNS: LazyLock<Vec<ContentPattern>> = LazyLock::new(|| {
    use IssueType::{Placeholder, TemplateContent};
    use Severity::{Critical, High, Low, Medium};

    vec![
        // Leftovers from the site the templates were cut from
        content(
            r"(?i)\bclaire\s+hamilton\b",
            Critical,
            TemplateContent,
            "Replace the template owner's name with the business owner or team",
        ),
        content(
            r"(?i)\bhamilton\s+consulting\b",
            Critical,
            TemplateContent,
            "Replace the template business name with this site's name",
        ),
        content(
            r"(?i)\bclaire@[a-z0-9.-]+\.[a-z]{2,}\b",
            Critical,
            TemplateContent,
            "Replace the template email address with a real contact address",
        ),
        content(
            r"(?i)\blorem\s+ipsum\b",
            High,
            Placeholder,
            "Write real copy in place of lorem ipsum",
        ),
        content(
            r"\[(?:Your|Business|Company|Client)[^\]\n]*\]",
            High,
            Placeholder,
            "Fill in the bracketed placeholder",
        ),
        content(
            r"\{\{\s*[A-Za-z_][A-Za-z0-9_.]*\s*\}\}",
            High,
            Placeholder,
            "Substitute the unrendered template variable",
        ),
        content(
            r"\b(?:TODO|FIXME|XXX)\b",
            Medium,
            Placeholder,
            "Resolve the note before publishing",
        ),
        content(
            r"(?i)\b[a-z0-9._%+-]*@?example\.(?:com|org|net)\b",
            Medium,
            Placeholder,
            "Replace the example domain with the site's real domain",
        ),
        content(
            r"\(?\b555\)?[-.\s]\d{3}[-.\s]?\d{4}\b",
            Medium,
            Placeholder,
            "Replace the dummy phone number",
        ),
        content(
            r"(?i)\blivestock\b",
            Low,
            TemplateContent,
            "Check that livestock wording belongs on this site",
        )
        .except_for("livestock"),
    ]
});

pub static SEO_REQUIREMENTS: LazyLock<Vec<SeoRequirement>> = LazyLock::new(|| {
    vec![
        SeoRequirement {
            tag: "og:title",
            regex: compile(r#"(?i)<meta[^>]+property=["']og:title["']"#),
            suggestion: "Add <meta property=\"og:title\"> for social previews",
        },
        SeoRequirement {
            tag: "og:description",
            regex: compile(r#"(?i)<meta[^>]+property=["']og:description["']"#),
            suggestion: "Add <meta property=\"og:description\"> for social previews",
        },
        SeoRequirement {
            tag: "og:image",
            regex: compile(r#"(?i)<meta[^>]+property=["']og:image["']"#),
            suggestion: "Add <meta property=\"og:image\"> pointing at a 1200x630 image",
        },
        SeoRequirement {
            tag: "twitter:card",
            regex: compile(r#"(?i)<meta[^>]+name=["']twitter:card["']"#),
            suggestion: "Add <meta name=\"twitter:card\" content=\"summary_large_image\">",
        },
        SeoRequirement {
            tag: "description",
            regex: compile(r#"(?i)<meta[^>]+name=["']description["']"#),
            suggestion: "Add <meta name=\"description\"> with a one-sentence summary",
        },
    ]
});

pub static GENERIC_TERMS: LazyLock<Vec<TermPattern>> = LazyLock::new(|| {
    ["book", "service", "client", "booking"]
        .into_iter()
        .map(|word| TermPattern {
            word,
            regex: compile(&format!(r"(?i)\b{}\b", word)),
        })
        .collect()
});

/// Extensions that get the SEO tag check.
pub const SEO_EXTENSIONS: [&str; 2] = [".html", ".tsx"];

#[cfg(test)]
mod tests {
    use super::*;

    fn matching(text: &str) -> Vec<(Severity, IssueType)> {
        CONTENT_PATTERNS
            .iter()
            .filter(|p| p.regex.is_match(text))
            .map(|p| (p.severity, p.issue_type))
            .collect()
    }

    #[test]
    fn test_catalog_order_is_by_severity() {
        let severities: Vec<Severity> = CONTENT_PATTERNS.iter().map(|p| p.severity).collect();
        let mut sorted = severities.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(severities, sorted);
    }

    #[test]
    fn test_template_leftovers() {
        assert_eq!(matching("Claire Hamilton"), vec![(Severity::Critical, IssueType::TemplateContent)]);
        assert_eq!(matching("mail claire@hamilton.com.au"), vec![(Severity::Critical, IssueType::TemplateContent)]);
        assert_eq!(matching("Hamilton Consulting Group").len(), 1);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(matching("Lorem  ipsum dolor"), vec![(Severity::High, IssueType::Placeholder)]);
        assert_eq!(matching("Call [Your Phone Number]")[0].0, Severity::High);
        assert_eq!(matching("Hello {{ first_name }}")[0].0, Severity::High);
        assert_eq!(matching("// TODO wire up form")[0].0, Severity::Medium);
        assert_eq!(matching("hello@example.com")[0].0, Severity::Medium);
        assert_eq!(matching("(555) 123-4567")[0].0, Severity::Medium);
    }

    #[test]
    fn test_benign_text_does_not_match() {
        assert!(matching("style={{ left: `${i}%` }}").is_empty());
        assert!(matching("todo list of clients").is_empty());
        assert!(matching("#ea580c and 1200x630").is_empty());
    }

    #[test]
    fn test_industry_exemption() {
        let livestock = CONTENT_PATTERNS
            .iter()
            .find(|p| p.regex.is_match("livestock"))
            .unwrap();
        assert!(livestock.applies_to(None));
        assert!(livestock.applies_to(Some("fitness")));
        assert!(!livestock.applies_to(Some("livestock")));
        assert!(CONTENT_PATTERNS[0].applies_to(Some("livestock")));
    }

    #[test]
    fn test_seo_requirements() {
        let html = r#"<meta property="og:title" content="x" /><meta name='description' content="y">"#;
        let present: Vec<&str> = SEO_REQUIREMENTS
            .iter()
            .filter(|r| r.regex.is_match(html))
            .map(|r| r.tag)
            .collect();
        assert_eq!(present, vec!["og:title", "description"]);
    }

    #[test]
    fn test_generic_terms_are_whole_word() {
        let book = &GENERIC_TERMS[0];
        assert!(book.regex.is_match("Book now"));
        assert!(!book.regex.is_match("facebook"));
        // "booking" is its own term, not a "book" hit
        assert!(!book.regex.is_match("booking"));
    }
}
