//! Per-file scanning and report aggregation.

use tracing::{debug, info};

use sitesmith_core::theme::model::ThemeConfig;

use crate::model::{
    AuditIssue, AuditReport, AuditResult, AuditStatus, AuditSummary, IssueType, Severity,
    SourceFile,
};
use crate::patterns::{CONTENT_PATTERNS, GENERIC_TERMS, SEO_EXTENSIONS, SEO_REQUIREMENTS};

pub const RECOMMEND_CRITICAL: &str =
    "Remove leftover template content (names, emails, business names) before publishing";
pub const RECOMMEND_SEO: &str =
    "Add the missing Open Graph, Twitter card and meta description tags to every page";
pub const RECOMMEND_PLACEHOLDERS: &str =
    "Replace placeholder text, template variables and dummy contact details with real content";
pub const RECOMMEND_TERMINOLOGY: &str =
    "Swap generic booking words for the site's own terminology";

/// Audit one file's text.
///
/// The SEO tag check runs only for `.html` and `.tsx` paths; the
/// terminology diff runs only when a theme is given.
pub fn audit_file(path: &str, content: &str, theme: Option<&ThemeConfig>) -> AuditResult {
    let mut issues = Vec::new();
    let mut locator = Locator::new(content);

    let industry = theme.map(|t| t.industry.as_str());
    for pattern in CONTENT_PATTERNS.iter().filter(|p| p.applies_to(industry)) {
        for m in pattern.regex.find_iter(content) {
            issues.push(locator.issue(
                m.start(),
                m.as_str(),
                pattern.issue_type,
                pattern.severity,
                pattern.suggestion.to_string(),
            ));
        }
    }

    let lower_path = path.to_lowercase();
    if SEO_EXTENSIONS.iter().any(|ext| lower_path.ends_with(ext)) {
        for req in SEO_REQUIREMENTS.iter() {
            if !req.regex.is_match(content) {
                issues.push(AuditIssue {
                    issue_type: IssueType::MissingSeo,
                    severity: Severity::High,
                    line: None,
                    column: None,
                    found: format!("missing {}", req.tag),
                    suggestion: req.suggestion.to_string(),
                    context: None,
                });
            }
        }
    }

    if let Some(theme) = theme {
        issues.extend(terminology_issues(&mut locator, theme));
    }

    let result = AuditResult::new(path, issues);
    debug!(
        "Audited {}: {} issues, score {}",
        result.file,
        result.issues.len(),
        result.score
    );
    result
}

/// Generic words used where the theme has its own term.
///
/// Whole-word matching is lexical, so prose that uses "book" in an
/// unrelated sense is flagged too.
fn terminology_issues(locator: &mut Locator<'_>, theme: &ThemeConfig) -> Vec<AuditIssue> {
    let substitutions = theme.terminology.substitutions();
    let content = locator.content;
    let mut issues = Vec::new();

    for term in GENERIC_TERMS.iter() {
        let Some((_, themed)) = substitutions.iter().find(|(generic, _)| *generic == term.word)
        else {
            continue;
        };
        if themed.eq_ignore_ascii_case(term.word) {
            continue;
        }
        for m in term.regex.find_iter(content) {
            issues.push(locator.issue(
                m.start(),
                m.as_str(),
                IssueType::OutdatedTerminology,
                Severity::Low,
                format!("Use \"{}\" instead of \"{}\"", themed, term.word),
            ));
        }
    }
    issues
}

/// Lines longer than this keep only a window around the match as context.
const CONTEXT_WIDTH: usize = 120;

/// Line, column and context lookup for one file's text.
///
/// Line starts are indexed once per file. Columns are counted forward from
/// the previous lookup while offsets increase, as they do within one
/// `find_iter`, so a long single-line file is walked once per pattern.
struct Locator<'a> {
    content: &'a str,
    line_starts: Vec<usize>,
    // (line, byte offset, column) of the last lookup
    cursor: (usize, usize, usize),
}

impl<'a> Locator<'a> {
    fn new(content: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(content.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            content,
            line_starts,
            cursor: (0, 0, 1),
        }
    }

    /// 1-based line and character column of a byte offset.
    fn locate(&mut self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let (last_line, last_offset, last_column) = self.cursor;
        let column = if last_line == line && last_offset <= offset {
            last_column + self.content[last_offset..offset].chars().count()
        } else {
            self.content[self.line_starts[line - 1]..offset].chars().count() + 1
        };
        self.cursor = (line, offset, column);
        (line, column)
    }

    /// The trimmed line, or a window of it around `start..end` when the line is long.
    fn context(&self, line: usize, start: usize, end: usize) -> String {
        let line_start = self.line_starts[line - 1];
        let line_end = self
            .line_starts
            .get(line)
            .map_or(self.content.len(), |next| next - 1);
        if line_end - line_start <= CONTEXT_WIDTH {
            return self.content[line_start..line_end].trim().to_string();
        }

        let half = CONTEXT_WIDTH / 2;
        let mut from = start.saturating_sub(half).max(line_start);
        while !self.content.is_char_boundary(from) {
            from -= 1;
        }
        let mut to = (end + half).min(line_end);
        while !self.content.is_char_boundary(to) {
            to += 1;
        }
        self.content[from..to].trim().to_string()
    }

    fn issue(
        &mut self,
        offset: usize,
        found: &str,
        issue_type: IssueType,
        severity: Severity,
        suggestion: String,
    ) -> AuditIssue {
        let (line, column) = self.locate(offset);
        AuditIssue {
            issue_type,
            severity,
            line: Some(line),
            column: Some(column),
            found: found.to_string(),
            suggestion,
            context: Some(self.context(line, offset, offset + found.len())),
        }
    }
}

/// Audit a set of files and aggregate the results.
pub fn audit_files(files: &[SourceFile], theme: Option<&ThemeConfig>) -> AuditReport {
    let results: Vec<AuditResult> = files
        .iter()
        .map(|f| audit_file(&f.path, &f.content, theme))
        .collect();

    let summary = summarize(&results);
    let recommendations = recommendations(&results);

    info!(
        "Audited {} files: {} issues, average score {}",
        summary.total_files, summary.total_issues, summary.average_score
    );

    AuditReport {
        results,
        summary,
        recommendations,
    }
}

fn summarize(results: &[AuditResult]) -> AuditSummary {
    let count = |severity: Severity| -> usize {
        results.iter().map(|r| r.count(severity)).sum()
    };

    // An empty input set averages to 0 rather than dividing by zero
    let average_score = if results.is_empty() {
        0
    } else {
        let total: u32 = results.iter().map(|r| r.score).sum();
        (f64::from(total) / results.len() as f64).round() as u32
    };

    AuditSummary {
        total_files: results.len(),
        files_with_issues: results.iter().filter(|r| !r.issues.is_empty()).count(),
        total_issues: results.iter().map(|r| r.issues.len()).sum(),
        critical: count(Severity::Critical),
        high: count(Severity::High),
        medium: count(Severity::Medium),
        low: count(Severity::Low),
        average_score,
    }
}

fn recommendations(results: &[AuditResult]) -> Vec<String> {
    let critical = results.iter().any(|r| r.status == AuditStatus::Critical);
    let has = |t: IssueType| results.iter().any(|r| r.has_type(t));

    [
        (critical, RECOMMEND_CRITICAL),
        (has(IssueType::MissingSeo), RECOMMEND_SEO),
        (has(IssueType::Placeholder), RECOMMEND_PLACEHOLDERS),
        (has(IssueType::OutdatedTerminology), RECOMMEND_TERMINOLOGY),
    ]
    .into_iter()
    .filter(|(hit, _)| *hit)
    .map(|(_, text)| text.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sitesmith_core::{generate_theme, parse_theme_prompt};

    fn mtg_theme() -> ThemeConfig {
        generate_theme(&parse_theme_prompt(
            "MTG tournament platform called Bosca's Slingers with epic warrior theme and orange colors",
        ))
    }

    #[test]
    fn test_template_name_is_one_critical_issue() {
        let result = audit_file("about.md", "Claire Hamilton", None);

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Critical);
        assert_eq!(result.issues[0].issue_type, IssueType::TemplateContent);
        assert!(result.score <= 75);
        assert_eq!(result.status, AuditStatus::Critical);
    }

    #[test]
    fn test_html_without_meta_tags() {
        let result = audit_file("index.html", "<html><head><title>x</title></head></html>", None);

        let missing: Vec<&AuditIssue> = result
            .issues
            .iter()
            .filter(|i| i.issue_type == IssueType::MissingSeo)
            .collect();
        assert_eq!(missing.len(), 5);
        assert!(missing.iter().all(|i| i.severity == Severity::High && i.line.is_none()));
        assert_eq!(result.score, 50);
        assert_eq!(result.status, AuditStatus::Warning);
    }

    #[test]
    fn test_seo_check_is_gated_on_extension() {
        assert!(audit_file("notes.md", "no tags here", None).issues.is_empty());
        assert_eq!(audit_file("src/pages/About.TSX", "", None).issues.len(), 5);
    }

    #[test]
    fn test_mixed_severities_score() {
        let content = "Claire Hamilton\nlorem ipsum\nCall [Your Phone]\nlivestock livestock\nlivestock";
        let result = audit_file("page.md", content, None);

        assert_eq!(result.count(Severity::Critical), 1);
        assert_eq!(result.count(Severity::High), 2);
        assert_eq!(result.count(Severity::Medium), 0);
        assert_eq!(result.count(Severity::Low), 3);
        assert_eq!(result.score, 49);
    }

    #[test]
    fn test_issue_location() {
        let content = "<p>Welcome</p>\n  <p>Contact [Your Name] today</p>\n";
        let result = audit_file("page.md", content, None);

        let issue = &result.issues[0];
        assert_eq!(issue.line, Some(2));
        assert_eq!(issue.column, Some(14));
        assert_eq!(issue.found, "[Your Name]");
        assert_eq!(issue.context.as_deref(), Some("<p>Contact [Your Name] today</p>"));
    }

    #[test]
    fn test_long_line_context_is_windowed() {
        let content = format!("{} lorem ipsum {}", "é".repeat(200), "é".repeat(200));
        let result = audit_file("page.md", &content, None);

        let issue = &result.issues[0];
        assert_eq!(issue.line, Some(1));
        assert_eq!(issue.column, Some(202));
        let context = issue.context.as_deref().unwrap();
        assert!(context.contains("lorem ipsum"));
        assert!(context.len() <= CONTEXT_WIDTH + "lorem ipsum".len() + 4);
    }

    #[test]
    fn test_large_single_line_file() {
        // ~300 KB of minified-style text with a match every five bytes
        let n = 60_000;
        let content = "book ".repeat(n);
        let result = audit_file("bundle.js", &content, Some(&mtg_theme()));

        assert_eq!(result.issues.len(), n);
        let last = result.issues.last().unwrap();
        assert_eq!(last.line, Some(1));
        assert_eq!(last.column, Some(5 * (n - 1) + 1));
        assert!(result
            .issues
            .iter()
            .all(|i| i.context.as_ref().is_some_and(|c| c.len() <= CONTEXT_WIDTH + 8)));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_columns_restart_per_pattern() {
        let content = "TODO first\nthen lorem ipsum and TODO";
        let result = audit_file("notes.md", content, None);

        let located: Vec<(usize, usize)> = result
            .issues
            .iter()
            .map(|i| (i.line.unwrap(), i.column.unwrap()))
            .collect();
        // lorem ipsum (high) is reported before the two TODOs (medium)
        assert_eq!(located, vec![(2, 6), (1, 1), (2, 22)]);
    }

    #[test]
    fn test_terminology_drift() {
        let theme = mtg_theme();
        let result = audit_file("copy.md", "Book a service today.\nOur booking desk", Some(&theme));

        let terms: Vec<&str> = result
            .issues
            .iter()
            .filter(|i| i.issue_type == IssueType::OutdatedTerminology)
            .map(|i| i.found.as_str())
            .collect();
        assert_eq!(terms, vec!["Book", "service", "booking"]);
        assert!(result.issues[0].suggestion.contains("\"register\""));
        assert_eq!(result.status, AuditStatus::Clean);
        assert_eq!(result.score, 94);
    }

    #[test]
    fn test_terminology_false_positive_is_kept() {
        // Known limitation: unrelated uses of a generic word are flagged
        let theme = mtg_theme();
        let result = audit_file("blog.md", "Read the rules book first.", Some(&theme));
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_livestock_wording_allowed_on_livestock_sites() {
        let content = "Livestock sales every Friday";
        let livestock = generate_theme(&parse_theme_prompt("cattle saleyard"));
        assert!(audit_file("copy.md", content, Some(&livestock)).issues.is_empty());

        let flagged = audit_file("copy.md", content, Some(&mtg_theme()));
        assert_eq!(flagged.issues.len(), 1);
        assert_eq!(flagged.issues[0].issue_type, IssueType::TemplateContent);
        assert_eq!(audit_file("copy.md", content, None).issues.len(), 1);
    }

    #[test]
    fn test_generic_theme_skips_terminology() {
        let theme = generate_theme(&parse_theme_prompt("a generic booking site"));
        let result = audit_file("copy.md", "Book a service with our client booking form", Some(&theme));
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_audit_files_summary() {
        let files = vec![
            SourceFile::new("a.md", "Claire Hamilton"),
            SourceFile::new("b.md", "all good"),
            SourceFile::new("c.html", ""),
        ];
        let report = audit_files(&files, None);

        assert_eq!(report.summary.total_files, 3);
        assert_eq!(report.summary.files_with_issues, 2);
        assert_eq!(report.summary.total_issues, 6);
        assert_eq!(report.summary.critical, 1);
        assert_eq!(report.summary.high, 5);
        // (75 + 100 + 50) / 3 = 75
        assert_eq!(report.summary.average_score, 75);
        assert_eq!(report.recommendations, vec![RECOMMEND_CRITICAL, RECOMMEND_SEO]);
    }

    #[test]
    fn test_recommendation_order() {
        let theme = mtg_theme();
        let files = vec![
            SourceFile::new("a.md", "book now"),
            SourceFile::new("b.md", "TODO"),
            SourceFile::new("c.md", "Hamilton Consulting"),
        ];
        let report = audit_files(&files, Some(&theme));
        assert_eq!(
            report.recommendations,
            vec![RECOMMEND_CRITICAL, RECOMMEND_PLACEHOLDERS, RECOMMEND_TERMINOLOGY]
        );
    }

    #[test]
    fn test_empty_input() {
        let report = audit_files(&[], None);
        assert_eq!(report.summary.total_files, 0);
        assert_eq!(report.summary.average_score, 0);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_average_rounds() {
        // 75 and 100 average to 87.5
        let files = vec![
            SourceFile::new("a.md", "Claire Hamilton"),
            SourceFile::new("b.md", ""),
        ];
        assert_eq!(audit_files(&files, None).summary.average_score, 88);
    }

    proptest! {
        #[test]
        fn prop_score_bounds_and_status(content in "(Claire Hamilton|lorem ipsum|TODO|book|livestock|[a-z ]{0,8}|\n){0,40}") {
            let theme = mtg_theme();
            let result = audit_file("page.html", &content, Some(&theme));

            prop_assert!(result.score <= 100);
            let has_critical = result.issues.iter().any(|i| i.severity == Severity::Critical);
            prop_assert_eq!(result.status == AuditStatus::Critical, has_critical);
        }

        #[test]
        fn prop_lines_are_in_range(content in "[a-zA-Z \n\\[\\]]{0,200}") {
            let result = audit_file("page.md", &content, None);
            let lines = content.matches('\n').count() + 1;
            for issue in &result.issues {
                let line = issue.line.unwrap();
                prop_assert!(line >= 1 && line <= lines);
                prop_assert!(issue.column.unwrap() >= 1);
            }
        }
    }
}
