//! Audit result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Points deducted from a file's score per issue.
    pub fn weight(self) -> u32 {
        match self {
            Self::Low => 2,
            Self::Medium => 5,
            Self::High => 10,
            Self::Critical => 25,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
    TemplateContent,
    Placeholder,
    MissingSeo,
    OutdatedTerminology,
}

impl IssueType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TemplateContent => "template-content",
            Self::Placeholder => "placeholder",
            Self::MissingSeo => "missing-seo",
            Self::OutdatedTerminology => "outdated-terminology",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single finding in one file.
///
/// `line`, `column` and `context` are absent for issues that concern the
/// file as a whole, such as a missing SEO tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    pub found: String,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Clean,
    Warning,
    Critical,
}

impl AuditStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Issues, score and status for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    pub file: String,
    pub issues: Vec<AuditIssue>,
    pub score: u32,
    pub status: AuditStatus,
}

impl AuditResult {
    /// Build a result, deriving score and status from the issues.
    pub fn new(file: impl Into<String>, issues: Vec<AuditIssue>) -> Self {
        let score = score(&issues);
        let status = status(&issues);
        Self {
            file: file.into(),
            issues,
            score,
            status,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn has_type(&self, issue_type: IssueType) -> bool {
        self.issues.iter().any(|i| i.issue_type == issue_type)
    }
}

/// `max(0, 100 - 25c - 10h - 5m - 2l)`.
pub fn score(issues: &[AuditIssue]) -> u32 {
    let penalty: u32 = issues.iter().map(|i| i.severity.weight()).sum();
    100u32.saturating_sub(penalty)
}

/// Critical if any critical issue, else warning if any high issue, else clean.
pub fn status(issues: &[AuditIssue]) -> AuditStatus {
    if issues.iter().any(|i| i.severity == Severity::Critical) {
        AuditStatus::Critical
    } else if issues.iter().any(|i| i.severity == Severity::High) {
        AuditStatus::Warning
    } else {
        AuditStatus::Clean
    }
}

/// Input to `audit_files`: a path and its full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub total_files: usize,
    pub files_with_issues: usize,
    pub total_issues: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub average_score: u32,
}

/// Aggregated audit of a set of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub results: Vec<AuditResult>,
    pub summary: AuditSummary,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity) -> AuditIssue {
        AuditIssue {
            issue_type: IssueType::Placeholder,
            severity,
            line: Some(1),
            column: Some(1),
            found: "x".to_string(),
            suggestion: "y".to_string(),
            context: None,
        }
    }

    #[test]
    fn test_score_formula() {
        let issues = vec![
            issue(Severity::Critical),
            issue(Severity::High),
            issue(Severity::High),
            issue(Severity::Low),
            issue(Severity::Low),
            issue(Severity::Low),
        ];
        assert_eq!(score(&issues), 49);
        assert_eq!(status(&issues), AuditStatus::Critical);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let issues = vec![issue(Severity::Critical); 5];
        assert_eq!(score(&issues), 0);
    }

    #[test]
    fn test_status_rules() {
        assert_eq!(status(&[]), AuditStatus::Clean);
        assert_eq!(status(&[issue(Severity::Medium), issue(Severity::Low)]), AuditStatus::Clean);
        assert_eq!(status(&[issue(Severity::High)]), AuditStatus::Warning);
    }

    #[test]
    fn test_issue_json_shape() {
        let mut missing = issue(Severity::High);
        missing.issue_type = IssueType::MissingSeo;
        missing.line = None;
        missing.column = None;

        let json = serde_json::to_string(&missing).unwrap();
        assert!(json.contains("\"type\":\"missing-seo\""));
        assert!(json.contains("\"severity\":\"high\""));
        assert!(!json.contains("\"line\""));
    }
}
