//! Audit report rendering.
//!
//! Plain-text output for terminals and a markdown document for saving
//! alongside a site.

use crate::model::{AuditReport, AuditResult, AuditStatus};

impl AuditReport {
    /// Results ordered worst score first; ties keep input order.
    pub fn worst(&self) -> Vec<&AuditResult> {
        let mut sorted: Vec<&AuditResult> = self.results.iter().collect();
        sorted.sort_by_key(|r| r.score);
        sorted
    }

    pub fn has_critical(&self) -> bool {
        self.summary.critical > 0
    }

    /// Format the report as a human-readable string.
    pub fn to_display_string(&self) -> String {
        let s = &self.summary;
        let mut output = String::new();

        output.push_str("Content Audit Report\n");
        output.push_str(&format!("{}\n", "─".repeat(50)));
        output.push_str(&format!("Files scanned:     {:>6}\n", s.total_files));
        output.push_str(&format!("Files with issues: {:>6}\n", s.files_with_issues));
        output.push_str(&format!(
            "Issues:            {:>6}  (critical {}, high {}, medium {}, low {})\n",
            s.total_issues, s.critical, s.high, s.medium, s.low
        ));
        output.push_str(&format!("Average score:     {:>6}\n", s.average_score));
        output.push_str(&format!("{}\n", "─".repeat(50)));

        let flagged: Vec<&AuditResult> =
            self.worst().into_iter().filter(|r| !r.issues.is_empty()).collect();
        if !flagged.is_empty() {
            output.push('\n');
            for result in flagged {
                output.push_str(&format!(
                    "{:>3}  {:<8}  {}\n",
                    result.score, result.status, result.file
                ));
                for issue in &result.issues {
                    let location = match (issue.line, issue.column) {
                        (Some(line), Some(col)) => format!("{}:{}", line, col),
                        (Some(line), None) => line.to_string(),
                        _ => "-".to_string(),
                    };
                    output.push_str(&format!(
                        "       [{}] {} {} \"{}\"\n",
                        issue.severity, location, issue.issue_type, issue.found
                    ));
                    output.push_str(&format!("         → {}\n", issue.suggestion));
                }
            }
        }

        if !self.recommendations.is_empty() {
            output.push_str("\nRecommendations:\n");
            for (i, rec) in self.recommendations.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, rec));
            }
        }

        output
    }

    /// Render the report as a markdown document.
    pub fn to_markdown(&self) -> String {
        let s = &self.summary;
        let mut md = String::new();

        md.push_str("# Content Audit\n\n");
        md.push_str("| Metric | Value |\n|--------|-------|\n");
        md.push_str(&format!("| Files scanned | {} |\n", s.total_files));
        md.push_str(&format!("| Files with issues | {} |\n", s.files_with_issues));
        md.push_str(&format!("| Critical | {} |\n", s.critical));
        md.push_str(&format!("| High | {} |\n", s.high));
        md.push_str(&format!("| Medium | {} |\n", s.medium));
        md.push_str(&format!("| Low | {} |\n", s.low));
        md.push_str(&format!("| Average score | {} |\n\n", s.average_score));

        if !self.recommendations.is_empty() {
            md.push_str("## Recommendations\n\n");
            for rec in &self.recommendations {
                md.push_str(&format!("- {}\n", rec));
            }
            md.push('\n');
        }

        md.push_str("## Files\n\n");
        for result in self.worst() {
            let marker = match result.status {
                AuditStatus::Critical => "🔴",
                AuditStatus::Warning => "🟡",
                AuditStatus::Clean => "🟢",
            };
            md.push_str(&format!(
                "### {} `{}` ({})\n\n",
                marker, result.file, result.score
            ));
            if result.issues.is_empty() {
                md.push_str("No issues.\n\n");
                continue;
            }
            md.push_str("| Line | Severity | Type | Found | Suggestion |\n");
            md.push_str("|------|----------|------|-------|------------|\n");
            for issue in &result.issues {
                md.push_str(&format!(
                    "| {} | {} | {} | `{}` | {} |\n",
                    issue.line.map_or_else(|| "-".to_string(), |l| l.to_string()),
                    issue.severity,
                    issue.issue_type,
                    issue.found.replace('|', "\\|").replace('`', "'"),
                    issue.suggestion.replace('|', "\\|")
                ));
            }
            md.push('\n');
        }

        md
    }
}
