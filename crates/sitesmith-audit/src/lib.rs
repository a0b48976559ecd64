//! # Sitesmith Audit
//!
//! Content integrity checks for generated and existing sites.
//!
//! Scans file text for leftover template content, placeholders, missing
//! SEO tags and terminology drift, scoring each file from 0 to 100.

pub mod model;
pub mod patterns;
pub mod reporter;
pub mod scanner;

pub use model::{
    AuditIssue, AuditReport, AuditResult, AuditStatus, AuditSummary, IssueType, Severity,
    SourceFile,
};
pub use scanner::{audit_file, audit_files};
