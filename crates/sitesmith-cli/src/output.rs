//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use sitesmith_audit::{AuditReport, AuditResult, AuditStatus, Severity};
use sitesmith_core::theme::industry_preset;
use sitesmith_core::{AppConfig, ThemeConfig, ThemePrompt};

/// Print the headline facts of a generated site.
pub fn print_app_summary(app: &AppConfig) {
    let theme = &app.theme;

    println!("{} {}", app.name.cyan().bold(), format!("({})", app.domain).dimmed());
    println!("{}", "─".repeat(term_width().min(60)));
    println!("  {:<12} {}", "Industry".bold(), theme.industry);
    println!("  {:<12} {} {}", "Colors".bold(), theme.colors.scheme, theme.colors.primary.dimmed());
    println!("  {:<12} {} {}", "Style".bold(), theme.visual_style, format!("({})", theme.vibe).dimmed());
    println!(
        "  {:<12} {} / {} / {}",
        "Terms".bold(),
        theme.terminology.book,
        theme.terminology.service,
        theme.terminology.client
    );
    if !app.deployment.features.is_empty() {
        let features: Vec<String> = app
            .deployment
            .features
            .iter()
            .map(|f| format!("{:?}", f).to_lowercase())
            .collect();
        println!("  {:<12} {}", "Features".bold(), features.join(", "));
    }
}

/// Print a list of files under `root`.
pub fn print_file_list<'a>(root: &Path, paths: impl Iterator<Item = &'a str>, verb: &str) {
    let paths: Vec<&str> = paths.collect();
    println!();
    println!("{} {} files to {}", verb, paths.len(), root.display().to_string().bold());
    for path in paths {
        println!("  {} {}", "+".green(), path);
    }
}

/// Print a parsed prompt and the theme it compiles to.
pub fn print_theme(prompt: &ThemePrompt, theme: &ThemeConfig) {
    println!("{}", "Parsed prompt".bold());
    println!("  industry: {}", prompt.industry);
    println!("  vibe:     {}", prompt.vibe);
    println!("  color:    {}", prompt.primary_color);
    println!("  style:    {}", prompt.visual_style);
    println!();

    println!("{}", "Theme".bold());
    let c = &theme.colors;
    println!(
        "  colors:     {} {} {} {} {}",
        c.primary, c.secondary, c.accent, c.dark, c.darker
    );
    let t = &theme.typography;
    println!(
        "  headings:   {} {} {}",
        t.heading_font, t.heading_weight, t.heading_transform
    );
    println!("  body:       {}", t.body_font);
    println!("  animations: {}", theme.animations.enabled.join(", "));
    if let Some(p) = &theme.animations.particle_system {
        println!("  particles:  {} ({})", p.count, p.colors.join(", "));
    }
    let terms = &theme.terminology;
    println!(
        "  terms:      book={} service={} client={} booking={} schedule={}",
        terms.book, terms.service, terms.client, terms.booking, terms.schedule
    );
    if !theme.decorative_elements.is_empty() {
        println!("  decor:      {}", theme.decorative_elements.join(", "));
    }

    let preset = industry_preset(theme);
    println!(
        "  {}",
        format!(
            "suggested for {}: {} colors, {} style",
            preset.slug,
            preset.suggested_colors.join(" or "),
            preset.suggested_style
        )
        .dimmed()
    );
}

fn status_colored(status: AuditStatus) -> ColoredString {
    let label = format!("{:<8}", status);
    match status {
        AuditStatus::Critical => label.red().bold(),
        AuditStatus::Warning => label.yellow(),
        AuditStatus::Clean => label.green(),
    }
}

fn severity_colored(severity: Severity) -> ColoredString {
    let label = format!("{:<8}", severity);
    match severity {
        Severity::Critical => label.red().bold(),
        Severity::High => label.red(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.dimmed(),
    }
}

fn score_colored(score: u32) -> ColoredString {
    let label = format!("{:>3}", score);
    if score >= 90 {
        label.green()
    } else if score >= 70 {
        label.yellow()
    } else {
        label.red()
    }
}

/// Print an audit report as a table of flagged files.
pub fn print_audit_report(report: &AuditReport) {
    let s = &report.summary;
    let width = term_width();

    println!("{}", "Content Audit".bold());
    println!("{}", "─".repeat(width.min(70)));

    let flagged: Vec<&AuditResult> = report
        .worst()
        .into_iter()
        .filter(|r| !r.issues.is_empty())
        .collect();

    if flagged.is_empty() {
        println!("{}", "No issues found.".green());
    }

    // score + status + spacing take 15 columns
    let file_width = width.saturating_sub(15).clamp(20, 60);
    for result in flagged {
        println!(
            "{} {} {}",
            score_colored(result.score),
            status_colored(result.status),
            truncate_visual(&result.file, file_width).bold()
        );
        for issue in &result.issues {
            let location = match issue.line {
                Some(line) => format!("{}:{}", line, issue.column.unwrap_or(1)),
                None => "-".to_string(),
            };
            let found = truncate_visual(&issue.found, 40);
            println!(
                "    {} {} {} {}",
                severity_colored(issue.severity),
                pad_visual(&location, 8).dimmed(),
                pad_visual(issue.issue_type.as_str(), 21),
                format!("\"{}\"", found).cyan()
            );
            println!("      {} {}", "→".dimmed(), issue.suggestion.dimmed());
        }
    }

    println!("{}", "─".repeat(width.min(70)));
    println!(
        "  {} files, {} with issues, {} issues ({} critical, {} high, {} medium, {} low)",
        s.total_files.to_string().bold(),
        s.files_with_issues,
        s.total_issues,
        s.critical.to_string().red(),
        s.high,
        s.medium,
        s.low
    );
    println!("  Average score: {}", score_colored(s.average_score).bold());

    if !report.recommendations.is_empty() {
        println!();
        println!("{}", "Recommendations".bold());
        for (i, rec) in report.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, rec);
        }
    }
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
pub fn pad_visual(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
pub fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}
