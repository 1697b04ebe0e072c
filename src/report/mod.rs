//! Run outcome reporting and report formatting
//!
//! CDD Principle: Anti-Corruption Layer - Formatters translate domain objects to external formats
//! - `report` reduces a violation list to the pass/fail RunResult the host consumes
//! - ReportFormatter renders a full ValidationReport for humans, tools or workflow annotations
//! - Neither decides exit codes; that stays at the host boundary

use crate::domain::violations::{
    GuardianError, GuardianResult, NamingViolation, RunResult, ValidationReport,
};
use serde_json::Value as JsonValue;
use std::path::PathBuf;

/// Reduce a violation list to a run result.
///
/// `convention` is the identifier as configured and is echoed verbatim in the
/// message.
pub fn report(violations: &[PathBuf], convention: &str) -> RunResult {
    if violations.is_empty() {
        return RunResult {
            passed: true,
            failed_count: 0,
            message: format!("All files follow {convention}-case naming convention."),
        };
    }

    let listing: Vec<String> = violations.iter().map(|p| p.display().to_string()).collect();
    RunResult {
        passed: false,
        failed_count: violations.len(),
        message: format!(
            "Found files that violate {convention}-case naming:\n{}",
            listing.join("\n")
        ),
    }
}

/// Run result for a complete validation report
pub fn summarize(validation: &ValidationReport) -> RunResult {
    report(&validation.violation_paths(), &validation.convention)
}

/// Supported output formats for validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format with colors and suggestions
    Human,
    /// JSON format for programmatic consumption
    Json,
    /// GitHub Actions workflow annotations
    GitHub,
}

/// Options for customizing report output
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Whether to use colored output (for human format)
    pub use_colors: bool,
    /// Whether to show rename suggestions
    pub show_suggestions: bool,
    /// Maximum number of violations to include
    pub max_violations: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { use_colors: true, show_suggestions: true, max_violations: None }
    }
}

/// Main report formatter that dispatches to specific formatters
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Format a validation report in the specified format
    pub fn format_report(
        &self,
        report: &ValidationReport,
        format: OutputFormat,
    ) -> GuardianResult<String> {
        let violations = self.limit_violations(&report.violations);

        match format {
            OutputFormat::Human => Ok(self.format_human(report, violations)),
            OutputFormat::Json => self.format_json(report, violations),
            OutputFormat::GitHub => Ok(self.format_github(violations)),
        }
    }

    fn limit_violations<'a>(&self, violations: &'a [NamingViolation]) -> &'a [NamingViolation] {
        match self.options.max_violations {
            Some(max) if max < violations.len() => &violations[..max],
            _ => violations,
        }
    }

    fn format_human(&self, report: &ValidationReport, violations: &[NamingViolation]) -> String {
        let mut output = String::new();
        let colors = self.options.use_colors;

        if violations.is_empty() {
            output.push_str(&format!(
                "✅ {}\n",
                paint(
                    &format!("All files follow {}-case naming convention", report.convention),
                    Paint::Green,
                    colors
                )
            ));
        } else {
            output.push_str(&format!(
                "❌ {}\n\n",
                paint(
                    &format!("Found files that violate {}-case naming", report.convention),
                    Paint::Red,
                    colors
                )
            ));

            for violation in violations {
                output.push_str(&format!("  {}\n", violation.file_path.display()));
                if self.options.show_suggestions {
                    if let Some(fix) = &violation.suggested_fix {
                        output.push_str(&format!(
                            "    {}\n",
                            paint(&format!("💡 rename to {fix}"), Paint::Dim, colors)
                        ));
                    }
                }
            }

            let hidden = report.violations.len() - violations.len();
            if hidden > 0 {
                output.push_str(&format!("  ... and {hidden} more\n"));
            }
            output.push('\n');
        }

        output.push_str(&self.format_summary(report));
        output
    }

    fn format_json(
        &self,
        report: &ValidationReport,
        violations: &[NamingViolation],
    ) -> GuardianResult<String> {
        let result = summarize(report);
        let json_violations: Vec<JsonValue> = violations
            .iter()
            .map(|v| {
                serde_json::json!({
                    "file_path": v.file_path.display().to_string(),
                    "file_name": v.file_name,
                    "convention": v.convention.as_str(),
                    "message": v.message,
                    "suggested_fix": v.suggested_fix,
                })
            })
            .collect();

        let json_report = serde_json::json!({
            "passed": result.passed,
            "failed_count": result.failed_count,
            "convention": report.convention,
            "violations": json_violations,
            "summary": {
                "total_files": report.summary.total_files,
                "exempt_files": report.summary.exempt_files,
                "valid_files": report.summary.valid_files,
                "execution_time_ms": report.summary.execution_time_ms,
                "validated_at": report.summary.validated_at.to_rfc3339(),
            }
        });

        serde_json::to_string_pretty(&json_report)
            .map_err(|e| GuardianError::report(format!("JSON serialization failed: {e}")))
    }

    fn format_github(&self, violations: &[NamingViolation]) -> String {
        let mut output = String::new();

        for violation in violations {
            let message = match &violation.suggested_fix {
                Some(fix) => format!("{} (rename to '{}')", violation.message, fix),
                None => violation.message.clone(),
            };
            output.push_str(&format!(
                "::error file={},title={}-case naming::{}\n",
                violation.file_path.display(),
                violation.convention.as_str(),
                message
            ));
        }

        output
    }

    fn format_summary(&self, report: &ValidationReport) -> String {
        let summary = &report.summary;
        let execution_time = (summary.execution_time_ms as f64) / 1000.0;
        let violations = report.violations.len();

        format!(
            "📊 Summary: {} violation{} in {} files ({} exempt, {} valid) ({:.1}s)\n",
            violations,
            if violations == 1 { "" } else { "s" },
            summary.total_files,
            summary.exempt_files,
            summary.valid_files,
            execution_time
        )
    }
}

#[derive(Clone, Copy)]
enum Paint {
    Green,
    Red,
    Dim,
}

#[cfg(feature = "colors")]
fn paint(text: &str, color: Paint, enabled: bool) -> String {
    use colored::Colorize;

    if !enabled {
        return text.to_string();
    }
    match color {
        Paint::Green => text.green().to_string(),
        Paint::Red => text.red().bold().to_string(),
        Paint::Dim => text.dimmed().to_string(),
    }
}

#[cfg(not(feature = "colors"))]
fn paint(text: &str, _color: Paint, _enabled: bool) -> String {
    text.to_string()
}
