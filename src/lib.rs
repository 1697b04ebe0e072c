//! Naming Guardian - Filename convention enforcement for CI pipelines
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure classification logic separated from filesystem traversal and host I/O
//! - A run is one linear pass: walk the tree, classify every file, report the outcome
//! - The host boundary converts every failure into a structured result

pub mod config;
pub mod domain;
pub mod host;
pub mod patterns;
pub mod report;

// Re-export main types for convenient access
pub use domain::violations::{
    Convention, FileEntry, GuardianError, GuardianResult, NamingViolation, Outcome, RunResult,
    ValidationReport, ValidationSummary,
};

pub use config::{ConfigBuilder, ExemptionMode, NamingConfig, StandardFileRegistry};

pub use patterns::{
    Classifier, ExclusionSet, ExemptionPolicy, NoExemptions, StandardExemptions, TreeWalker,
};

pub use report::{report, OutputFormat, ReportFormatter, ReportOptions};

pub use host::{ConsoleHost, GitHubActionsHost, HostReporter, RecordingHost};

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Main validator wiring the walker, the classifier and the reporter together
#[derive(Debug)]
pub struct NamingValidator {
    config: NamingConfig,
    walker: TreeWalker,
    classifier: Classifier,
    report_formatter: ReportFormatter,
}

impl NamingValidator {
    /// Create a new validator with the given configuration
    pub fn new_with_config(config: NamingConfig) -> GuardianResult<Self> {
        config.validate()?;

        let walker = TreeWalker::new(config.exclude.clone());
        let classifier = Classifier::new(config.effective_convention(), config.exemption_policy());

        Ok(Self { config, walker, classifier, report_formatter: ReportFormatter::default() })
    }

    /// Create a validator with default configuration
    pub fn new() -> GuardianResult<Self> {
        Self::new_with_config(NamingConfig::default())
    }

    /// Set custom report formatter
    pub fn with_report_formatter(mut self, formatter: ReportFormatter) -> Self {
        self.report_formatter = formatter;
        self
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Classify a single path without touching the filesystem
    pub fn classify<P: AsRef<Path>>(&self, path: P) -> Outcome {
        self.classifier.classify(path)
    }

    /// Walk `root` and classify every file found
    pub fn validate_directory<P: AsRef<Path>>(&self, root: P) -> GuardianResult<ValidationReport> {
        let root = root.as_ref();
        let start_time = Instant::now();
        let convention = self.classifier.convention();

        let files = self.walker.walk(root)?;
        let mut report = ValidationReport::new(self.config.convention.clone());

        for entry in &files {
            let outcome = self.classifier.classify_name(&entry.file_name);
            tracing::debug!("{}: {}", entry.path.display(), outcome.as_str());
            report.record(outcome, || NamingViolation::new(entry, convention));
        }

        report.set_execution_time(u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX));
        tracing::info!(
            "Checked {} files under {} against {}-case: {} violations",
            report.summary.total_files,
            root.display(),
            convention.as_str(),
            report.violations.len()
        );

        Ok(report)
    }

    /// Walk, classify and reduce to a run result
    pub fn check<P: AsRef<Path>>(&self, root: P) -> GuardianResult<RunResult> {
        let validation = self.validate_directory(root)?;
        Ok(report::summarize(&validation))
    }

    /// Format a validation report for output
    pub fn format_report(
        &self,
        report: &ValidationReport,
        format: OutputFormat,
    ) -> GuardianResult<String> {
        self.report_formatter.format_report(report, format)
    }
}

/// Enumerate every file under `root`, pruning excluded directory subtrees
pub fn walk<P: AsRef<Path>>(root: P, excluded: &ExclusionSet) -> GuardianResult<Vec<PathBuf>> {
    let files = TreeWalker::new(excluded.clone()).walk(root)?;
    Ok(files.into_iter().map(|f| f.path).collect())
}

/// Classify `path` under `convention` with the standard exemptions
pub fn classify<P: AsRef<Path>>(path: P, convention: Convention) -> Outcome {
    Classifier::with_standard_exemptions(convention).classify(path)
}

/// Run a complete check against a host.
///
/// This is the outermost boundary: configuration and filesystem errors are
/// converted into a failed result and signalled through `host`; nothing is
/// returned as an error.
pub fn run_with_host<F, P>(load_config: F, root: P, host: &mut dyn HostReporter) -> RunResult
where
    F: FnOnce() -> GuardianResult<NamingConfig>,
    P: AsRef<Path>,
{
    let outcome = load_config()
        .and_then(NamingValidator::new_with_config)
        .and_then(|validator| validator.check(root));

    match outcome {
        Ok(result) => {
            if let Err(e) = host::publish(host, &result) {
                tracing::error!("Failed to publish result: {}", e);
                host.fail(&e.to_string());
                return RunResult { passed: false, ..result };
            }
            result
        }
        Err(e) => {
            tracing::error!("Naming check aborted: {}", e);
            let result = RunResult::aborted(e.to_string());
            if let Err(output_err) = host.set_output(host::PASSED_OUTPUT, "false") {
                tracing::warn!("Failed to set output: {}", output_err);
            }
            host.fail(&result.message);
            result
        }
    }
}
