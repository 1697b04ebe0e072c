//! Core domain models for filename convention checks and run results
//!
//! Architecture: Rich Domain Models - Conventions and violations carry behavior, not just data
//! - A Convention knows its matching rule and how to suggest a conforming name
//! - ValidationReport acts as an aggregate root managing the violations of a run
//! - RunResult is the narrow pass/fail value handed to the host boundary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Naming conventions a repository can be held to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// `my-file.txt`
    #[default]
    Kebab,
    /// `my_file.txt`
    Snake,
    /// `myFile.txt`
    Camel,
}

impl Convention {
    /// Every supported convention, in display order
    pub const ALL: [Convention; 3] = [Self::Kebab, Self::Snake, Self::Camel];

    /// Parse a convention identifier.
    ///
    /// Unrecognized identifiers fall back to kebab-case instead of failing, so a
    /// misconfigured pipeline still gets checked against the default convention.
    pub fn parse(identifier: &str) -> Self {
        match Self::recognize(identifier) {
            Some(convention) => convention,
            None => {
                tracing::warn!(
                    "Unrecognized naming convention '{}', falling back to kebab-case",
                    identifier
                );
                Self::Kebab
            }
        }
    }

    /// Parse a convention identifier without falling back
    pub fn recognize(identifier: &str) -> Option<Self> {
        match identifier.trim() {
            "kebab" => Some(Self::Kebab),
            "snake" => Some(Self::Snake),
            "camel" => Some(Self::Camel),
            _ => None,
        }
    }

    /// Convert to string for display
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kebab => "kebab",
            Self::Snake => "snake",
            Self::Camel => "camel",
        }
    }

    /// Example filename that satisfies this convention
    pub fn example(self) -> &'static str {
        match self {
            Self::Kebab => "my-file.txt",
            Self::Snake => "my_file.txt",
            Self::Camel => "myFile.txt",
        }
    }

    /// Suggest a conforming rename for `file_name`.
    ///
    /// Returns `None` when no conforming name can be derived, e.g. for names
    /// without an extension or with characters outside `[A-Za-z0-9]` in the
    /// extension.
    pub fn suggest(self, file_name: &str) -> Option<String> {
        let (stem, extension) = file_name.rsplit_once('.')?;
        let extension = extension.to_lowercase();
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }

        let words = split_words(stem);
        if words.is_empty() {
            return None;
        }

        let stem = match self {
            Self::Kebab => words.join("-"),
            Self::Snake => words.join("_"),
            Self::Camel => words
                .iter()
                .enumerate()
                .map(|(i, word)| if i == 0 { word.clone() } else { capitalize(word) })
                .collect(),
        };

        let candidate = format!("{stem}.{extension}");
        crate::patterns::convention_regex(self).is_match(&candidate).then_some(candidate)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a filename stem into lowercase ASCII words on separators and case changes
fn split_words(stem: &str) -> Vec<String> {
    let chars: Vec<char> = stem.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_ascii_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            // "fileName" and the "S" in "HTTPServer" both start a new word
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c.to_ascii_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Result of classifying a single filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Well-known or dot file, never checked
    Exempt,
    /// Matches the configured convention
    Valid,
    /// Fails the configured convention
    Violation,
}

impl Outcome {
    pub fn is_violation(self) -> bool {
        matches!(self, Self::Violation)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exempt => "exempt",
            Self::Valid => "valid",
            Self::Violation => "violation",
        }
    }
}

/// A file discovered during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the walk root
    pub path: PathBuf,
    /// Basename of `path`
    pub file_name: String,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, file_name }
    }
}

/// A filename that does not follow the configured convention
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingViolation {
    /// File path where the violation was found
    pub file_path: PathBuf,
    /// Basename that failed the check
    pub file_name: String,
    /// Convention the file was checked against
    pub convention: Convention,
    /// Human-readable description of the violation
    pub message: String,
    /// Conforming rename, when one can be derived
    pub suggested_fix: Option<String>,
}

impl NamingViolation {
    /// Create a violation for `entry` under `convention`
    pub fn new(entry: &FileEntry, convention: Convention) -> Self {
        Self {
            file_path: entry.path.clone(),
            file_name: entry.file_name.clone(),
            convention,
            message: format!(
                "'{}' does not follow {}-case naming",
                entry.file_name,
                convention.as_str()
            ),
            suggested_fix: convention.suggest(&entry.file_name),
        }
    }
}

/// Structured pass/fail outcome of a run, translated into host signals at the boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub passed: bool,
    pub failed_count: usize,
    pub message: String,
}

impl RunResult {
    /// Failure result for a run that aborted before producing a report
    pub fn aborted(message: impl Into<String>) -> Self {
        Self { passed: false, failed_count: 0, message: message.into() }
    }
}

/// Summary statistics for a validation report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Total number of files discovered by the walk
    pub total_files: usize,
    /// Files skipped by the exemption policy
    pub exempt_files: usize,
    /// Files that matched the convention
    pub valid_files: usize,
    /// Total execution time in milliseconds
    pub execution_time_ms: u64,
    /// Timestamp when validation was performed
    pub validated_at: DateTime<Utc>,
}

/// Complete report of a naming check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Convention identifier as configured (may be unrecognized)
    pub convention: String,
    /// All violations, in traversal order
    pub violations: Vec<NamingViolation>,
    /// Summary statistics
    pub summary: ValidationSummary,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new(convention: impl Into<String>) -> Self {
        Self {
            convention: convention.into(),
            violations: Vec::new(),
            summary: ValidationSummary { validated_at: Utc::now(), ..Default::default() },
        }
    }

    /// Record the outcome for one file
    pub fn record(&mut self, outcome: Outcome, violation: impl FnOnce() -> NamingViolation) {
        self.summary.total_files += 1;
        match outcome {
            Outcome::Exempt => self.summary.exempt_files += 1,
            Outcome::Valid => self.summary.valid_files += 1,
            Outcome::Violation => self.violations.push(violation()),
        }
    }

    /// Whether the report contains any violations
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Paths of all violating files, in traversal order
    pub fn violation_paths(&self) -> Vec<PathBuf> {
        self.violations.iter().map(|v| v.file_path.clone()).collect()
    }

    /// Whether `path` was reported as a violation
    pub fn contains_violation(&self, path: impl AsRef<Path>) -> bool {
        self.violations.iter().any(|v| v.file_path == path.as_ref())
    }

    /// Set the execution time
    pub fn set_execution_time(&mut self, duration_ms: u64) {
        self.summary.execution_time_ms = duration_ms;
    }
}

/// Error types that can occur during a run
#[derive(Debug, thiserror::Error)]
pub enum GuardianError {
    /// Configuration input missing or malformed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Directory tree could not be traversed
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be read or written
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Report could not be rendered
    #[error("Report error: {message}")]
    Report { message: String },
}

impl GuardianError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create a filesystem error for `path`
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem { path: path.into(), source }
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report { message: message.into() }
    }
}

/// Result type for Guardian operations
pub type GuardianResult<T> = Result<T, GuardianError>;
