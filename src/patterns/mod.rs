//! Filename classification against naming conventions
//!
//! Architectural Principle: Service Layer - The classifier orchestrates exemption and pattern checks
//! - Each convention maps to one compiled regex, built once per process
//! - Exemption rules are a pluggable capability injected at construction
//! - Directory traversal lives in the walker, classification never touches the filesystem

pub mod walker;

use crate::config::StandardFileRegistry;
use crate::domain::violations::{Convention, Outcome};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::path::Path;

pub use walker::{ExclusionSet, TreeWalker};

/// Pattern source for kebab-case filenames
pub const KEBAB_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*\.[a-z0-9]+$";
/// Pattern source for snake_case filenames
pub const SNAKE_PATTERN: &str = r"^[a-z0-9]+(_[a-z0-9]+)*\.[a-z0-9]+$";
/// Pattern source for camelCase filenames
pub const CAMEL_PATTERN: &str = r"^[a-z0-9]+([A-Z][a-z0-9]+)*\.[a-z0-9]+$";

lazy_static! {
    static ref KEBAB_REGEX: Regex = Regex::new(KEBAB_PATTERN).expect("kebab pattern is valid");
    static ref SNAKE_REGEX: Regex = Regex::new(SNAKE_PATTERN).expect("snake pattern is valid");
    static ref CAMEL_REGEX: Regex = Regex::new(CAMEL_PATTERN).expect("camel pattern is valid");
}

/// Compiled matching rule for `convention`
pub fn convention_regex(convention: Convention) -> &'static Regex {
    match convention {
        Convention::Kebab => &KEBAB_REGEX,
        Convention::Snake => &SNAKE_REGEX,
        Convention::Camel => &CAMEL_REGEX,
    }
}

/// Decides whether a filename is exempt from convention checks
pub trait ExemptionPolicy: fmt::Debug + Send + Sync {
    /// Whether `file_name` (a basename) skips the pattern check
    fn is_exempt(&self, file_name: &str) -> bool;

    /// Short name for logs and reports
    fn name(&self) -> &'static str;
}

/// Every file is checked against the convention
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExemptions;

impl ExemptionPolicy for NoExemptions {
    fn is_exempt(&self, _file_name: &str) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Well-known files and dotfiles are never checked
#[derive(Debug, Clone, Default)]
pub struct StandardExemptions {
    registry: StandardFileRegistry,
}

impl StandardExemptions {
    pub fn new(registry: StandardFileRegistry) -> Self {
        Self { registry }
    }
}

impl ExemptionPolicy for StandardExemptions {
    fn is_exempt(&self, file_name: &str) -> bool {
        self.registry.contains(file_name) || file_name.starts_with('.')
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

/// Classifies filenames for a single convention
#[derive(Debug)]
pub struct Classifier {
    convention: Convention,
    regex: &'static Regex,
    policy: Box<dyn ExemptionPolicy>,
}

impl Classifier {
    /// Create a classifier for `convention` using the given exemption policy
    pub fn new(convention: Convention, policy: Box<dyn ExemptionPolicy>) -> Self {
        tracing::debug!(
            "Classifier for {}-case with '{}' exemptions",
            convention.as_str(),
            policy.name()
        );
        Self { convention, regex: convention_regex(convention), policy }
    }

    /// Classifier with the standard exemption registry
    pub fn with_standard_exemptions(convention: Convention) -> Self {
        Self::new(convention, Box::new(StandardExemptions::default()))
    }

    /// Classifier that checks every file
    pub fn without_exemptions(convention: Convention) -> Self {
        Self::new(convention, Box::new(NoExemptions))
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn policy(&self) -> &dyn ExemptionPolicy {
        self.policy.as_ref()
    }

    /// Classify the basename of `path`
    pub fn classify<P: AsRef<Path>>(&self, path: P) -> Outcome {
        let file_name = path
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        self.classify_name(&file_name)
    }

    /// Classify a bare filename
    pub fn classify_name(&self, file_name: &str) -> Outcome {
        if self.policy.is_exempt(file_name) {
            Outcome::Exempt
        } else if self.regex.is_match(file_name) {
            Outcome::Valid
        } else {
            Outcome::Violation
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("my-file.txt", Outcome::Valid, Outcome::Violation, Outcome::Violation)]
    #[case("my_file.txt", Outcome::Violation, Outcome::Valid, Outcome::Violation)]
    #[case("myFile.txt", Outcome::Violation, Outcome::Violation, Outcome::Valid)]
    #[case("MyFile.txt", Outcome::Violation, Outcome::Violation, Outcome::Violation)]
    #[case("file.txt", Outcome::Valid, Outcome::Valid, Outcome::Valid)]
    #[case("v2-notes.md", Outcome::Valid, Outcome::Violation, Outcome::Violation)]
    fn test_convention_boundaries(
        #[case] name: &str,
        #[case] kebab: Outcome,
        #[case] snake: Outcome,
        #[case] camel: Outcome,
    ) {
        assert_eq!(Classifier::without_exemptions(Convention::Kebab).classify_name(name), kebab);
        assert_eq!(Classifier::without_exemptions(Convention::Snake).classify_name(name), snake);
        assert_eq!(Classifier::without_exemptions(Convention::Camel).classify_name(name), camel);
    }

    #[rstest]
    #[case("Makefile")]
    #[case("archive.tar.gz")]
    #[case("notes.MD")]
    #[case("double--dash.txt")]
    #[case("trailing-.txt")]
    #[case("my-file.")]
    #[case("myFILE.txt")]
    fn test_always_violations(#[case] name: &str) {
        for convention in Convention::ALL {
            let classifier = Classifier::without_exemptions(convention);
            assert_eq!(classifier.classify_name(name), Outcome::Violation, "{name} under {convention}");
        }
    }

    #[rstest]
    #[case("README.md")]
    #[case("Cargo.lock")]
    #[case("package-lock.json")]
    #[case(".gitignore")]
    #[case(".env.local")]
    #[case(".SomethingOdd")]
    fn test_exemption_supersedes_pattern(#[case] name: &str) {
        for convention in Convention::ALL {
            let classifier = Classifier::with_standard_exemptions(convention);
            assert_eq!(classifier.classify_name(name), Outcome::Exempt);
        }
    }

    #[test]
    fn test_no_exemptions_checks_everything() {
        let classifier = Classifier::without_exemptions(Convention::Kebab);
        assert_eq!(classifier.classify_name("README.md"), Outcome::Violation);
        assert_eq!(classifier.classify_name(".gitignore"), Outcome::Violation);
        // a registry name that happens to conform is simply valid
        assert_eq!(classifier.classify_name("go.mod"), Outcome::Valid);
    }

    #[test]
    fn test_custom_registry() {
        let registry = StandardFileRegistry::from_names(["BUILD.bazel"]);
        let classifier = Classifier::new(Convention::Kebab, Box::new(StandardExemptions::new(registry)));

        assert_eq!(classifier.classify_name("BUILD.bazel"), Outcome::Exempt);
        assert_eq!(classifier.classify_name("README.md"), Outcome::Violation);
        assert_eq!(classifier.classify_name(".hidden"), Outcome::Exempt);
    }

    #[test]
    fn test_extended_default_registry() {
        let registry = StandardFileRegistry::default().with_name("BUILD.bazel");
        let classifier = Classifier::new(Convention::Snake, Box::new(StandardExemptions::new(registry)));

        assert_eq!(classifier.classify_name("BUILD.bazel"), Outcome::Exempt);
        assert_eq!(classifier.classify_name("README.md"), Outcome::Exempt);
        assert_eq!(classifier.classify_name("BUILD.gn"), Outcome::Violation);
    }

    #[test]
    fn test_classify_uses_basename() {
        let classifier = Classifier::with_standard_exemptions(Convention::Snake);
        assert_eq!(classifier.classify("Some-Dir/my_file.rs"), Outcome::Valid);
        assert_eq!(classifier.classify("some_dir/README.md"), Outcome::Exempt);
        assert_eq!(classifier.classify("some_dir/Bad.rs"), Outcome::Violation);
    }
}
