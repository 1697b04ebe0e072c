//! Configuration loading and management for Naming Guardian
//!
//! Architecture: Anti-Corruption Layer - Configuration translates host inputs and YAML files
//! - Raw host inputs (convention string, comma-separated exclusions) become domain values
//! - The standard file registry is an injected value, not global state
//! - Configuration decides which exemption policy the classifier receives

use crate::domain::violations::{Convention, GuardianError, GuardianResult};
use crate::patterns::{ExclusionSet, ExemptionPolicy, NoExemptions, StandardExemptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Host input carrying the convention identifier
pub const CONVENTION_INPUT: &str = "INPUT_CONVENTION";
/// Host input carrying the comma-separated exclusion list
pub const EXCLUDE_INPUT: &str = "INPUT_EXCLUDE";

/// Config file names discovered in the working directory, in priority order
pub const DEFAULT_CONFIG_FILES: [&str; 3] =
    ["naming_guardian.yaml", "naming_guardian.yml", ".naming_guardian.yaml"];

const DEFAULT_STANDARD_FILES: &[&str] = &[
    "README.md",
    "README",
    "LICENSE",
    "CHANGELOG.md",
    "CHANGELOG",
    "CONTRIBUTING.md",
    "CODE_OF_CONDUCT.md",
    "SECURITY.md",
    "Makefile",
    "Dockerfile",
    "Jenkinsfile",
    "Vagrantfile",
    ".gitignore",
    ".gitattributes",
    ".editorconfig",
    ".npmrc",
    ".nvmrc",
    ".dockerignore",
    ".eslintrc",
    ".prettierrc",
    ".babelrc",
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "composer.json",
    "composer.lock",
    "Gemfile",
    "Gemfile.lock",
    "Cargo.toml",
    "Cargo.lock",
    "go.mod",
    "go.sum",
];

/// Well-known filenames that are always exempt from convention checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandardFileRegistry {
    names: BTreeSet<String>,
}

impl StandardFileRegistry {
    /// Build a registry from exact filenames
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    /// Add one more exempt filename
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Exact-match lookup
    pub fn contains(&self, file_name: &str) -> bool {
        self.names.contains(file_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for StandardFileRegistry {
    fn default() -> Self {
        Self::from_names(DEFAULT_STANDARD_FILES.iter().copied())
    }
}

/// Which exemption policy to apply before pattern matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExemptionMode {
    /// Skip registry files and dotfiles
    #[default]
    Standard,
    /// Check every file
    None,
}

impl ExemptionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::None => "none",
        }
    }
}

/// Main configuration structure for Naming Guardian
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: String,
    /// Convention identifier; unrecognized values are checked as kebab-case
    #[serde(default = "default_convention")]
    pub convention: String,
    /// Directory basenames to skip
    #[serde(default)]
    pub exclude: ExclusionSet,
    /// Exemption policy selector
    #[serde(default)]
    pub exemptions: ExemptionMode,
    /// Filenames exempt under the standard policy
    #[serde(default)]
    pub standard_files: StandardFileRegistry,
}

impl NamingConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GuardianResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            GuardianError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            GuardianError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> GuardianResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| GuardianError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Look for one of the default config files in `dir`
    pub fn discover<P: AsRef<Path>>(dir: P) -> GuardianResult<Option<Self>> {
        for name in DEFAULT_CONFIG_FILES {
            let candidate = dir.as_ref().join(name);
            if candidate.is_file() {
                tracing::debug!("Using configuration from {}", candidate.display());
                return Self::load_from_file(candidate).map(Some);
            }
        }
        Ok(None)
    }

    /// Build configuration from the two scalar host inputs
    pub fn from_inputs(convention: &str, exclude: &str) -> Self {
        Self {
            convention: convention.trim().to_string(),
            exclude: ExclusionSet::parse(exclude),
            ..Self::default()
        }
    }

    /// Read host inputs from the environment, GitHub Actions style
    pub fn from_env() -> GuardianResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read host inputs through `lookup`.
    ///
    /// The convention input is required; a missing exclusion input is treated
    /// as the empty string.
    pub fn from_lookup<F>(lookup: F) -> GuardianResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let convention = lookup(CONVENTION_INPUT).ok_or_else(|| {
            GuardianError::config(format!("Input required and not supplied: {CONVENTION_INPUT}"))
        })?;
        let exclude = lookup(EXCLUDE_INPUT).unwrap_or_default();

        let config = Self::from_inputs(&convention, &exclude);
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency and correctness
    pub fn validate(&self) -> GuardianResult<()> {
        if !["1.0"].contains(&self.version.as_str()) {
            return Err(GuardianError::config(format!(
                "Unsupported configuration version: {}. Supported versions: 1.0",
                self.version
            )));
        }

        if self.standard_files.names.iter().any(|name| name.trim().is_empty()) {
            return Err(GuardianError::config("Standard file names must not be empty"));
        }

        Ok(())
    }

    /// Convention to check against, after fallback
    pub fn effective_convention(&self) -> Convention {
        Convention::parse(&self.convention)
    }

    /// Exemption policy selected by `exemptions`
    pub fn exemption_policy(&self) -> Box<dyn ExemptionPolicy> {
        match self.exemptions {
            ExemptionMode::Standard => {
                Box::new(StandardExemptions::new(self.standard_files.clone()))
            }
            ExemptionMode::None => Box::new(NoExemptions),
        }
    }

    /// Convert to YAML for display
    pub fn to_yaml(&self) -> GuardianResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GuardianError::config(format!("Failed to serialize config: {e}")))
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            convention: default_convention(),
            exclude: ExclusionSet::default(),
            exemptions: ExemptionMode::default(),
            standard_files: StandardFileRegistry::default(),
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_convention() -> String {
    Convention::Kebab.as_str().to_string()
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: NamingConfig,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self { config: NamingConfig::default() }
    }

    /// Set the convention identifier
    pub fn convention(mut self, convention: impl Into<String>) -> Self {
        self.config.convention = convention.into();
        self
    }

    /// Replace the exclusion set
    pub fn exclude(mut self, exclude: ExclusionSet) -> Self {
        self.config.exclude = exclude;
        self
    }

    /// Select the exemption policy
    pub fn exemptions(mut self, mode: ExemptionMode) -> Self {
        self.config.exemptions = mode;
        self
    }

    /// Replace the standard file registry
    pub fn standard_files(mut self, registry: StandardFileRegistry) -> Self {
        self.config.standard_files = registry;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> GuardianResult<NamingConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
