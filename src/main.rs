//! Naming Guardian CLI - Command-line interface for filename convention checks
//!
//! CDD Principle: Application Layer - CLI coordinates user interactions with domain services
//! - Translates user commands and CI inputs to domain operations
//! - Handles external concerns like process exit codes and terminal output
//! - Provides clean separation between user interface and business logic

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use naming_guardian::config::{CONVENTION_INPUT, EXCLUDE_INPUT};
use naming_guardian::patterns::{CAMEL_PATTERN, KEBAB_PATTERN, SNAKE_PATTERN};
use naming_guardian::{
    run_with_host, Convention, ConsoleHost, ExclusionSet, ExemptionMode, GitHubActionsHost,
    GuardianResult, HostReporter, NamingConfig, NamingValidator, OutputFormat, ReportFormatter,
    ReportOptions,
};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Naming Guardian - Filename convention enforcement
#[derive(Parser)]
#[command(name = "naming-guardian")]
#[command(version = "0.1.0")]
#[command(about = "Check that every filename in a repository follows a naming convention")]
#[command(long_about = "Naming Guardian walks a directory tree and verifies every filename against kebab-case, snake_case or camelCase, reporting violations and failing the build when any are found. Designed for CI/CD integration.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every filename under a directory
    Check {
        /// Root directory to walk
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Naming convention (kebab, snake, camel); unknown values fall back to kebab
        #[arg(long, env = CONVENTION_INPUT)]
        convention: Option<String>,

        /// Comma-separated directory names to skip
        #[arg(long, env = EXCLUDE_INPUT)]
        exclude: Option<String>,

        /// Check dotfiles and well-known files too
        #[arg(long)]
        no_exemptions: bool,

        /// Report format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Maximum number of violations to list
        #[arg(long)]
        max_violations: Option<usize>,

        /// Signal the result through a CI host instead of printing a report
        #[arg(long, value_enum)]
        host: Option<HostArg>,
    },

    /// Classify filenames without walking the filesystem
    Classify {
        /// Filenames to classify
        #[arg(required = true)]
        names: Vec<String>,

        /// Naming convention (kebab, snake, camel)
        #[arg(long, default_value = "kebab")]
        convention: String,

        /// Check dotfiles and well-known files too
        #[arg(long)]
        no_exemptions: bool,
    },

    /// List supported conventions and their patterns
    Conventions,

    /// Validate configuration file
    ValidateConfig {
        /// Configuration file to validate
        config_file: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
    Github,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Github => OutputFormat::GitHub,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum HostArg {
    Console,
    Github,
}

/// Settings for the `check` command after CLI parsing
struct CheckArgs {
    config_path: Option<PathBuf>,
    root: PathBuf,
    convention: Option<String>,
    exclude: Option<String>,
    no_exemptions: bool,
    format: OutputFormatArg,
    max_violations: Option<usize>,
    host: Option<HostArg>,
    use_colors: bool,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run_command(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Commands::Check {
            root,
            convention,
            exclude,
            no_exemptions,
            format,
            max_violations,
            host,
        } => run_check(CheckArgs {
            config_path: cli.config,
            root,
            convention,
            exclude,
            no_exemptions,
            format,
            max_violations,
            host,
            use_colors: !cli.no_color,
        }),
        Commands::Classify { names, convention, no_exemptions } => {
            Ok(run_classify(&names, &convention, no_exemptions))
        }
        Commands::Conventions => Ok(run_list_conventions()),
        Commands::ValidateConfig { config_file } => Ok(run_validate_config(config_file.or(cli.config))),
    }
}

/// Resolve configuration: explicit file, then discovered file, then defaults,
/// with CLI/host inputs layered on top
fn load_config(
    config_path: Option<&Path>,
    convention: Option<&str>,
    exclude: Option<&str>,
    no_exemptions: bool,
) -> GuardianResult<NamingConfig> {
    let mut config = match config_path {
        Some(path) => NamingConfig::load_from_file(path)?,
        None => NamingConfig::discover(".")?.unwrap_or_default(),
    };

    if let Some(convention) = convention {
        config.convention = convention.trim().to_string();
    }
    if let Some(exclude) = exclude {
        config.exclude = ExclusionSet::parse(exclude);
    }
    if no_exemptions {
        config.exemptions = ExemptionMode::None;
    }

    config.validate()?;
    Ok(config)
}

fn run_check(args: CheckArgs) -> anyhow::Result<i32> {
    let load = || {
        load_config(
            args.config_path.as_deref(),
            args.convention.as_deref(),
            args.exclude.as_deref(),
            args.no_exemptions,
        )
    };

    if let Some(host) = args.host {
        let mut host: Box<dyn HostReporter> = match host {
            HostArg::Console => Box::new(ConsoleHost::new()),
            HostArg::Github => Box::new(GitHubActionsHost::from_env()),
        };
        let result = run_with_host(load, &args.root, host.as_mut());
        return Ok(if result.passed { 0 } else { 1 });
    }

    let config = load().context("failed to load configuration")?;
    let formatter = ReportFormatter::new(ReportOptions {
        use_colors: args.use_colors,
        max_violations: args.max_violations,
        ..Default::default()
    });
    let validator = NamingValidator::new_with_config(config)?.with_report_formatter(formatter);

    let report = validator
        .validate_directory(&args.root)
        .with_context(|| format!("failed to check {}", args.root.display()))?;

    let formatted = validator.format_report(&report, args.format.into())?;
    print!("{formatted}");

    Ok(if report.has_violations() { 1 } else { 0 })
}

fn run_classify(names: &[String], convention: &str, no_exemptions: bool) -> i32 {
    let mut config = NamingConfig::from_inputs(convention, "");
    if no_exemptions {
        config.exemptions = ExemptionMode::None;
    }
    let convention = config.effective_convention();
    let classifier = naming_guardian::Classifier::new(convention, config.exemption_policy());

    let mut violations = 0;
    for name in names {
        let outcome = classifier.classify(name);
        if outcome.is_violation() {
            violations += 1;
            match convention.suggest(name) {
                Some(fix) => println!("❌ {name}: {} (rename to {fix})", outcome.as_str()),
                None => println!("❌ {name}: {}", outcome.as_str()),
            }
        } else {
            println!("✅ {name}: {}", outcome.as_str());
        }
    }

    if violations > 0 { 1 } else { 0 }
}

fn run_list_conventions() -> i32 {
    println!("📋 Supported Conventions\n");

    for convention in Convention::ALL {
        let pattern = match convention {
            Convention::Kebab => KEBAB_PATTERN,
            Convention::Snake => SNAKE_PATTERN,
            Convention::Camel => CAMEL_PATTERN,
        };
        let default_marker = if convention == Convention::default() { " (default)" } else { "" };
        println!("  🔍 {}{}", convention.as_str(), default_marker);
        println!("     pattern: {pattern}");
        println!("     example: {}", convention.example());
    }

    0
}

fn run_validate_config(config_path: Option<PathBuf>) -> i32 {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from("naming_guardian.yaml"));

    println!("Validating configuration: {}", config_path.display());

    match NamingConfig::load_from_file(&config_path) {
        Ok(config) => {
            println!("✅ Configuration is valid");

            let recognized = Convention::recognize(&config.convention).is_some();
            println!("📊 Configuration summary:");
            println!(
                "  Convention: {}{}",
                config.convention,
                if recognized { "" } else { " (unrecognized, checked as kebab)" }
            );
            println!("  Excluded directories: {}", config.exclude.len());
            println!("  Exemptions: {}", config.exemptions.as_str());
            println!("  Standard files: {}", config.standard_files.len());

            0
        }
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {e}");
            1
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
