//! End-to-end naming checks over on-disk trees

use naming_guardian::{
    report, run_with_host, walk, Classifier, ConfigBuilder, Convention, ExclusionSet,
    ExemptionMode, GuardianResult, NamingConfig, NamingValidator, Outcome, RecordingHost,
};
use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn tree(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for file in files {
        let path = temp_dir.path().join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }
    temp_dir
}

fn sorted_violations(config: NamingConfig, root: &Path) -> GuardianResult<Vec<PathBuf>> {
    let validator = NamingValidator::new_with_config(config)?;
    let mut paths = validator.validate_directory(root)?.violation_paths();
    paths.sort();
    Ok(paths)
}

#[test]
fn standard_exemptions_skip_readme() -> GuardianResult<()> {
    let root = tree(&["README.md", "my-file.txt", "BadFile.TXT"]);
    let config = ConfigBuilder::new().convention("kebab").build()?;

    let validator = NamingValidator::new_with_config(config)?;
    let result = validator.check(root.path())?;

    assert!(!result.passed);
    assert_eq!(result.failed_count, 1);
    assert_eq!(result.message, "Found files that violate kebab-case naming:\nBadFile.TXT");
    Ok(())
}

#[test]
fn no_exemptions_checks_readme() -> GuardianResult<()> {
    let root = tree(&["README.md", "my-file.txt", "BadFile.TXT"]);
    let config = ConfigBuilder::new().exemptions(ExemptionMode::None).build()?;

    let violations = sorted_violations(config, root.path())?;

    assert_eq!(violations, vec![PathBuf::from("BadFile.TXT"), PathBuf::from("README.md")]);
    Ok(())
}

#[test]
fn excluded_directory_is_never_evaluated() -> GuardianResult<()> {
    let root = tree(&["node_modules/anything.js", "node_modules/deep/Whatever.JS", "src/good-name.js"]);
    let config = NamingConfig::from_inputs("kebab", "node_modules");

    let validator = NamingValidator::new_with_config(config)?;
    let report = validator.validate_directory(root.path())?;

    assert_eq!(report.summary.total_files, 1);
    assert!(!report.has_violations());
    assert!(validator.check(root.path())?.passed);
    Ok(())
}

#[test]
fn unknown_convention_is_checked_as_kebab() -> GuardianResult<()> {
    let root = tree(&["a-b.js"]);
    let config = NamingConfig::from_inputs("weird-unknown", "");

    let result = NamingValidator::new_with_config(config)?.check(root.path())?;

    assert!(result.passed);
    assert_eq!(result.message, "All files follow weird-unknown-case naming convention.");
    Ok(())
}

#[test]
fn empty_tree_passes() -> GuardianResult<()> {
    let root = TempDir::new().unwrap();

    let result = NamingValidator::new()?.check(root.path())?;

    assert!(result.passed);
    assert_eq!(result.failed_count, 0);
    Ok(())
}

#[test]
fn repeated_runs_are_identical() -> GuardianResult<()> {
    let root = tree(&["a/One.txt", "b/two_2.md", "c/d/three-3.rs", "Four"]);
    let config = NamingConfig::from_inputs("snake", "");

    let first = sorted_violations(config.clone(), root.path())?;
    let second = sorted_violations(config, root.path())?;

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    Ok(())
}

#[test]
fn pruning_covers_every_depth() -> GuardianResult<()> {
    let root = tree(&[
        "build/Top.txt",
        "pkg/build/Nested.txt",
        "pkg/a/b/build/Deep.txt",
        "pkg/a/b/ok-file.txt",
    ]);

    let mut files = walk(root.path(), &ExclusionSet::parse("build"))?;
    files.sort();

    assert_eq!(files, vec![Path::new("pkg").join("a").join("b").join("ok-file.txt")]);
    Ok(())
}

#[test]
fn empty_exclusion_entry_prunes_nothing() -> GuardianResult<()> {
    let root = tree(&["src/lib-file.rs", "docs/guide.md"]);

    let files = walk(root.path(), &ExclusionSet::parse(""))?;
    assert_eq!(files.len(), 2);
    Ok(())
}

#[rstest]
#[case("my-file.txt")]
#[case("my_file.txt")]
#[case("myFile.txt")]
#[case("MyFile.txt")]
#[case("README.md")]
#[case(".env")]
#[case("no-extension")]
fn unknown_convention_matches_kebab(#[case] name: &str) {
    let fallback = Classifier::with_standard_exemptions(Convention::parse("definitely-not"));
    let kebab = Classifier::with_standard_exemptions(Convention::Kebab);
    assert_eq!(fallback.classify_name(name), kebab.classify_name(name));
}

#[rstest]
#[case(vec![])]
#[case(vec!["a.txt"])]
#[case(vec!["a.txt", "b/C.txt", "d/e/F.txt"])]
fn count_is_consistent(#[case] paths: Vec<&str>) {
    let violations: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
    let result = report(&violations, "kebab");

    assert_eq!(result.failed_count, violations.len());
    assert_eq!(result.passed, result.failed_count == 0);
}

#[test]
fn exempt_files_never_appear_as_violations() -> GuardianResult<()> {
    let root = tree(&["LICENSE", "Cargo.lock", ".hidden", "Dockerfile", "src/.Weird_Name"]);

    for convention in ["kebab", "snake", "camel"] {
        let config = NamingConfig::from_inputs(convention, "");
        assert!(sorted_violations(config, root.path())?.is_empty());
    }
    Ok(())
}

#[test]
fn host_receives_outputs_and_failure() {
    let root = tree(&["README.md", "my-file.txt", "BadFile.TXT"]);
    let mut host = RecordingHost::new();

    let result = run_with_host(|| Ok(NamingConfig::from_inputs("kebab", "")), root.path(), &mut host);

    assert!(!result.passed);
    assert_eq!(host.output("passed"), Some("false"));
    assert_eq!(host.output("failed_count"), Some("1"));
    assert_eq!(host.failures.len(), 1);
    assert!(host.failures[0].ends_with("BadFile.TXT"));
}

#[test]
fn host_receives_success_line() {
    let root = tree(&["good_name.py"]);
    let mut host = RecordingHost::new();

    let result = run_with_host(|| Ok(NamingConfig::from_inputs("snake", "")), root.path(), &mut host);

    assert!(result.passed);
    assert_eq!(host.output("passed"), Some("true"));
    assert_eq!(host.output("failed_count"), Some("0"));
    assert!(!host.failed());
    assert_eq!(host.infos.len(), 1);
}

#[test]
fn missing_root_fails_through_host() {
    let root = TempDir::new().unwrap();
    let mut host = RecordingHost::new();

    let result = run_with_host(
        || Ok(NamingConfig::default()),
        root.path().join("not-here"),
        &mut host,
    );

    assert!(!result.passed);
    assert!(host.failed());
}

#[test]
fn classify_outcomes_with_nested_paths() {
    let classifier = Classifier::with_standard_exemptions(Convention::Camel);
    assert_eq!(classifier.classify(Path::new("some-dir").join("myFile.ts")), Outcome::Valid);
    assert_eq!(classifier.classify(Path::new("some_dir").join("my-file.ts")), Outcome::Violation);
}

#[test]
fn file_root_aborts_through_host() {
    let root = tree(&["good-file.txt"]);
    let mut host = RecordingHost::new();

    let result = run_with_host(
        || Ok(NamingConfig::default()),
        root.path().join("good-file.txt"),
        &mut host,
    );

    assert!(!result.passed);
    assert_eq!(result.failed_count, 0);
    assert!(result.message.contains("Filesystem error"));
    assert_eq!(host.output("passed"), Some("false"));
    assert!(host.failed());
}

#[cfg(unix)]
#[test]
fn linked_excluded_directory_is_never_evaluated() -> GuardianResult<()> {
    let store = tree(&["Bad_Package/IndexFile.JS"]);
    let root = tree(&["src/good-name.js"]);
    std::os::unix::fs::symlink(store.path(), root.path().join("node_modules"))?;

    let config = NamingConfig::from_inputs("kebab", "node_modules");
    let validator = NamingValidator::new_with_config(config)?;
    let report = validator.validate_directory(root.path())?;

    assert_eq!(report.summary.total_files, 1);
    assert!(!report.has_violations());
    Ok(())
}
