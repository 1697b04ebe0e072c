//! Host reporting boundary
//!
//! Architecture: Ports and Adapters - The engine talks to its CI host through one narrow port
//! - HostReporter is the port: step outputs, a failure signal, an informational line
//! - ConsoleHost and GitHubActionsHost adapt it to a terminal and to GitHub Actions
//! - RecordingHost keeps everything in memory so the boundary is testable without a host

use crate::domain::violations::{GuardianResult, RunResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Output key carrying the pass/fail flag
pub const PASSED_OUTPUT: &str = "passed";
/// Output key carrying the violation count
pub const FAILED_COUNT_OUTPUT: &str = "failed_count";

/// Signals a CI host understands
pub trait HostReporter {
    /// Set a named step output
    fn set_output(&mut self, key: &str, value: &str) -> GuardianResult<()>;

    /// Mark the run as failed with a human-readable message
    fn fail(&mut self, message: &str);

    /// Emit an informational line
    fn info(&mut self, message: &str);
}

/// Publish a run result: both outputs, then either `fail` or `info`
pub fn publish(host: &mut dyn HostReporter, result: &RunResult) -> GuardianResult<()> {
    host.set_output(PASSED_OUTPUT, &result.passed.to_string())?;
    host.set_output(FAILED_COUNT_OUTPUT, &result.failed_count.to_string())?;

    if result.passed {
        host.info(&format!("✅ {}", result.message));
    } else {
        host.fail(&format!("❌ {}", result.message));
    }
    Ok(())
}

/// Terminal host: outputs on stdout, failures on stderr
#[derive(Debug, Default)]
pub struct ConsoleHost;

impl ConsoleHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostReporter for ConsoleHost {
    fn set_output(&mut self, key: &str, value: &str) -> GuardianResult<()> {
        println!("{key}={value}");
        Ok(())
    }

    fn fail(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn info(&mut self, message: &str) {
        println!("{message}");
    }
}

/// GitHub Actions host: outputs go to `$GITHUB_OUTPUT`, failures become `::error::` commands
#[derive(Debug, Default)]
pub struct GitHubActionsHost {
    output_file: Option<PathBuf>,
}

impl GitHubActionsHost {
    /// Host writing outputs to `$GITHUB_OUTPUT` when set, stdout otherwise
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from))
    }

    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }
}

impl HostReporter for GitHubActionsHost {
    fn set_output(&mut self, key: &str, value: &str) -> GuardianResult<()> {
        match &self.output_file {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{key}={value}")?;
            }
            None => println!("{key}={value}"),
        }
        Ok(())
    }

    fn fail(&mut self, message: &str) {
        println!("::error::{}", escape_command_data(message));
    }

    fn info(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Escape workflow command data so multi-line messages survive
fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// In-memory host
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    pub outputs: Vec<(String, String)>,
    pub failures: Vec<String>,
    pub infos: Vec<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value set for `key`
    pub fn output(&self, key: &str) -> Option<&str> {
        self.outputs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl HostReporter for RecordingHost {
    fn set_output(&mut self, key: &str, value: &str) -> GuardianResult<()> {
        self.outputs.push((key.to_string(), value.to_string()));
        Ok(())
    }

    fn fail(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_publish_success() {
        let mut host = RecordingHost::new();
        let result = RunResult { passed: true, failed_count: 0, message: "ok".to_string() };

        publish(&mut host, &result).unwrap();

        assert_eq!(host.output(PASSED_OUTPUT), Some("true"));
        assert_eq!(host.output(FAILED_COUNT_OUTPUT), Some("0"));
        assert!(!host.failed());
        assert_eq!(host.infos, vec!["✅ ok".to_string()]);
    }

    #[test]
    fn test_publish_failure() {
        let mut host = RecordingHost::new();
        let result = RunResult { passed: false, failed_count: 2, message: "bad\na\nb".to_string() };

        publish(&mut host, &result).unwrap();

        assert_eq!(host.output(PASSED_OUTPUT), Some("false"));
        assert_eq!(host.output(FAILED_COUNT_OUTPUT), Some("2"));
        assert_eq!(host.failures, vec!["❌ bad\na\nb".to_string()]);
        assert!(host.infos.is_empty());
    }

    #[test]
    fn test_github_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("github_output");
        let mut host = GitHubActionsHost::new(Some(output_path.clone()));

        host.set_output(PASSED_OUTPUT, "false").unwrap();
        host.set_output(FAILED_COUNT_OUTPUT, "3").unwrap();

        let written = fs::read_to_string(output_path).unwrap();
        assert_eq!(written, "passed=false\nfailed_count=3\n");
    }

    #[test]
    fn test_escape_command_data() {
        assert_eq!(escape_command_data("a\nb%c\r"), "a%0Ab%25c%0D");
    }
}
