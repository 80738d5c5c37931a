//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate configuration discovery
//! - Output parsing helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that influence the CLI and must not leak in from
/// the developer's shell.
const DOCPATH_ENV_VARS: [&str; 5] = [
    "DOCPATH_CONFIG",
    "DOCPATH_DEFAULT_PROVIDER",
    "DOCPATH_ROOTS",
    "DOCPATH_OUTPUT_FORMAT",
    "DOCPATH_LOG_MODE",
];

/// Test environment with an isolated home and working directory.
///
/// Commands run from `work_dir` with `HOME` pointing at `home_dir`, so no
/// user or project configuration outside the temporary directory is seen.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Fake home directory
    pub home_dir: PathBuf,
    /// Working directory for commands
    pub work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home_dir = temp_dir.path().join("home");
        let work_dir = temp_dir.path().join("work");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home dir");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            temp_dir,
            home_dir,
            work_dir,
        }
    }

    /// Get a command builder for the docpath binary with an isolated
    /// environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("docpath").expect("Failed to find docpath binary");
        cmd.current_dir(&self.work_dir).env("HOME", &self.home_dir);
        for var in DOCPATH_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write the project configuration file in the working directory.
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        let path = self.work_dir.join("docpath.yaml");
        std::fs::write(&path, contents).expect("Failed to write project config");
        path
    }

    /// Write the user configuration file under the fake home directory.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home_dir.join(".docpath");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Write an arbitrary file under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run a command expected to succeed and return its trimmed stdout.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run docpath");

        assert!(
            output.status.success(),
            "docpath {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// Run a command with `--format json` and parse its output.
    pub fn json_of(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let stdout = self.stdout_of(&full);
        serde_json::from_str(&stdout).expect("Output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
