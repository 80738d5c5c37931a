//! Integration tests for global CLI options and configuration sources.
//!
//! These tests verify global flags and environment variables that affect
//! all commands, including:
//! - --verbose and --quiet
//! - --format and DOCPATH_OUTPUT_FORMAT
//! - --config and DOCPATH_CONFIG
//! - Precedence rules (flags > env vars > config files > defaults)

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Verbose / Quiet
// ============================================================================

/// Test --verbose writes library diagnostics to stderr.
#[test]
fn test_verbose_flag_logs_normalization() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "normalize", r"a\b"])
        .assert()
        .success()
        .stdout("a/b\n")
        .stderr(predicate::str::contains("TRACE: normalized"));
}

/// Test that without --verbose nothing is logged.
#[test]
fn test_default_run_is_silent_on_stderr() {
    let env = TestEnv::new();

    env.command()
        .args(["normalize", r"a\b"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

/// Test DOCPATH_LOG_MODE enables verbose logging without a flag.
#[test]
fn test_log_mode_env() {
    let env = TestEnv::new();

    env.command()
        .env("DOCPATH_LOG_MODE", "verbose")
        .args(["normalize", "a"])
        .assert()
        .success()
        .stderr(predicate::str::contains("TRACE"));
}

// ============================================================================
// Output format
// ============================================================================

/// Test --format json produces parseable JSON.
#[test]
fn test_format_flag_json() {
    let env = TestEnv::new();
    let json = env.json_of(&["normalize", "/site/"]);

    assert_eq!(json["path"], "/site");
    assert_eq!(json["kind"], "directory");
}

/// Test an unknown format is a usage error.
#[test]
fn test_format_flag_rejects_unknown() {
    let env = TestEnv::new();

    env.command()
        .args(["--format", "xml", "normalize", "a"])
        .assert()
        .code(2);
}

/// Test DOCPATH_OUTPUT_FORMAT selects JSON.
#[test]
fn test_output_format_env() {
    let env = TestEnv::new();

    env.command()
        .env("DOCPATH_OUTPUT_FORMAT", "json")
        .args(["normalize", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"path\": \"a\""));
}

/// Test --format overrides the configured output format.
#[test]
fn test_format_flag_overrides_config() {
    let env = TestEnv::new();
    env.write_project_config("output_format: json\n");

    assert_eq!(env.stdout_of(&["--format", "text", "normalize", "a"]), "a");
}

// ============================================================================
// Configuration sources
// ============================================================================

/// Test the project config supplies the default provider.
#[test]
fn test_project_config_default_provider() {
    let env = TestEnv::new();
    env.write_project_config("default_provider: input\n");

    assert_eq!(env.stdout_of(&["normalize", "/site"]), "/site [input]");
}

/// Test the user config applies when no project config exists.
#[test]
fn test_user_config_default_provider() {
    let env = TestEnv::new();
    env.write_user_config("default_provider: home\n");

    assert_eq!(env.stdout_of(&["normalize", "/site"]), "/site [home]");
}

/// Test the project config overrides the user config.
#[test]
fn test_project_config_overrides_user_config() {
    let env = TestEnv::new();
    env.write_user_config("default_provider: home\n");
    env.write_project_config("default_provider: project\n");

    assert_eq!(env.stdout_of(&["normalize", "/site"]), "/site [project]");
}

/// Test an explicit --config overrides discovered files.
#[test]
fn test_explicit_config_overrides_project_config() {
    let env = TestEnv::new();
    env.write_project_config("default_provider: project\n");
    let explicit = env.write_file("explicit.yaml", "default_provider: explicit\n");

    let output = env
        .command()
        .arg("--config")
        .arg(&explicit)
        .args(["normalize", "/site"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "/site [explicit]");
}

/// Test DOCPATH_CONFIG behaves like --config.
#[test]
fn test_config_env_var() {
    let env = TestEnv::new();
    let explicit = env.write_file("explicit.yaml", "default_provider: explicit\n");

    env.command()
        .env("DOCPATH_CONFIG", &explicit)
        .args(["normalize", "/site"])
        .assert()
        .success()
        .stdout("/site [explicit]\n");
}

/// Test DOCPATH_DEFAULT_PROVIDER overrides config files.
#[test]
fn test_provider_env_overrides_files() {
    let env = TestEnv::new();
    env.write_project_config("default_provider: project\n");

    env.command()
        .env("DOCPATH_DEFAULT_PROVIDER", "env")
        .args(["normalize", "/site"])
        .assert()
        .success()
        .stdout("/site [env]\n");
}

/// Test an explicit provider flag beats every configured default.
#[test]
fn test_provider_flag_beats_env() {
    let env = TestEnv::new();

    env.command()
        .env("DOCPATH_DEFAULT_PROVIDER", "env")
        .args(["normalize", "--provider", "flag", "/site"])
        .assert()
        .success()
        .stdout("/site [flag]\n");
}

/// Test the configured default provider tags only the base of a combination,
/// so an untagged absolute operand falls back to the base's provider.
#[test]
fn test_default_provider_leaves_combined_operand_untagged() {
    let env = TestEnv::new();

    env.command()
        .env("DOCPATH_DEFAULT_PROVIDER", "input")
        .args(["combine", "--base-provider", "first", "/assets", "/other"])
        .assert()
        .success()
        .stdout("/other [first]\n");

    env.command()
        .env("DOCPATH_DEFAULT_PROVIDER", "input")
        .args(["combine-file", "--base-provider", "first", "/assets", "/other/a.txt"])
        .assert()
        .success()
        .stdout("/other/a.txt [first]\n");

    env.command()
        .env("DOCPATH_DEFAULT_PROVIDER", "input")
        .args(["combine", "/assets", "/other"])
        .assert()
        .success()
        .stdout("/other [input]\n");
}

/// Test configured roots change which paths are absolute.
#[test]
fn test_separator_only_roots() {
    let env = TestEnv::new();
    env.write_project_config("roots:\n  - separator\n");

    let json = env.json_of(&["normalize", "c:/data"]);
    assert_eq!(json["absolute"], false);

    let json = env.json_of(&["normalize", "/data"]);
    assert_eq!(json["absolute"], true);
}

/// Test the project config is discovered from a nested working directory.
#[test]
fn test_project_config_found_from_subdirectory() {
    let env = TestEnv::new();
    env.write_project_config("default_provider: project\n");
    let nested = env.work_dir.join("posts").join("drafts");
    std::fs::create_dir_all(&nested).unwrap();

    env.command()
        .current_dir(&nested)
        .args(["normalize", "/site"])
        .assert()
        .success()
        .stdout("/site [project]\n");
}
