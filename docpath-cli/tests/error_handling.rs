//! Integration tests for error handling and exit codes.
//!
//! These tests verify that docpath returns the documented exit codes:
//! - Exit code 0: Success
//! - Exit code 1: Semantic failure (unexpected relationship, invalid config)
//! - Exit code 2: Missing required argument
//! - Exit code 3: Invalid path or provider
//! - Exit code 4: Invalid arguments
//! - Exit code 5: I/O error
//! - Exit code 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Success Cases (Exit Code 0)
// ============================================================================

/// Test that successful operations return exit code 0.
#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();

    env.command().args(["normalize", "a/b"]).assert().code(0);
    env.command().args(["combine", "a", "b"]).assert().code(0);
    env.command()
        .args(["relationship", "/a", "/a/b"])
        .assert()
        .code(0);
}

// ============================================================================
// Semantic Failures (Exit Code 1)
// ============================================================================

/// Test that an unmet `--expect` returns exit code 1.
#[test]
fn test_relationship_expect_mismatch() {
    let env = TestEnv::new();

    env.command()
        .args(["relationship", "--expect", "descendant", "/site", "/site/posts"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected descendant, found ancestor"));
}

/// Test that validating a config with duplicate roots returns exit code 1.
#[test]
fn test_validate_rejects_duplicate_roots() {
    let env = TestEnv::new();
    let config = env.write_file("dup.yaml", "roots:\n  - separator\n  - separator\n");

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));
}

/// Test that validating a file with unknown fields returns exit code 1.
#[test]
fn test_validate_rejects_unknown_field() {
    let env = TestEnv::new();
    let config = env.write_file("unknown.yaml", "colour: blue\n");

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

/// Test that a well-formed config validates.
#[test]
fn test_validate_accepts_valid_config() {
    let env = TestEnv::new();
    let config = env.write_file(
        "good.yaml",
        "default_provider: input\nroots:\n  - separator\noutput_format: json\n",
    );

    env.command()
        .arg("validate")
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Configuration is valid"));
}

// ============================================================================
// Missing Arguments (Exit Code 2)
// ============================================================================

/// Test that a missing operand is a usage error.
#[test]
fn test_missing_operand() {
    let env = TestEnv::new();

    env.command()
        .args(["combine", "assets"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("OTHER"));
}

// ============================================================================
// Invalid Paths and Providers (Exit Code 3)
// ============================================================================

/// Test that an empty path is rejected.
#[test]
fn test_empty_path() {
    let env = TestEnv::new();

    env.command()
        .args(["normalize", ""])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid path"));
}

/// Test that malformed drive syntax is rejected.
#[test]
fn test_malformed_drive() {
    let env = TestEnv::new();

    env.command().args(["normalize", "c:foo"]).assert().code(3);
}

/// Test that a blank provider tag is rejected.
#[test]
fn test_blank_provider() {
    let env = TestEnv::new();

    env.command()
        .args(["normalize", "--provider", " ", "/site"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid provider"));
}

/// Test that an explicit provider on `relative` overrides the configured
/// default for both operands, so they still share a provider.
#[test]
fn test_relative_explicit_provider_applies_to_both() {
    let env = TestEnv::new();
    let config = env.write_file("provider.yaml", "default_provider: input\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .args(["relative", "--provider", "other", "/a", "/a/b"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("b [other]"));
}

/// Test that relating an absolute path to a relative one is rejected.
#[test]
fn test_relative_mixed_absoluteness() {
    let env = TestEnv::new();

    env.command()
        .args(["relative", "/a", "b"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("absolute path to a relative one"));
}

// ============================================================================
// Invalid Arguments (Exit Code 4)
// ============================================================================

/// Test that validating a missing file returns exit code 4.
#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();
    let missing = env.path().join("missing.yaml");

    env.command()
        .arg("validate")
        .arg(&missing)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

// ============================================================================
// I/O Errors (Exit Code 5)
// ============================================================================

/// Test that a missing `--config` file returns exit code 5.
#[test]
fn test_missing_explicit_config() {
    let env = TestEnv::new();
    let missing = env.path().join("absent.yaml");

    env.command()
        .arg("--config")
        .arg(&missing)
        .args(["normalize", "a"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("I/O error"));
}

// ============================================================================
// Configuration Errors (Exit Code 7)
// ============================================================================

/// Test that a malformed project config returns exit code 7.
#[test]
fn test_malformed_project_config() {
    let env = TestEnv::new();
    env.write_project_config("roots: [separator\n");

    env.command()
        .args(["normalize", "a"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("configuration error"));
}

/// Test that an invalid environment override returns exit code 7.
#[test]
fn test_invalid_env_roots() {
    let env = TestEnv::new();

    env.command()
        .env("DOCPATH_ROOTS", "separator,bogus")
        .args(["normalize", "a"])
        .assert()
        .code(7);
}

/// Test that --quiet suppresses the error message but keeps the exit code.
#[test]
fn test_quiet_error() {
    let env = TestEnv::new();

    env.command()
        .args(["--quiet", "normalize", ""])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
