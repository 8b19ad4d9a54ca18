//! Integration tests for the strata CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use strata_test_utils::ConfigDir;

/// Get a Command for the strata binary
fn strata_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("strata"));
    cmd.env_remove("STRATA_EXTERNAL_CONFIG");
    cmd
}

fn layered_dir() -> ConfigDir {
    ConfigDir::new()
        .with(
            "base.yml",
            "server:\n  host: localhost\n  port: 80\nlogging: info\n",
        )
        .with(
            "app.yml",
            "inherits: base.yml\nimport: db.yml\nserver:\n  port: 8080\n",
        )
        .with("db.yml", "db:\n  url: postgres://db\n")
}

fn resolve_json(dir: &ConfigDir, extra: &[&str]) -> Value {
    let output = strata_cmd()
        .arg("resolve")
        .arg("app.yml")
        .arg("--root")
        .arg(dir.root())
        .args(["--output", "json"])
        .args(extra)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "resolve failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    strata_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_output() {
    strata_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}

#[test]
fn test_no_command_shows_help_hint() {
    strata_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("strata --help"));
}

// ============================================================================
// Resolve Tests
// ============================================================================

#[test]
fn test_resolve_prints_merged_tree() {
    let dir = layered_dir();
    assert_eq!(
        resolve_json(&dir, &[]),
        json!({
            "server": {"host": "localhost", "port": 8080},
            "logging": "info",
            "db": {"url": "postgres://db"}
        })
    );
}

#[test]
fn test_resolve_yaml_is_default_output() {
    let dir = ConfigDir::new().with("app.yml", "name: app\n");
    strata_cmd()
        .args(["resolve", "app.yml", "--root"])
        .arg(dir.root())
        .assert()
        .success()
        .stdout("name: app\n");
}

#[test]
fn test_resolve_applies_set_overrides() {
    let dir = layered_dir();
    let tree = resolve_json(&dir, &["--set", "server.port=9090", "--set", "logging=debug"]);
    assert_eq!(tree["server"]["port"], json!(9090));
    assert_eq!(tree["logging"], json!("debug"));
}

#[test]
fn test_resolve_reads_env_overrides() {
    let dir = layered_dir();
    let output = strata_cmd()
        .args(["resolve", "app.yml", "-o", "json", "--env-prefix", "myapp", "--root"])
        .arg(dir.root())
        .env("myapp.server.host", "example.com")
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["server"]["host"], json!("example.com"));
}

#[test]
fn test_resolve_external_config_from_env() {
    let dir = layered_dir();
    let external = dir.write("local.yml", "logging: trace\n");

    let output = strata_cmd()
        .args(["resolve", "app.yml", "-o", "json", "--root"])
        .arg(dir.root())
        .env("STRATA_EXTERNAL_CONFIG", &external)
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["logging"], json!("trace"));
}

#[test]
fn test_resolve_without_imports_keeps_import_key() {
    let dir = layered_dir();
    let tree = resolve_json(&dir, &["--no-imports"]);
    assert_eq!(tree["import"], json!("db.yml"));
    assert!(tree.get("db").is_none());
}

#[test]
fn test_resolve_toml_output() {
    let dir = layered_dir();
    strata_cmd()
        .args(["resolve", "app.yml", "--output", "toml", "--root"])
        .arg(dir.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("[server]"))
        .stdout(predicate::str::contains("port = 8080"));
}

// ============================================================================
// Check and Error Tests
// ============================================================================

#[test]
fn test_check_success() {
    let dir = layered_dir();
    strata_cmd()
        .args(["check", "app.yml", "--root"])
        .arg(dir.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("app.yml resolves"));
}

#[test]
fn test_check_reports_circular_import() {
    let dir = ConfigDir::new()
        .with("a.yml", "import: b.yml\n")
        .with("b.yml", "import: a.yml\n");

    strata_cmd()
        .args(["check", "a.yml", "--root"])
        .arg(dir.root())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Circular import: a.yml -> b.yml -> a.yml"));
}

#[test]
fn test_missing_document_fails() {
    let dir = ConfigDir::new();
    strata_cmd()
        .args(["resolve", "nope.yml", "--root"])
        .arg(dir.root())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to open config file: nope.yml"));
}

#[test]
fn test_malformed_set_fails() {
    let dir = layered_dir();
    strata_cmd()
        .args(["check", "app.yml", "--set", "novalue", "--root"])
        .arg(dir.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid override 'novalue'"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = layered_dir();
    strata_cmd()
        .args(["-v", "resolve", "app.yml", "-o", "json", "--root"])
        .arg(dir.root())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("Inheriting"));
}
