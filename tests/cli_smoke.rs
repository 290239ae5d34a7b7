#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the CLI binary starts correctly and
//! responds to basic commands without touching the network.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `dbz` with config and cache redirected into `home`.
#[allow(deprecated)]
fn dbz(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dbz").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env("NO_COLOR", "1")
        .env_remove("DBZ_LOG");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    dbz(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dragon Ball"))
        .stdout(predicate::str::contains("--no-translate"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    dbz(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_kinds_lists_every_resource() {
    let home = TempDir::new().unwrap();
    dbz(&home)
        .arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains(":character"))
        .stdout(predicate::str::contains(":transformation"))
        .stdout(predicate::str::contains(":planet"))
        .stdout(predicate::str::contains(":saga"))
        .stdout(predicate::str::contains(":episode"))
        .stdout(predicate::str::contains("(default)"))
        .stdout(predicate::str::contains("Transformations"));
}

#[test]
fn test_list_unknown_kind_fails() {
    let home = TempDir::new().unwrap();
    dbz(&home)
        .args(["list", "villains"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("villains"));
}

#[test]
fn test_show_requires_numeric_id() {
    let home = TempDir::new().unwrap();
    dbz(&home)
        .args(["show", "character", "goku"])
        .assert()
        .failure();
}

#[test]
fn test_list_reports_unreachable_api() {
    let home = TempDir::new().unwrap();
    dbz(&home)
        .args([
            "list",
            "planet",
            "--no-translate",
            "--quiet",
            "--timeout",
            "2",
            "--base-url",
            "http://127.0.0.1:9/api",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("127.0.0.1:9"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let home = TempDir::new().unwrap();
    dbz(&home)
        .args(["list", "planet", "--timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs"));
}

#[test]
fn test_cache_reports_empty_cache() {
    let home = TempDir::new().unwrap();
    dbz(&home)
        .arg("cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("translation_cache.json"))
        .stdout(predicate::str::contains("entries  0"));
}

#[test]
fn test_cache_counts_and_clears_entries() {
    let home = TempDir::new().unwrap();
    let cache_dir = home.path().join("cache").join("dbztui");
    std::fs::create_dir_all(&cache_dir).unwrap();
    std::fs::write(
        cache_dir.join("translation_cache.json"),
        r#"{"Hola mundo": "Hello world", "Guerrero": "Warrior"}"#,
    )
    .unwrap();

    dbz(&home)
        .arg("cache")
        .assert()
        .success()
        .stdout(predicate::str::contains("entries  2"));

    dbz(&home)
        .args(["cache", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    assert!(!cache_dir.join("translation_cache.json").exists());
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();
    dbz(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"))
        .stdout(predicate::str::contains("config.toml"));
}
