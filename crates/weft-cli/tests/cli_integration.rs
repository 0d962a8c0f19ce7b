//! End-to-end tests for the weft binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn weft() -> Command {
    Command::cargo_bin("weft").expect("binary builds")
}

#[test]
fn check_fails_without_config() {
    let dir = TempDir::new().unwrap();

    weft()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("weft.toml"));
}

#[test]
fn init_then_check_succeeds() {
    let dir = TempDir::new().unwrap();
    // Starter config scans ./src and ./assets
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::create_dir(dir.path().join("assets")).unwrap();

    weft()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created"));

    assert!(dir.path().join("weft.toml").exists());

    weft()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("All checks passed!"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("weft.toml"), "content = [\"./src/**/*.rs\"]").unwrap();

    weft()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    weft()
        .current_dir(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join("weft.toml")).unwrap();
    assert!(content.contains("fontFamily"));
}

#[test]
fn check_reports_empty_content_as_validation_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("weft.toml"), "content = []").unwrap();

    weft()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no content patterns"));
}

#[test]
fn check_reports_missing_scan_root() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("weft.toml"),
        "content = [\"./src/**/*.html\"]",
    )
    .unwrap();
    // src/ does not exist

    weft()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scan root not found"));
}

#[test]
fn check_no_fs_skips_scan_root_checks() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("weft.toml"),
        "content = [\"./src/**/*.html\"]",
    )
    .unwrap();

    weft()
        .current_dir(dir.path())
        .args(["check", "--no-fs"])
        .assert()
        .success();
}

#[test]
fn check_uses_package_json_embedding() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("pages")).unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"name": "app", "weft": {"content": ["./pages/**/*.html"]}}"#,
    )
    .unwrap();

    weft()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn check_with_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config");
    fs::create_dir(&config_dir).unwrap();
    fs::create_dir(config_dir.join("src")).unwrap();
    fs::write(
        config_dir.join("custom.toml"),
        "content = [\"./src/**/*.html\"]",
    )
    .unwrap();

    weft()
        .current_dir(dir.path())
        .args(["check", "--config", "config/custom.toml"])
        .assert()
        .success();
}

#[test]
fn check_reports_broken_toml_as_parse_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("weft.toml"), "content = [\"unterminated").unwrap();

    weft()
        .current_dir(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"))
        .stderr(predicate::str::contains("Validation error").not());
}

#[test]
fn quiet_suppresses_status_output() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("weft.toml"),
        "content = [\"./src/**/*.html\"]",
    )
    .unwrap();

    weft()
        .current_dir(dir.path())
        .args(["--quiet", "check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Checking configuration").not())
        .stderr(predicate::str::contains("All checks passed").not());
}

#[test]
fn no_color_strips_ansi_escapes() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("weft.toml"),
        "content = [\"./src/**/*.html\"]",
    )
    .unwrap();

    // FORCE_COLOR would enable colors; the flag must still win.
    weft()
        .current_dir(dir.path())
        .env("FORCE_COLOR", "1")
        .args(["--no-color", "check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("All checks passed"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn schema_prints_json_to_stdout() {
    weft()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"content\""))
        .stdout(predicate::str::contains("\"plugins\""));
}

#[test]
fn env_override_replaces_file_content() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("pages")).unwrap();
    fs::write(
        dir.path().join("weft.toml"),
        "content = [\"./missing/**/*.html\"]",
    )
    .unwrap();

    weft()
        .current_dir(dir.path())
        .env("WEFT_CONTENT", r#"["./pages/**/*.html"]"#)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("./pages/**/*.html"));
}
