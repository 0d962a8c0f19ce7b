//! Tests for configuration discovery and loading.

use std::fs;

use tempfile::TempDir;
use weft_config::{ConfigDiscovery, ConfigError, ParseError, ValidationError, WeftConfig};

#[test]
fn load_parses_toml_config() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("weft.toml");
    fs::write(
        &path,
        r#"
content = ["./src/**/*.{rs,html}", "./assets/**/*.{html,css}"]
plugins = []

[theme.extend.fontFamily]
sans = ["Inter", "system-ui", "sans-serif"]
"#,
    )
    .expect("write config");

    let config = WeftConfig::load(&path).expect("load");
    assert_eq!(
        config.content,
        vec!["./src/**/*.{rs,html}", "./assets/**/*.{html,css}"]
    );
    assert_eq!(
        config.theme.extend.font_family.get("sans").expect("sans"),
        &vec!["Inter", "system-ui", "sans-serif"]
    );
    assert!(config.plugins.is_empty());
}

#[test]
fn load_parses_json_config() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("weft.json");
    fs::write(
        &path,
        r#"{
            "content": ["./src/**/*.html"],
            "theme": {
                "extend": {
                    "fontFamily": { "sans": ["Inter", "system-ui", "sans-serif"] }
                }
            }
        }"#,
    )
    .expect("write config");

    let config = WeftConfig::load(&path).expect("load");
    assert_eq!(config.content, vec!["./src/**/*.html"]);
    assert_eq!(
        config.theme.extend.font_family.get("sans").expect("sans"),
        &vec!["Inter", "system-ui", "sans-serif"]
    );
}

#[test]
fn load_from_package_json_embedding() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{
            "name": "app",
            "weft": {
                "content": ["./src/**/*.html"]
            }
        }"#,
    )
    .expect("write package.json");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load");
    assert_eq!(config.content, vec!["./src/**/*.html"]);
}

#[test]
fn load_missing_file_is_parse_error() {
    let err = WeftConfig::load("/nonexistent/weft.toml").unwrap_err();
    assert!(err.is_parse_error());
    assert!(matches!(err, ConfigError::Parse(ParseError::NotFound(_))));
}

#[test]
fn load_invalid_toml_is_parse_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("weft.toml");
    fs::write(&path, "content = [\"unterminated").expect("write config");

    let err = WeftConfig::load(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Parse(ParseError::InvalidToml { .. })
    ));
}

#[test]
fn load_rejects_missing_content_field() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("weft.toml");
    fs::write(&path, "[theme.extend.fontFamily]\nsans = [\"Inter\"]\n").expect("write config");

    // Well-formed file, but the content invariant fails.
    let err = WeftConfig::load(&path).unwrap_err();
    assert!(err.is_validation_error());
    assert!(matches!(
        err,
        ConfigError::Validation(ValidationError::NoContent)
    ));
}

#[test]
fn load_preserves_pattern_order() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("weft.toml");
    fs::write(
        &path,
        r#"content = ["./z/**/*.html", "./a/**/*.html", "./m/**/*.html"]"#,
    )
    .expect("write config");

    let config = WeftConfig::load(&path).expect("load");
    assert_eq!(
        config.content,
        vec!["./z/**/*.html", "./a/**/*.html", "./m/**/*.html"]
    );
}

#[test]
fn package_json_with_null_weft_field_is_not_discovered() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("package.json"), r#"{"weft": null}"#).expect("write package.json");

    let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Parse(ParseError::NoConfigFound { .. })
    ));
}
