//! Resource handle tests

use bootreg_domain::ConfigFormat;
use bootreg_infrastructure::di::{ConfigReader, Logger};
use figment::Figment;
use figment::providers::{Format, Toml};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, PartialEq)]
struct Release {
    version: String,
    level: String,
}

fn reader() -> ConfigReader {
    let figment = Figment::from(Toml::string(
        r#"
        [release]
        version = "1.0.0"
        level = "release"

        [debug]
        version = "1.0.1-dev"
        level = "debug"
        "#,
    ));
    ConfigReader::new(figment, PathBuf::from("config.toml"), ConfigFormat::Toml)
}

#[test]
fn test_config_reader_extracts_sections() {
    let reader = reader();
    let release: Release = reader.extract_section("release").unwrap();
    assert_eq!(release.version, "1.0.0");
    assert_eq!(release.level, "release");

    let debug: Release = reader.extract_section("debug").unwrap();
    assert_eq!(debug.level, "debug");
}

#[test]
fn test_config_reader_missing_section_is_configuration_error() {
    let err = reader().extract_section::<Release>("staging").unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("staging"));
}

#[test]
fn test_config_reader_lookups() {
    let reader = reader();
    assert!(reader.contains("release.version"));
    assert!(!reader.contains("release.missing"));
    assert_eq!(
        reader
            .find_value("debug.version")
            .and_then(|v| v.into_string()),
        Some("1.0.1-dev".to_string())
    );
    assert_eq!(reader.format(), ConfigFormat::Toml);
    assert_eq!(reader.source_path(), PathBuf::from("config.toml").as_path());
}

#[test]
fn test_config_reader_keys_ignore_case() {
    let figment = Figment::from(Toml::string(
        r#"
        [Release]
        version = "2.0.0"
        level = "release"
        Owner = "ops"
        "#,
    ));
    let reader = ConfigReader::new(figment, PathBuf::from("config.toml"), ConfigFormat::Toml);

    let release: Release = reader.extract_section("release").unwrap();
    assert_eq!(release.version, "2.0.0");
    assert!(reader.contains("RELEASE.version"));
    assert_eq!(
        reader
            .find_value("release.version")
            .and_then(|v| v.into_string()),
        Some("2.0.0".to_string())
    );
    assert!(reader.contains("release.owner"));
    assert!(!reader.contains("release.missing"));
}

#[test]
fn test_logger_scope_returns_closure_value() {
    let logger = Logger::new(
        tracing::Dispatch::none(),
        "svc".to_string(),
        PathBuf::from("svc.log"),
    );
    assert_eq!(logger.in_scope(|| 42), 42);
    assert_eq!(logger.service_name(), "svc");
    assert!(format!("{:?}", logger).contains("svc.log"));
}
