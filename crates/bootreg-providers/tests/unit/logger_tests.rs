//! Logger plugin tests
//!
//! Records are emitted inside `Logger::in_scope`, so each test only sees
//! its own dispatcher.

use bootreg_domain::LoggerOptions;
use bootreg_infrastructure::Registry;
use bootreg_providers::logging::{build_logger, build_logger_with_console};
use bootreg_providers::with_logger;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing::{error, info, warn};
use tracing_subscriber::fmt::MakeWriter;

const PREFIX: &str = "[bootreg-test]";

fn options(dir: &Path) -> LoggerOptions {
    LoggerOptions {
        level: -1,
        development: true,
        disable_stacktrace: true,
        encoding: "console".to_string(),
        prefix: PREFIX.to_string(),
        level_style: "LowercaseColorLevelEncoder".to_string(),
        service_name: "bootreg-test".to_string(),
        output_path: dir.join("service.log"),
    }
}

/// Console sink shared between the logger and the test
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn emit_three(options: &LoggerOptions) -> String {
    let logger = build_logger(options).unwrap();
    logger.in_scope(|| {
        info!("This is an info log");
        warn!("This is a warn log");
        error!("This is an error log");
    });
    fs::read_to_string(&options.output_path).unwrap()
}

#[test]
fn test_messages_and_prefix_written_to_file() {
    let dir = TempDir::new().unwrap();
    let options = options(dir.path());

    let registry = Registry::with_plugins([with_logger(options.clone())]).unwrap();
    let logger = registry.logger().unwrap();
    assert_eq!(logger.service_name(), "bootreg-test");
    assert_eq!(logger.output_path(), options.output_path);

    logger.in_scope(|| {
        info!("This is an info log");
        warn!("This is a warn log");
        error!("This is an error log");
    });

    let contents = fs::read_to_string(&options.output_path).unwrap();
    assert!(contents.contains("This is an info log"));
    assert!(contents.contains("This is a warn log"));
    assert!(contents.contains("This is an error log"));
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.lines().all(|line| line.starts_with(PREFIX)));
}

#[test]
fn test_console_record_layout() {
    let dir = TempDir::new().unwrap();
    let contents = emit_three(&options(dir.path()));

    // files never carry color codes
    assert!(!contents.contains('\u{1b}'));
    assert!(contents.contains("\tinfo\t"));
    assert!(contents.contains("\twarn\t"));
    assert!(contents.contains("\terror\t"));
    assert!(contents.contains("logger_tests.rs:"));
    assert!(contents.contains("{\"serviceName\": \"bootreg-test\"}"));
}

#[test]
fn test_console_receives_every_level() {
    let dir = TempDir::new().unwrap();
    let console = SharedBuffer::default();
    let logger = build_logger_with_console(&options(dir.path()), console.clone()).unwrap();
    logger.in_scope(|| {
        info!("This is an info log");
        warn!("This is a warn log");
        error!("This is an error log");
    });

    let contents = console.contents();
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.contains("This is an info log"));
    assert!(contents.contains("This is a warn log"));
    assert!(contents.contains("This is an error log"));
}

#[test]
fn test_level_code_filters_records() {
    let dir = TempDir::new().unwrap();
    let mut options = options(dir.path());
    options.level = 1;

    let contents = emit_three(&options);
    assert!(!contents.contains("This is an info log"));
    assert!(contents.contains("This is a warn log"));
    assert!(contents.contains("This is an error log"));
}

#[test]
fn test_capital_style() {
    let dir = TempDir::new().unwrap();
    let mut options = options(dir.path());
    options.level_style = "CapitalLevelEncoder".to_string();

    let contents = emit_three(&options);
    assert!(contents.contains("\tINFO\t"));
    assert!(contents.contains("\tERROR\t"));
}

#[test]
fn test_unknown_style_falls_back() {
    let dir = TempDir::new().unwrap();
    let mut options = options(dir.path());
    options.level_style = "Bogus".to_string();

    let contents = emit_three(&options);
    assert!(contents.contains("\tinfo\t"));
}

#[test]
fn test_json_encoding() {
    let dir = TempDir::new().unwrap();
    let mut options = options(dir.path());
    options.encoding = "json".to_string();

    let logger = build_logger(&options).unwrap();
    logger.in_scope(|| info!(order_id = 42, "Order placed"));

    let contents = fs::read_to_string(&options.output_path).unwrap();
    let record: Value = serde_json::from_str(contents.trim_end()).unwrap();
    assert_eq!(record["msg"], "Order placed");
    assert_eq!(record["level"], "info");
    assert_eq!(record["serviceName"], "bootreg-test");
    assert_eq!(record["order_id"], 42);
    assert!(record["time"].as_str().unwrap().starts_with(PREFIX));
    assert!(record["caller"].as_str().unwrap().contains("logger_tests.rs:"));
    assert!(record.get("stacktrace").is_none());
}

#[test]
fn test_stacktrace_attached_from_error_in_production() {
    let dir = TempDir::new().unwrap();
    let mut options = options(dir.path());
    options.encoding = "json".to_string();
    options.development = false;
    options.disable_stacktrace = false;

    let logger = build_logger(&options).unwrap();
    logger.in_scope(|| {
        warn!("This is a warn log");
        error!("This is an error log");
    });

    let contents = fs::read_to_string(&options.output_path).unwrap();
    let records: Vec<Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert!(records[0].get("stacktrace").is_none());
    assert!(records[1].get("stacktrace").is_some());
}

#[test]
fn test_file_is_appended() {
    let dir = TempDir::new().unwrap();
    let options = options(dir.path());

    emit_three(&options);
    let contents = emit_three(&options);
    assert_eq!(contents.lines().count(), 6);
}

#[test]
fn test_unknown_encoding_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    let mut options = options(dir.path());
    options.encoding = "xml".to_string();

    let mut registry = Registry::new();
    let err = registry.add_plugin(with_logger(options)).unwrap_err();
    assert!(err.is_configuration());
    assert!(registry.logger().is_none());
}

#[test]
fn test_unusable_output_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("blocker"), "").unwrap();
    let mut options = options(dir.path());
    options.output_path = dir.path().join("blocker").join("service.log");

    let err = build_logger(&options).unwrap_err();
    assert!(err.is_io());
}
