//! Error context extension tests

use bootreg_domain::Error;
use bootreg_infrastructure::error_ext::ErrorContext;
use std::io;

fn failing_io() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_io_context() {
    let err = failing_io().io_context("Failed to read config").unwrap_err();
    match err {
        Error::Io { message, source } => {
            assert_eq!(message, "Failed to read config: no such file");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_config_context() {
    let err = "abc".parse::<u32>().config_context("Invalid port").unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().starts_with("Configuration error: Invalid port"));
}

#[test]
fn test_with_config_context_is_lazy() {
    let ok: Result<u32, std::num::ParseIntError> = "5".parse::<u32>();
    let value = ok
        .with_config_context(|| -> String { panic!("context built on success") })
        .unwrap();
    assert_eq!(value, 5);
}
