//! Unit tests for plugin option records

use bootreg_domain::{
    ConfigFormat, ConfigReaderOptions, LoggerOptions, PostgresOptions, RedisOptions, RetryPolicy,
};
use std::time::Duration;

#[test]
fn test_redis_defaults() {
    let options = RedisOptions::default();
    assert_eq!(options.addr, "localhost:6379");
    assert!(options.password.is_empty());
    assert_eq!(options.db, 0);
    assert_eq!(options.retry, RetryPolicy::default());
    assert!(options.validate().is_ok());
}

#[test]
fn test_redis_debug_hides_password() {
    let options = RedisOptions::new("cache:6379").with_password("hunter2");
    let rendered = format!("{:?}", options);
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("cache:6379"));
}

#[test]
fn test_redis_validation() {
    assert!(RedisOptions::new("").validate().is_err());
    assert!(RedisOptions::default().with_db(-1).validate().is_err());
    assert!(
        RedisOptions::default()
            .with_retry(RetryPolicy::new(0, Duration::ZERO))
            .validate()
            .is_err()
    );
}

#[test]
fn test_postgres_validation() {
    let valid = PostgresOptions::new("postgresql://app@localhost/app")
        .with_pool_limits(10, Duration::from_secs(3600));
    assert!(valid.validate().is_ok());

    let no_connections = valid.clone().with_pool_limits(0, Duration::from_secs(1));
    assert!(no_connections.validate().unwrap_err().is_configuration());

    let mut too_many_idle = valid.clone();
    too_many_idle.min_idle = 11;
    assert!(too_many_idle.validate().is_err());

    let no_timeout = valid.with_connection_timeout(Duration::ZERO);
    assert!(no_timeout.validate().is_err());
}

#[test]
fn test_postgres_options_from_toml() {
    let options: PostgresOptions = toml::from_str(
        r#"
        source = "host=localhost user=app"
        max_connections = 4
        max_idle_time_secs = 60
        "#,
    )
    .unwrap();
    assert_eq!(options.max_connections, 4);
    assert_eq!(options.max_idle_time, Duration::from_secs(60));
    assert_eq!(options.min_idle, 1);
}

#[test]
fn test_config_format_parsing() {
    assert_eq!("yaml".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);
    assert_eq!("YML".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);
    assert_eq!("json".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
    assert_eq!("toml".parse::<ConfigFormat>().unwrap(), ConfigFormat::Toml);
    assert!("ini".parse::<ConfigFormat>().is_err());
    assert_eq!(ConfigFormat::Yaml.extensions(), &["yaml", "yml"]);
}

#[test]
fn test_config_reader_options_format() {
    let options = ConfigReaderOptions::new("./", "config", "yaml", "release");
    assert_eq!(options.format().unwrap(), ConfigFormat::Yaml);
    assert_eq!(options.section, "release");
}

#[test]
fn test_logger_defaults() {
    let options = LoggerOptions::default();
    assert_eq!(options.level, 0);
    assert!(options.disable_stacktrace);
    assert_eq!(options.encoding, "console");
    assert_eq!(options.level_style, "LowercaseColorLevelEncoder");
}
