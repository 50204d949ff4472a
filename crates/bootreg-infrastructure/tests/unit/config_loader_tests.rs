//! Bootstrap configuration loader tests
//!
//! `figment::Jail` isolates the working directory and environment of each
//! test, so these run safely in parallel with the rest of the suite.

use bootreg_domain::constants::{LOGGER_ENCODING_CONSOLE, LOGGER_ENCODING_JSON};
use bootreg_domain::{Error, ResourceKind};
use bootreg_infrastructure::config::{BootstrapConfig, ConfigLoader};
use figment::Jail;
use std::time::Duration;

const FULL_CONFIG: &str = r#"
[logging]
level = "debug"

[logger]
level = -1
encoding = "json"
prefix = "[orders]"
service_name = "orders"
output_path = "orders.log"

[config_reader]
path = "./"
file_name = "config"
file_type = "yaml"
section = "release"

[redis]
addr = "cache:6379"
db = 2

[postgres]
source = "postgresql://orders@db:5432/orders"
max_connections = 20
max_idle_time_secs = 600

[postgres.retry]
max_attempts = 3
backoff_step_secs = 2
"#;

#[test]
fn test_load_explicit_file() {
    Jail::expect_with(|jail| {
        jail.create_file("service.toml", FULL_CONFIG)?;

        let config = ConfigLoader::new()
            .with_config_path("service.toml")
            .load()
            .expect("config should load");

        assert_eq!(config.logging.level, "debug");

        let logger = config.logger.as_ref().expect("logger section");
        assert_eq!(logger.level, -1);
        assert_eq!(logger.encoding, "json");
        assert_eq!(logger.service_name, "orders");
        // unspecified fields keep their defaults
        assert_eq!(logger.level_style, "LowercaseColorLevelEncoder");

        let redis = config.redis.as_ref().expect("redis section");
        assert_eq!(redis.addr, "cache:6379");
        assert_eq!(redis.db, 2);
        assert_eq!(redis.retry.max_attempts, 5);

        let postgres = config.postgres.as_ref().expect("postgres section");
        assert_eq!(postgres.max_connections, 20);
        assert_eq!(postgres.max_idle_time, Duration::from_secs(600));
        assert_eq!(postgres.retry.max_attempts, 3);
        assert_eq!(postgres.retry.backoff_step, Duration::from_secs(2));

        assert_eq!(
            config.requested(),
            vec![
                ResourceKind::Logger,
                ResourceKind::Config,
                ResourceKind::KeyValue,
                ResourceKind::RelationalPool
            ]
        );
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("service.toml", FULL_CONFIG)?;
        jail.set_env("BOOTREG__REDIS__ADDR", "other-cache:6380");
        jail.set_env("BOOTREG__POSTGRES__MAX_CONNECTIONS", "4");

        let config = ConfigLoader::new()
            .with_config_path("service.toml")
            .load()
            .expect("config should load");

        assert_eq!(config.redis.unwrap().addr, "other-cache:6380");
        assert_eq!(config.postgres.unwrap().max_connections, 4);
        Ok(())
    });
}

#[test]
fn test_env_alone_enables_section() {
    Jail::expect_with(|jail| {
        jail.set_env("BOOTREG__REDIS__ADDR", "localhost:6390");

        let config = ConfigLoader::new().load().expect("config should load");

        let redis = config.redis.expect("redis section from env");
        assert_eq!(redis.addr, "localhost:6390");
        assert_eq!(redis.db, 0);
        assert!(config.postgres.is_none());
        Ok(())
    });
}

#[test]
fn test_defaults_without_file() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().expect("defaults should load");
        assert_eq!(config, BootstrapConfig::default());
        assert!(config.requested().is_empty());
        Ok(())
    });
}

#[test]
fn test_default_file_discovered_in_working_dir() {
    Jail::expect_with(|jail| {
        jail.create_file("bootreg.toml", "[redis]\naddr = \"found:6379\"\n")?;

        let config = ConfigLoader::new().load().expect("config should load");
        assert_eq!(config.redis.unwrap().addr, "found:6379");
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_is_not_found() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new()
            .with_config_path("absent.toml")
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        Ok(())
    });
}

#[test]
fn test_invalid_values_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "zero.toml",
            "[postgres]\nsource = \"host=db\"\nmax_connections = 0\n",
        )?;
        jail.create_file("encoding.toml", "[logger]\nencoding = \"xml\"\n")?;
        jail.create_file("format.toml", "[config_reader]\nfile_type = \"ini\"\n")?;
        jail.create_file("level.toml", "[logging]\nlevel = \"loud\"\n")?;

        for file in ["zero.toml", "encoding.toml", "format.toml", "level.toml"] {
            let err = ConfigLoader::new()
                .with_config_path(file)
                .load()
                .unwrap_err();
            assert!(err.is_configuration(), "{} should fail validation", file);
        }
        Ok(())
    });
}

#[test]
fn test_both_encoding_names_accepted() {
    Jail::expect_with(|jail| {
        for encoding in [LOGGER_ENCODING_JSON, LOGGER_ENCODING_CONSOLE] {
            let file = format!("{}.toml", encoding);
            jail.create_file(&file, &format!("[logger]\nencoding = \"{}\"\n", encoding))?;
            let config = ConfigLoader::new()
                .with_config_path(&file)
                .load()
                .map_err(|e| e.to_string())?;
            let logger = config.logger.expect("logger section should load");
            assert_eq!(logger.encoding, encoding);
        }
        Ok(())
    });
}

#[test]
fn test_save_then_load() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new();
        let mut config = BootstrapConfig::default();
        config.redis = Some(bootreg_domain::RedisOptions::new("saved:6379").with_db(3));

        loader
            .save_to_file(&config, "saved.toml")
            .expect("config should save");

        let loaded = ConfigLoader::new()
            .with_config_path("saved.toml")
            .load()
            .expect("saved config should load");
        assert_eq!(loaded, config);
        Ok(())
    });
}
