//! PostgreSQL plugin tests

use bootreg_domain::{Error, PostgresOptions, ResourceKind};
use bootreg_infrastructure::Registry;
use bootreg_infrastructure::retry::RecordingSleeper;
use bootreg_providers::PostgresPlugin;
use std::sync::Arc;
use std::time::Duration;

fn unreachable() -> PostgresOptions {
    PostgresOptions::new("postgresql://bootreg@127.0.0.1:1/bootreg")
        .with_connection_timeout(Duration::from_millis(200))
}

#[test]
fn test_unparsable_source_fails_without_attempts() {
    let sleeper = Arc::new(RecordingSleeper::new());
    let mut registry = Registry::new();

    let err = registry
        .add_plugin(Box::new(
            PostgresPlugin::new(PostgresOptions::new("postgresql://localhost:notaport/app"))
                .with_sleeper(sleeper.clone()),
        ))
        .unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(sleeper.calls(), 0);
    assert!(registry.is_empty());
}

#[test]
fn test_unreachable_server_exhausts_five_attempts() {
    let sleeper = Arc::new(RecordingSleeper::new());
    let mut registry = Registry::new();

    let err = registry
        .add_plugin(Box::new(
            PostgresPlugin::new(unreachable()).with_sleeper(sleeper.clone()),
        ))
        .unwrap_err();

    assert!(matches!(err, Error::RetriesExhausted { attempts: 5, .. }));
    assert_eq!(err.resource(), Some(ResourceKind::RelationalPool));

    let secs: Vec<u64> = sleeper.delays().iter().map(Duration::as_secs).collect();
    assert_eq!(secs, vec![0, 1, 2, 3, 4]);
    assert!(registry.pg_pool().is_none());
}

#[test]
fn test_lazy_pool_builds_without_server() {
    let sleeper = Arc::new(RecordingSleeper::new());
    let mut options = unreachable().with_pool_limits(4, Duration::from_secs(60));
    options.min_idle = 0;

    let pool = PostgresPlugin::new(options)
        .with_sleeper(sleeper.clone())
        .build_pool()
        .unwrap();

    assert_eq!(pool.max_size(), 4);
    assert_eq!(sleeper.calls(), 0);
}

#[test]
fn test_invalid_sizing_fails_without_attempts() {
    let sleeper = Arc::new(RecordingSleeper::new());
    let options = unreachable().with_pool_limits(0, Duration::from_secs(60));

    let err = PostgresPlugin::new(options)
        .with_sleeper(sleeper.clone())
        .build_pool()
        .unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(sleeper.calls(), 0);
}

#[test]
#[ignore = "requires PostgreSQL on localhost:5432 with user postgres"]
fn test_live_server_builds_pool() {
    let sleeper = Arc::new(RecordingSleeper::new());
    let mut registry = Registry::new();

    registry
        .add_plugin(Box::new(
            PostgresPlugin::new(PostgresOptions::new(
                "host=localhost user=postgres dbname=postgres",
            ))
            .with_sleeper(sleeper.clone()),
        ))
        .unwrap();

    let pool = registry.pg_pool().unwrap();
    let mut conn = pool.get().unwrap();
    let row = conn.query_one("SELECT 1", &[]).unwrap();
    assert_eq!(row.get::<_, i32>(0), 1);
    assert_eq!(sleeper.calls(), 0);
}
