//! Unit tests for the retry policy value object

use bootreg_domain::RetryPolicy;
use std::time::Duration;

#[test]
fn test_default_policy_matches_linear_schedule() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.max_attempts, 5);

    let delays: Vec<u64> = (0..policy.max_attempts)
        .map(|attempt| policy.delay_after(attempt).as_secs())
        .collect();
    assert_eq!(delays, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_custom_step() {
    let policy = RetryPolicy::new(3, Duration::from_millis(250));
    assert_eq!(policy.delay_after(0), Duration::ZERO);
    assert_eq!(policy.delay_after(2), Duration::from_millis(500));
}

#[test]
fn test_zero_attempts_rejected() {
    let policy = RetryPolicy::new(0, Duration::from_secs(1));
    assert!(policy.validate().unwrap_err().is_configuration());
}

#[test]
fn test_policy_deserializes_seconds() {
    let policy: RetryPolicy =
        serde_json::from_str(r#"{"max_attempts": 2, "backoff_step_secs": 0.5}"#).unwrap();
    assert_eq!(policy, RetryPolicy::new(2, Duration::from_millis(500)));
}
