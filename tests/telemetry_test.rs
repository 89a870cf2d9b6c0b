//! Integration tests for telemetry initialization.

use calc_be::config::Config;
use calc_be::telemetry::{TelemetryConfig, init_telemetry};

#[test]
fn telemetry_config_carries_environment() {
    let config = Config::from_lookup(|name| (name == "ENV").then(|| "dev".to_string()));
    let telemetry = TelemetryConfig::from_env("calc-be-test", &config);
    assert_eq!(telemetry.service_name, "calc-be-test");
    assert_eq!(telemetry.environment, "dev");
}

#[test]
fn telemetry_initializes_without_endpoint() {
    // The global subscriber can only be set once per process; a second
    // init in the same binary returns Err, which is acceptable here.
    let config = TelemetryConfig {
        endpoint: None,
        service_name: "calc-be-test".to_string(),
        environment: "test".to_string(),
    };
    if let Ok(guard) = init_telemetry(config) {
        assert!(!guard.is_exporting());
        guard.force_flush();
        tracing::info!("telemetry online");
    }
}
