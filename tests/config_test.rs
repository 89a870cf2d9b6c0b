use calc_be::config::Config;
use secrecy::ExposeSecret;
use serial_test::serial;

const VARS: [&str; 4] = ["SERVER_URL", "PORT", "ENV", "GEMINI_API_KEY"];

fn clear_vars() {
    for name in VARS {
        unsafe {
            std::env::remove_var(name);
        }
    }
}

#[test]
#[serial]
fn config_from_env_uses_defaults_when_unset() {
    clear_vars();

    let config = Config::from_env();
    assert_eq!(config.server_url, "0.0.0.0");
    assert_eq!(config.port, "8000");
    assert_eq!(config.environment, "prod");
    assert!(config.gemini_api_key.is_none());
}

#[test]
#[serial]
fn config_from_env_reads_set_values() {
    clear_vars();
    unsafe {
        std::env::set_var("SERVER_URL", "10.0.0.5");
        std::env::set_var("PORT", "8900");
        std::env::set_var("ENV", "dev");
        std::env::set_var("GEMINI_API_KEY", "gm-test-key");
    }

    let config = Config::from_env();
    assert_eq!(config.server_url, "10.0.0.5");
    assert_eq!(config.port, "8900");
    assert_eq!(config.environment, "dev");
    assert_eq!(
        config.gemini_api_key.as_ref().map(|k| k.expose_secret()),
        Some("gm-test-key")
    );

    clear_vars();
}

#[test]
#[serial]
fn config_from_env_defaults_empty_values_but_keeps_empty_key() {
    clear_vars();
    unsafe {
        std::env::set_var("PORT", "");
        std::env::set_var("GEMINI_API_KEY", "");
    }

    let config = Config::from_env();
    assert_eq!(config.port, "8000");
    assert_eq!(
        config.gemini_api_key.as_ref().map(|k| k.expose_secret()),
        Some("")
    );

    clear_vars();
}

#[test]
#[serial]
fn config_from_env_is_idempotent() {
    clear_vars();
    unsafe {
        std::env::set_var("SERVER_URL", "192.168.1.20");
    }

    let first = Config::from_env();
    let second = Config::from_env();
    assert_eq!(first.summary(), second.summary());

    clear_vars();
}
