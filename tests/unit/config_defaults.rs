//! Configuration loading and defaults
//!
//! These touch process environment and working-directory config discovery,
//! so they run serially.

use serial_test::serial;

use tx_history_synth::config::{AppConfig, ALIAS_REGISTRATION_SCRIPT, UNCONFIRMED_BLOCKHEIGHT};

#[test]
#[serial]
fn test_defaults_carry_protocol_constants() {
    let config = AppConfig::get_defaults();
    assert_eq!(config.alias.registration_script, ALIAS_REGISTRATION_SCRIPT);
    assert_eq!(config.alias.base_fee_sats, 551);
    assert_eq!(config.alias.max_length, 21);
    assert_eq!(config.alias.unconfirmed_height, UNCONFIRMED_BLOCKHEIGHT);
}

#[test]
#[serial]
fn test_load_without_config_file_uses_defaults() {
    let config = AppConfig::load().expect("defaults must load without a config file");
    assert!(config.history.page_size > 0);
    assert!(config.history.display_count > 0);
}

#[test]
#[serial]
fn test_history_env_overrides_apply() {
    std::env::set_var("HISTORY_DISPLAY_COUNT", "3");
    std::env::set_var("HISTORY_PAGE_SIZE", "50");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("HISTORY_DISPLAY_COUNT");
    std::env::remove_var("HISTORY_PAGE_SIZE");

    assert_eq!(config.history.display_count, 3);
    assert_eq!(config.history.page_size, 50);
}

#[test]
#[serial]
fn test_alias_env_overrides_apply() {
    std::env::set_var("ALIAS_BASE_FEE_SATS", "600");
    std::env::set_var("ALIAS_MAX_LENGTH", "30");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("ALIAS_BASE_FEE_SATS");
    std::env::remove_var("ALIAS_MAX_LENGTH");

    assert_eq!(config.alias.base_fee_sats, 600);
    assert_eq!(config.alias.max_length, 30);
    // Untouched settings keep their defaults
    assert_eq!(config.alias.registration_script, ALIAS_REGISTRATION_SCRIPT);
}

#[test]
#[serial]
fn test_malformed_numeric_env_override_is_an_error() {
    std::env::set_var("ALIAS_BASE_FEE_SATS", "not-a-number");
    let result = AppConfig::load();
    std::env::remove_var("ALIAS_BASE_FEE_SATS");
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_defaults_never_panic() {
    // get_defaults falls back to compiled-in values on any load failure
    let a = AppConfig::get_defaults();
    let b = AppConfig::get_defaults();
    assert_eq!(a.history.display_count, b.history.display_count);
}
