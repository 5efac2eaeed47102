use std::env;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub history: HistoryConfig,
    pub alias: AliasConfig,
}

/// History synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Transactions per indexer history page (consumed by the fetch layer)
    pub page_size: usize,
    /// Number of parsed transactions kept for display
    pub display_count: usize,
}

/// Alias registration protocol settings
///
/// The registration script is a protocol constant: every valid alias
/// registration on-chain pays this outputScript, so changing it breaks
/// compatibility with already-registered names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasConfig {
    /// outputScript (hex) of the fixed registration fee address
    pub registration_script: String,
    /// Fee in satoshis for a maximum-length alias
    pub base_fee_sats: u64,
    /// Maximum alias length in bytes
    pub max_length: usize,
    /// Sentinel blockheight recorded for unconfirmed registrations
    pub unconfirmed_height: i64,
}

/// P2SH outputScript of the well-known alias registration address
pub const ALIAS_REGISTRATION_SCRIPT: &str = "a914d37c4c809fe9840e7bfa77b86bd47163f6fb6c6087";

/// Blockheight sentinel used for unconfirmed alias registrations
pub const UNCONFIRMED_BLOCKHEIGHT: i64 = 100_000_000;

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            page_size: 25,
            display_count: 10,
        }
    }
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            registration_script: ALIAS_REGISTRATION_SCRIPT.to_string(),
            base_fee_sats: 551,
            max_length: 21,
            unconfirmed_height: UNCONFIRMED_BLOCKHEIGHT,
        }
    }
}

/// Parse a numeric env override, naming the variable in the error
fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse::<T>().map_err(|_| {
        ConfigError::Message(format!("{} must be a valid number, got {:?}", name, value))
    })
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let history = HistoryConfig::default();
        let alias = AliasConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("history.page_size", history.page_size as i64)?
            .set_default("history.display_count", history.display_count as i64)?
            .set_default("alias.registration_script", alias.registration_script)?
            .set_default("alias.base_fee_sats", alias.base_fee_sats as i64)?
            .set_default("alias.max_length", alias.max_length as i64)?
            .set_default("alias.unconfirmed_height", alias.unconfirmed_height)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // HISTORY_* / ALIAS_* env variables override file configuration.
        // Patched explicitly: the settings are nested and their field names
        // contain underscores, so a prefix source cannot address them.
        if let Ok(value) = env::var("HISTORY_PAGE_SIZE") {
            app_config.history.page_size = parse_env("HISTORY_PAGE_SIZE", &value)?;
        }
        if let Ok(value) = env::var("HISTORY_DISPLAY_COUNT") {
            app_config.history.display_count = parse_env("HISTORY_DISPLAY_COUNT", &value)?;
        }
        if let Ok(value) = env::var("ALIAS_REGISTRATION_SCRIPT") {
            app_config.alias.registration_script = value;
        }
        if let Ok(value) = env::var("ALIAS_BASE_FEE_SATS") {
            app_config.alias.base_fee_sats = parse_env("ALIAS_BASE_FEE_SATS", &value)?;
        }
        if let Ok(value) = env::var("ALIAS_MAX_LENGTH") {
            app_config.alias.max_length = parse_env("ALIAS_MAX_LENGTH", &value)?;
        }
        if let Ok(value) = env::var("ALIAS_UNCONFIRMED_HEIGHT") {
            app_config.alias.unconfirmed_height = parse_env("ALIAS_UNCONFIRMED_HEIGHT", &value)?;
        }

        if app_config.alias.max_length == 0 {
            return Err(ConfigError::Message(
                "alias.max_length must be at least 1".to_string(),
            ));
        }
        if app_config.alias.registration_script.is_empty() {
            return Err(ConfigError::Message(
                "alias.registration_script must not be empty".to_string(),
            ));
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => config,
            Err(_) => Self {
                history: HistoryConfig::default(),
                alias: AliasConfig::default(),
            },
        }
    }
}
