//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.
//! Every field has a default, so `{}` is a complete configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Largest batch the Scryfall collection endpoint accepts.
pub const SCRYFALL_MAX_BATCH: usize = 75;

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Scryfall API settings.
    #[serde(default)]
    pub scryfall: ScryfallConfig,

    /// Command Zone template targets.
    #[serde(default)]
    pub command_zone: CommandZoneConfig,

    /// Card and search cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Deck validation settings.
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=SCRYFALL_MAX_BATCH).contains(&self.scryfall.batch_size) {
            return Err(ConfigError::InvalidValue {
                field: "scryfall.batch_size",
                message: format!(
                    "{} is outside 1..={SCRYFALL_MAX_BATCH}",
                    self.scryfall.batch_size
                ),
            });
        }

        if !self.scryfall.api_base.starts_with("http://")
            && !self.scryfall.api_base.starts_with("https://")
        {
            return Err(ConfigError::InvalidValue {
                field: "scryfall.api_base",
                message: format!("'{}' is not an http(s) URL", self.scryfall.api_base),
            });
        }

        if self.validation.max_card_name_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "validation.max_card_name_length",
                message: "must be greater than 0".to_string(),
            });
        }

        if self.validation.max_validation_errors == 0 {
            return Err(ConfigError::InvalidValue {
                field: "validation.max_validation_errors",
                message: "must be greater than 0".to_string(),
            });
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                message: format!(
                    "'{}' is not one of trace, debug, info, warn, error",
                    self.logging.level
                ),
            });
        }

        Ok(())
    }
}

/// Scryfall API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScryfallConfig {
    /// API base URL without a trailing slash.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Cards per collection request (max 75).
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ScryfallConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            batch_size: default_batch_size(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.scryfall.com".to_string()
}

const fn default_batch_size() -> usize {
    SCRYFALL_MAX_BATCH
}

const fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Command Zone deckbuilding template targets.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandZoneConfig {
    /// Minimum ramp pieces.
    #[serde(default = "default_ramp_target")]
    pub ramp_target: usize,
    /// Comfortable ramp count.
    #[serde(default = "default_ramp_optimal")]
    pub ramp_optimal: usize,
    /// Minimum card advantage pieces.
    #[serde(default = "default_card_advantage_target")]
    pub card_advantage_target: usize,
    /// Comfortable card advantage count.
    #[serde(default = "default_card_advantage_optimal")]
    pub card_advantage_optimal: usize,
    /// Single-target interaction.
    #[serde(default = "default_targeted_disruption_target")]
    pub targeted_disruption_target: usize,
    /// Board wipes and mass effects.
    #[serde(default = "default_mass_disruption_target")]
    pub mass_disruption_target: usize,
    /// Land count.
    #[serde(default = "default_lands_target")]
    pub lands_target: usize,
    /// Win conditions and synergy pieces.
    #[serde(default = "default_plan_cards_target")]
    pub plan_cards_target: usize,
}

impl Default for CommandZoneConfig {
    fn default() -> Self {
        Self {
            ramp_target: default_ramp_target(),
            ramp_optimal: default_ramp_optimal(),
            card_advantage_target: default_card_advantage_target(),
            card_advantage_optimal: default_card_advantage_optimal(),
            targeted_disruption_target: default_targeted_disruption_target(),
            mass_disruption_target: default_mass_disruption_target(),
            lands_target: default_lands_target(),
            plan_cards_target: default_plan_cards_target(),
        }
    }
}

const fn default_ramp_target() -> usize {
    10
}

const fn default_ramp_optimal() -> usize {
    12
}

const fn default_card_advantage_target() -> usize {
    12
}

const fn default_card_advantage_optimal() -> usize {
    15
}

const fn default_targeted_disruption_target() -> usize {
    12
}

const fn default_mass_disruption_target() -> usize {
    6
}

const fn default_lands_target() -> usize {
    38
}

const fn default_plan_cards_target() -> usize {
    30
}

/// Cache configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Maximum cached card records.
    #[serde(default = "default_max_card_cache_size")]
    pub max_card_cache_size: usize,

    /// Maximum cached search results.
    #[serde(default = "default_max_search_cache_size")]
    pub max_search_cache_size: usize,

    /// Entry lifetime in seconds.
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_card_cache_size: default_max_card_cache_size(),
            max_search_cache_size: default_max_search_cache_size(),
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

const fn default_max_card_cache_size() -> usize {
    10_000
}

const fn default_max_search_cache_size() -> usize {
    1_000
}

const fn default_ttl_seconds() -> u64 {
    3_600
}

/// Deck validation configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)] // Independent switches
pub struct ValidationConfig {
    /// Promote every warning to an error.
    #[serde(default)]
    pub strict_mode: bool,

    /// Run format legality rules.
    #[serde(default = "default_true")]
    pub enable_format_validation: bool,

    /// Quantities above this produce a warning.
    #[serde(default = "default_max_card_quantity")]
    pub max_card_quantity: u64,

    /// Longest accepted card name, in characters.
    #[serde(default = "default_max_card_name_length")]
    pub max_card_name_length: usize,

    /// Decks smaller than this produce a warning.
    #[serde(default = "default_min_deck_size")]
    pub min_deck_size: u64,

    /// Stop recording errors after this many.
    #[serde(default = "default_max_validation_errors")]
    pub max_validation_errors: usize,

    /// Include warnings in analysis output.
    #[serde(default = "default_true")]
    pub include_warnings_in_output: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            enable_format_validation: default_true(),
            max_card_quantity: default_max_card_quantity(),
            max_card_name_length: default_max_card_name_length(),
            min_deck_size: default_min_deck_size(),
            max_validation_errors: default_max_validation_errors(),
            include_warnings_in_output: default_true(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_max_card_quantity() -> u64 {
    100
}

const fn default_max_card_name_length() -> usize {
    200
}

const fn default_min_deck_size() -> u64 {
    10
}

const fn default_max_validation_errors() -> usize {
    50
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let json = r"{}";
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.scryfall.batch_size, 75);
    }

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "_comment": "Test config",
            "scryfall": {
                "api_base": "https://api.scryfall.com",
                "batch_size": 50,
                "request_timeout_secs": 10,
                "user_agent": "deck-tester/1.0"
            },
            "command_zone": {
                "ramp_target": 9,
                "lands_target": 36
            },
            "cache": {
                "max_card_cache_size": 500,
                "max_search_cache_size": 20,
                "ttl_seconds": 60
            },
            "validation": {
                "strict_mode": true,
                "max_card_quantity": 4,
                "max_card_name_length": 150,
                "min_deck_size": 60,
                "max_validation_errors": 10,
                "include_warnings_in_output": false
            },
            "logging": {
                "level": "debug"
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.scryfall.batch_size, 50);
        assert_eq!(config.scryfall.request_timeout_secs, 10);
        assert_eq!(config.scryfall.user_agent, "deck-tester/1.0");
        assert_eq!(config.command_zone.ramp_target, 9);
        assert_eq!(config.command_zone.ramp_optimal, 12);
        assert_eq!(config.command_zone.lands_target, 36);
        assert_eq!(config.cache.ttl_seconds, 60);
        assert!(config.validation.strict_mode);
        assert!(config.validation.enable_format_validation);
        assert_eq!(config.validation.max_card_quantity, 4);
        assert!(!config.validation.include_warnings_in_output);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn command_zone_defaults() {
        let config = CommandZoneConfig::default();
        assert_eq!(config.ramp_target, 10);
        assert_eq!(config.ramp_optimal, 12);
        assert_eq!(config.card_advantage_target, 12);
        assert_eq!(config.card_advantage_optimal, 15);
        assert_eq!(config.targeted_disruption_target, 12);
        assert_eq!(config.mass_disruption_target, 6);
        assert_eq!(config.lands_target, 38);
        assert_eq!(config.plan_cards_target, 30);
    }

    #[test]
    fn validation_config_defaults() {
        let config = ValidationConfig::default();
        assert!(!config.strict_mode);
        assert_eq!(config.max_card_quantity, 100);
        assert_eq!(config.max_card_name_length, 200);
        assert_eq!(config.min_deck_size, 10);
        assert_eq!(config.max_validation_errors, 50);
    }

    #[test]
    fn logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn reject_oversized_batch() {
        let json = r#"{ "scryfall": { "batch_size": 100 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_zero_batch() {
        let json = r#"{ "scryfall": { "batch_size": 0 } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_non_http_base() {
        let json = r#"{ "scryfall": { "api_base": "ftp://cards" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_invalid_log_level() {
        let json = r#"{ "logging": { "level": "loud" } }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn reject_unknown_fields() {
        let json = r#"{
            "unknown_field": "value"
        }"#;

        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
