//! Thresholds and switches for deck validation.

use crate::config::ValidationConfig;
use crate::deck::parser::DEFAULT_MAX_NAME_LENGTH;
use crate::deck::result::{ValidationPolicy, ValidationResult};

/// Settings shared by every stage of the validation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationSettings {
    /// How warnings and errors are recorded.
    pub policy: ValidationPolicy,
    /// Quantities above this produce a warning during aggregation.
    pub max_card_quantity: u64,
    /// Longest accepted card name, in characters.
    pub max_card_name_length: usize,
    /// Decks with fewer total cards produce a warning.
    pub min_deck_size: u64,
    /// Whether format legality rules run at all.
    pub enable_format_validation: bool,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            max_card_quantity: 100,
            max_card_name_length: DEFAULT_MAX_NAME_LENGTH,
            min_deck_size: 10,
            enable_format_validation: true,
        }
    }
}

impl ValidationSettings {
    /// Returns a fresh result recording under these settings.
    #[must_use]
    pub const fn new_result(&self) -> ValidationResult {
        ValidationResult::new(self.policy)
    }
}

impl From<&ValidationConfig> for ValidationSettings {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            policy: ValidationPolicy {
                strict_mode: config.strict_mode,
                max_errors: config.max_validation_errors,
            },
            max_card_quantity: config.max_card_quantity,
            max_card_name_length: config.max_card_name_length,
            min_deck_size: config.min_deck_size,
            enable_format_validation: config.enable_format_validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let from_config = ValidationSettings::from(&ValidationConfig::default());
        assert_eq!(from_config, ValidationSettings::default());
    }

    #[test]
    fn strict_mode_flows_from_config() {
        let config = ValidationConfig {
            strict_mode: true,
            ..ValidationConfig::default()
        };
        let settings = ValidationSettings::from(&config);
        assert!(settings.policy.strict_mode);
    }
}
