//! Full deck validation pipeline.
//!
//! Runs aggregation, structural checks and format rules over one deck list
//! and merges everything into a single [`ValidationResult`]. No stage aborts
//! the others: the caller always receives every problem found in one pass.

use tracing::debug;

use crate::deck::aggregate::{aggregate, CardQuantityMap};
use crate::deck::format::{CommanderRules, FormatRules};
use crate::deck::result::ValidationResult;
use crate::deck::settings::ValidationSettings;
use crate::deck::structure::validate_structure;

/// Coordinates the validation stages for one format.
pub struct DeckValidator {
    settings: ValidationSettings,
    rules: Box<dyn FormatRules>,
}

impl std::fmt::Debug for DeckValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeckValidator")
            .field("settings", &self.settings)
            .field("format", &self.rules.name())
            .finish()
    }
}

impl Default for DeckValidator {
    fn default() -> Self {
        Self::commander(ValidationSettings::default())
    }
}

impl DeckValidator {
    /// Creates a validator for the given format rules.
    #[must_use]
    pub fn new(settings: ValidationSettings, rules: Box<dyn FormatRules>) -> Self {
        Self { settings, rules }
    }

    /// Creates a Commander format validator.
    #[must_use]
    pub fn commander(settings: ValidationSettings) -> Self {
        Self::new(settings, Box::new(CommanderRules))
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &ValidationSettings {
        &self.settings
    }

    /// Returns the format name.
    #[must_use]
    pub fn format_name(&self) -> &'static str {
        self.rules.name()
    }

    /// Parses and aggregates deck list lines.
    #[must_use]
    pub fn aggregate<S: AsRef<str>>(&self, lines: &[S]) -> (CardQuantityMap, ValidationResult) {
        aggregate(lines, &self.settings)
    }

    /// Validates a raw deck list for `commander`.
    #[must_use]
    pub fn validate_full_deck<S: AsRef<str>>(&self, commander: &str, lines: &[S]) -> ValidationResult {
        let (cards, parse_result) = self.aggregate(lines);
        self.validate_aggregated(commander, &cards, parse_result, 0)
    }

    /// Runs the structural and format stages over an aggregated deck.
    ///
    /// `parse_result` is merged first regardless of its validity. Both later
    /// stages run whenever `cards` is non-empty.
    #[must_use]
    pub fn validate_aggregated(
        &self,
        commander: &str,
        cards: &CardQuantityMap,
        parse_result: ValidationResult,
        commander_copies_removed: u64,
    ) -> ValidationResult {
        let mut overall = self.settings.new_result();
        overall.merge(parse_result);

        if !cards.is_empty() {
            overall.merge(validate_structure(cards, &self.settings));

            if self.settings.enable_format_validation {
                overall.merge(self.rules.validate(
                    commander,
                    cards,
                    commander_copies_removed,
                    self.settings.policy,
                ));
            }
        }

        overall.finish();

        debug!(
            format = self.rules.name(),
            unique_cards = cards.len(),
            errors = overall.errors().len(),
            warnings = overall.warnings().len(),
            "Deck validation complete"
        );

        overall
    }
}
