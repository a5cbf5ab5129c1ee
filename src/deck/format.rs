//! Format legality rules.
//!
//! Each constructed format implements [`FormatRules`]. The coordinator only
//! sees the trait, so adding a format does not touch parsing, aggregation or
//! structural checks.

use crate::deck::aggregate::{total_quantity, CardQuantityMap};
use crate::deck::result::{ValidationPolicy, ValidationResult};

/// Basic lands, exempt from copy limits.
pub const BASIC_LANDS: [&str; 6] = ["Plains", "Island", "Swamp", "Mountain", "Forest", "Wastes"];

/// Returns `true` if `name` is a basic land, ignoring ASCII case.
#[must_use]
pub fn is_basic_land(name: &str) -> bool {
    BASIC_LANDS
        .iter()
        .any(|basic| basic.eq_ignore_ascii_case(name.trim()))
}

/// Legality rules for one constructed format.
pub trait FormatRules: Send + Sync {
    /// Display name of the format.
    fn name(&self) -> &'static str;

    /// Judges an aggregated deck body.
    ///
    /// `commander_copies_removed` is the number of commander copies stripped
    /// from the body before this call; formats without a commander ignore it.
    fn validate(
        &self,
        commander: &str,
        deck: &CardQuantityMap,
        commander_copies_removed: u64,
        policy: ValidationPolicy,
    ) -> ValidationResult;
}

/// Commander (EDH): 99 singleton cards plus one commander.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommanderRules;

impl CommanderRules {
    /// Required total including the commander.
    pub const DECK_SIZE: u64 = 100;

    /// Body size below which a thin-deck warning is raised.
    pub const MIN_BODY_SIZE: u64 = 90;
}

impl FormatRules for CommanderRules {
    fn name(&self) -> &'static str {
        "Commander"
    }

    fn validate(
        &self,
        commander: &str,
        deck: &CardQuantityMap,
        commander_copies_removed: u64,
        policy: ValidationPolicy,
    ) -> ValidationResult {
        let mut result = ValidationResult::new(policy);

        if commander.trim().is_empty() {
            result.add_error("Commander is required for Commander format");
            return result;
        }

        let body = total_quantity(deck);
        let total = body.saturating_add(1);

        if total < Self::DECK_SIZE {
            result.add_error(format!(
                "Deck has only {total} cards (need exactly {} for Commander format)",
                Self::DECK_SIZE
            ));
        } else if total > Self::DECK_SIZE {
            result.add_error(format!(
                "Deck has {total} cards (need exactly {} for Commander format)",
                Self::DECK_SIZE
            ));
        }

        for (name, &quantity) in deck {
            if quantity > 1 && !is_basic_land(name) {
                result.add_error(format!(
                    "'{name}' appears {quantity} times (Commander format allows only 1 copy of each non-basic card)"
                ));
            }
        }

        if commander_copies_removed > 0 {
            result.add_warning(format!(
                "Removed {commander_copies_removed} copies of commander '{commander}' from deck list"
            ));
        }

        if body < Self::MIN_BODY_SIZE {
            result.add_warning(
                "Deck has fewer than 90 cards (excluding commander), consider adding more cards",
            );
        }

        result
    }
}
