//! Format-independent sanity checks on an aggregated deck.

use crate::deck::aggregate::{total_quantity, CardQuantityMap};
use crate::deck::result::ValidationResult;
use crate::deck::settings::ValidationSettings;

/// Fewer unique cards than this produces a diversity warning.
const MIN_UNIQUE_CARDS: usize = 10;

/// More copies of a single card than this produces a warning.
const MAX_COPIES_BEFORE_WARNING: u64 = 20;

/// Checks deck size, diversity and outlier quantities.
///
/// Only the empty-deck case is an error here. Everything else is advisory;
/// format legality is left to [`FormatRules`](crate::deck::FormatRules).
#[must_use]
pub fn validate_structure(cards: &CardQuantityMap, settings: &ValidationSettings) -> ValidationResult {
    let mut result = settings.new_result();

    if cards.is_empty() {
        result.add_error("Deck cannot be empty");
        return result;
    }

    let total = total_quantity(cards);
    let unique = cards.len();

    if total == 0 {
        result.add_error("Deck has no cards");
    } else if total < settings.min_deck_size {
        result.add_warning(format!("Very small deck with only {total} cards"));
    }

    if unique == 0 {
        result.add_error("Deck has no unique cards");
    } else if unique < MIN_UNIQUE_CARDS {
        result.add_warning(format!("Low card diversity with only {unique} unique cards"));
    }

    for (name, &quantity) in cards {
        if quantity > MAX_COPIES_BEFORE_WARNING {
            result.add_warning(format!("Very high quantity of '{name}': {quantity} copies"));
        }
    }

    result
}
