//! Folding parsed deck list lines into a card quantity map.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::deck::parser::parse_line;
use crate::deck::result::ValidationResult;
use crate::deck::settings::ValidationSettings;

/// Card name to cumulative quantity, in first-seen order.
///
/// Names are compared exactly as written. Every stored quantity is positive
/// and the quantities of a map built by [`aggregate`] sum without overflow.
pub type CardQuantityMap = IndexMap<String, u64>;

/// Sum of all quantities in `map`.
#[must_use]
pub fn total_quantity(map: &CardQuantityMap) -> u64 {
    map.values().fold(0, |total, &q| total.saturating_add(q))
}

/// Parses every line and accumulates the valid entries.
///
/// Problems with individual lines are recorded in the returned result and
/// never stop the pass. Only an empty input short-circuits. A name repeated
/// on several lines is merged and warned about once.
#[must_use]
pub fn aggregate<S: AsRef<str>>(
    lines: &[S],
    settings: &ValidationSettings,
) -> (CardQuantityMap, ValidationResult) {
    let mut result = settings.new_result();
    let mut cards = CardQuantityMap::new();

    if lines.is_empty() {
        result.add_error("Decklist cannot be empty");
        return (cards, result);
    }

    let mut total: u64 = 0;
    let mut merged: HashSet<String> = HashSet::new();

    for (index, line) in lines.iter().enumerate() {
        let position = index + 1;

        let entry = match parse_line(line.as_ref(), position, settings.max_card_name_length) {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                result.add_warning(format!("Empty entry at position {position}, skipping"));
                continue;
            }
            Err(issue) => {
                result.add_error(issue.to_string());
                continue;
            }
        };

        let quantity = match u64::try_from(entry.quantity) {
            Ok(q) if q > 0 => q,
            _ => {
                result.add_error(format!(
                    "Invalid quantity {} for '{}' at position {position} (must be positive)",
                    entry.quantity, entry.name
                ));
                continue;
            }
        };

        // every per-name sum is bounded by the deck total
        let Some(new_total) = total.checked_add(quantity) else {
            result.add_error(format!(
                "Quantity {quantity} for '{}' at position {position} overflows the deck total",
                entry.name
            ));
            continue;
        };
        total = new_total;

        if quantity > settings.max_card_quantity {
            result.add_warning(format!(
                "Very high quantity {quantity} for '{}' at position {position}",
                entry.name
            ));
        }

        if let Some(existing) = cards.get_mut(&entry.name) {
            *existing += quantity;
            if merged.insert(entry.name.clone()) {
                result.add_warning(format!(
                    "Duplicate card '{}' found, quantities will be combined",
                    entry.name
                ));
            }
        } else {
            cards.insert(entry.name, quantity);
        }
    }

    (cards, result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> (CardQuantityMap, ValidationResult) {
        aggregate(lines, &ValidationSettings::default())
    }

    #[test]
    fn basic_quantity_formats() {
        let (cards, result) = run(&["4 Forest", "2x Sol Ring", "Lightning Bolt", "1 Command Tower"]);
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(cards.len(), 4);
        assert_eq!(cards["Forest"], 4);
        assert_eq!(cards["Sol Ring"], 2);
        assert_eq!(cards["Lightning Bolt"], 1);
        assert_eq!(cards["Command Tower"], 1);
    }

    #[test]
    fn duplicates_are_combined_with_one_warning_per_name() {
        let (cards, result) = run(&["4 Forest", "Forest", "2 Forest", "Island", "Island"]);
        assert!(result.is_valid());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards["Forest"], 7);
        assert_eq!(cards["Island"], 2);
        assert_eq!(
            result.warnings(),
            [
                "Duplicate card 'Forest' found, quantities will be combined",
                "Duplicate card 'Island' found, quantities will be combined",
            ]
        );
    }

    #[test]
    fn single_repeat_gives_exactly_one_duplicate_warning() {
        let (cards, result) = run(&["4 Forest", "3 Forest"]);
        assert_eq!(cards["Forest"], 7);
        assert_eq!(
            result.warnings(),
            ["Duplicate card 'Forest' found, quantities will be combined"]
        );
    }

    #[test]
    fn invalid_quantities_are_rejected_high_ones_warned() {
        let (cards, result) = run(&["0 Lightning Bolt", "-1x Sol Ring", "999x Command Tower"]);
        assert!(!result.is_valid());
        assert_eq!(
            result.errors(),
            [
                "Invalid quantity 0 for 'Lightning Bolt' at position 1 (must be positive)",
                "Invalid quantity -1 for 'Sol Ring' at position 2 (must be positive)",
            ]
        );
        assert_eq!(
            result.warnings(),
            ["Very high quantity 999 for 'Command Tower' at position 3"]
        );
        assert_eq!(cards.len(), 1);
        assert_eq!(cards["Command Tower"], 999);
    }

    #[test]
    fn hundred_is_not_high() {
        let (cards, result) = run(&["100x Command Tower"]);
        assert!(result.warnings().is_empty());
        assert_eq!(cards["Command Tower"], 100);
    }

    #[test]
    fn ambiguous_prefix_is_reported_and_skipped() {
        let (cards, result) = run(&["abc Forest", "Island"]);
        assert_eq!(
            result.errors(),
            ["Invalid quantity format at position 1: 'abc Forest' (quantity must be a number)"]
        );
        assert_eq!(cards.len(), 1);
        assert_eq!(cards["Island"], 1);
    }

    #[test]
    fn blank_lines_warn_and_parsing_continues() {
        let (cards, result) = run(&["", "   ", "Forest", "  Sol Ring  "]);
        assert!(result.is_valid());
        assert_eq!(cards.len(), 2);
        assert_eq!(cards["Forest"], 1);
        assert_eq!(cards["Sol Ring"], 1);
        assert_eq!(
            result.warnings(),
            [
                "Empty entry at position 1, skipping",
                "Empty entry at position 2, skipping",
            ]
        );
    }

    #[test]
    fn long_names_are_errors() {
        let line = format!("1 {}", "A".repeat(250));
        let (cards, result) = run(&[line.as_str(), "Forest"]);
        assert!(!result.is_valid());
        assert!(result.errors()[0].contains("Card name too long"));
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn empty_decklist() {
        let (cards, result) = run(&[]);
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["Decklist cannot be empty"]);
        assert!(cards.is_empty());
    }

    #[test]
    fn large_quantities_are_kept_whole() {
        let (cards, result) = run(&["5000000000 Forest"]);
        assert!(result.is_valid());
        assert_eq!(cards["Forest"], 5_000_000_000);
        assert_eq!(
            result.warnings(),
            ["Very high quantity 5000000000 for 'Forest' at position 1"]
        );

        let (cards, result) = run(&["4000000000 Forest", "4000000000 Forest"]);
        assert!(result.is_valid());
        assert_eq!(total_quantity(&cards), 8_000_000_000);
    }

    #[test]
    fn deck_total_overflow_is_an_error() {
        let max = i64::MAX.to_string();
        let lines = [
            format!("{max} Forest"),
            format!("{max} Island"),
            "3 Forest".to_string(),
            "1 Swamp".to_string(),
        ];
        let (cards, result) = run(&lines.iter().map(String::as_str).collect::<Vec<_>>());

        assert!(!result.is_valid());
        assert_eq!(
            result.errors(),
            ["Quantity 3 for 'Forest' at position 3 overflows the deck total"]
        );
        assert_eq!(cards["Forest"], i64::MAX.unsigned_abs());
        assert_eq!(cards["Swamp"], 1);
        assert_eq!(total_quantity(&cards), u64::MAX);
    }

    #[test]
    fn total_matches_sum_of_accepted_quantities() {
        let (cards, _) = run(&["3 Forest", "0 Island", "2 Swamp", "-4 Plains", "Forest"]);
        assert_eq!(total_quantity(&cards), 6);
    }

    #[test]
    fn first_seen_order_is_kept() {
        let (cards, _) = run(&["Swamp", "Island", "Swamp", "Forest"]);
        let names: Vec<_> = cards.keys().map(String::as_str).collect();
        assert_eq!(names, ["Swamp", "Island", "Forest"]);
    }

    #[test]
    fn configured_quantity_threshold() {
        let settings = ValidationSettings {
            max_card_quantity: 4,
            ..ValidationSettings::default()
        };
        let (_, result) = aggregate(&["5 Relentless Rats"], &settings);
        assert_eq!(
            result.warnings(),
            ["Very high quantity 5 for 'Relentless Rats' at position 1"]
        );
    }
}
