//! End-to-end deck list validation.
//!
//! These tests drive the public pipeline the same way the MCP tools do:
//! raw lines in, one `ValidationResult` out.

use mtg_deck_mcp::deck::aggregate::aggregate;
use mtg_deck_mcp::deck::{
    parse_line, total_quantity, DeckValidator, ParseIssue, ValidationPolicy, ValidationSettings,
};

const ATRAXA: &str = "Atraxa, Praetors' Voice";

fn singletons(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("1 Staple {i}")).collect()
}

fn has(messages: &[String], needle: &str) -> bool {
    messages.iter().any(|m| m.contains(needle))
}

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn test_mixed_quantity_styles() {
    let (cards, result) = aggregate(
        &["4 Forest", "2x Sol Ring", "Lightning Bolt", "1 Command Tower"],
        &ValidationSettings::default(),
    );

    assert!(result.is_valid());
    assert!(result.errors().is_empty());
    let entries: Vec<(&str, u64)> = cards.iter().map(|(n, &q)| (n.as_str(), q)).collect();
    assert_eq!(
        entries,
        [
            ("Forest", 4),
            ("Sol Ring", 2),
            ("Lightning Bolt", 1),
            ("Command Tower", 1)
        ]
    );
}

#[test]
fn test_non_positive_and_huge_quantities() {
    let (cards, result) = aggregate(
        &["0 Lightning Bolt", "-1x Sol Ring", "999x Command Tower"],
        &ValidationSettings::default(),
    );

    assert!(!result.is_valid());
    assert!(has(result.errors(), "Invalid quantity 0"));
    assert!(has(result.errors(), "Invalid quantity -1"));
    assert!(result
        .warnings()
        .iter()
        .any(|w| w.contains("Very high quantity") && w.contains("Command Tower")));
    assert_eq!(cards.len(), 1);
    assert_eq!(cards.get("Command Tower"), Some(&999));
}

#[test]
fn test_duplicates_merge_with_one_warning() {
    let (cards, result) = aggregate(&["4 Forest", "Forest", "2 Forest"], &ValidationSettings::default());

    assert_eq!(cards.get("Forest"), Some(&7));
    let merges = result
        .warnings()
        .iter()
        .filter(|w| w.starts_with("Duplicate card 'Forest'"))
        .count();
    assert_eq!(merges, 1);
}

#[test]
fn test_quantities_beyond_four_billion_are_kept() {
    let (cards, result) = aggregate(&["5000000000 Forest"], &ValidationSettings::default());
    assert_eq!(cards.get("Forest"), Some(&5_000_000_000));
    assert_eq!(
        result.warnings(),
        ["Very high quantity 5000000000 for 'Forest' at position 1"]
    );

    let (cards, result) = aggregate(
        &["4000000000 Forest", "4000000000 Forest"],
        &ValidationSettings::default(),
    );
    assert!(result.is_valid());
    assert_eq!(total_quantity(&cards), 8_000_000_000);
}

#[test]
fn test_total_overflow_is_reported_not_clamped() {
    let max = format!("{} Forest", i64::MAX);
    let lines = [max.as_str(), max.as_str(), "2 Island", "1 Swamp"];
    let (cards, result) = aggregate(&lines, &ValidationSettings::default());

    assert!(!result.is_valid());
    assert_eq!(
        result.errors(),
        ["Quantity 2 for 'Island' at position 3 overflows the deck total"]
    );
    assert!(!cards.contains_key("Island"));
    assert_eq!(cards.get("Swamp"), Some(&1));
    assert_eq!(total_quantity(&cards), u64::MAX);
}

#[test]
fn test_total_matches_accepted_lines() {
    let lines = ["3 Island", "0 Swamp", "2x Mountain", "-4 Plains", "Sol Ring", "1 Island"];
    let (cards, _) = aggregate(&lines, &ValidationSettings::default());
    assert_eq!(total_quantity(&cards), 3 + 2 + 1 + 1);
}

#[test]
fn test_empty_decklist() {
    let empty: [&str; 0] = [];
    let (cards, result) = aggregate(&empty, &ValidationSettings::default());
    assert!(cards.is_empty());
    assert_eq!(result.errors(), ["Decklist cannot be empty"]);
}

#[test]
fn test_blank_lines_between_entries() {
    let (cards, result) = aggregate(&["1 Sol Ring", "   ", "", "1 Forest"], &ValidationSettings::default());

    assert!(result.is_valid());
    assert_eq!(cards.len(), 2);
    assert_eq!(
        result.warnings(),
        [
            "Empty entry at position 2, skipping",
            "Empty entry at position 3, skipping"
        ]
    );
}

// =============================================================================
// Line parsing boundaries
// =============================================================================

#[test]
fn test_name_length_boundary() {
    let at_limit = "a".repeat(200);
    let entry = parse_line(&at_limit, 1, 200).unwrap().unwrap();
    assert_eq!(entry.name.len(), 200);
    assert_eq!(entry.quantity, 1);

    let too_long = "b".repeat(250);
    let issue = parse_line(&too_long, 7, 200).unwrap_err();
    assert!(matches!(issue, ParseIssue::NameTooLong { position: 7, max: 200, .. }));
}

#[test]
fn test_long_name_reported_by_aggregation() {
    let lines = [format!("1 {}", "c".repeat(250)), "1 Sol Ring".to_string()];
    let (cards, result) = aggregate(&lines, &ValidationSettings::default());

    assert_eq!(cards.len(), 1);
    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].starts_with("Card name too long at position 1:"));
    assert!(result.errors()[0].ends_with("(max 200 characters)"));
}

#[test]
fn test_placeholder_prefix_is_rejected_but_words_are_not() {
    let (cards, result) = aggregate(&["abc Island", "The Ur-Dragon", "Sol Ring"], &ValidationSettings::default());

    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].starts_with("Invalid quantity format at position 1"));
    assert!(cards.contains_key("The Ur-Dragon"));
    assert!(cards.contains_key("Sol Ring"));
}

// =============================================================================
// Full Commander validation
// =============================================================================

#[test]
fn test_legal_deck_with_basic_land_stack() {
    let mut lines = singletons(89);
    lines.push("10 Forest".to_string());

    let result = DeckValidator::default().validate_full_deck(ATRAXA, &lines);
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
}

#[test]
fn test_singleton_violations_name_card_and_count() {
    let mut lines = singletons(93);
    lines.push("4 Lightning Bolt".to_string());
    lines.push("2 Command Tower".to_string());

    let result = DeckValidator::default().validate_full_deck(ATRAXA, &lines);
    assert!(!result.is_valid());
    assert_eq!(result.errors().len(), 2);
    assert!(has(result.errors(), "'Lightning Bolt' appears 4 times"));
    assert!(has(result.errors(), "'Command Tower' appears 2 times"));
}

#[test]
fn test_missing_commander() {
    let result = DeckValidator::default().validate_full_deck("", &singletons(99));
    assert!(!result.is_valid());
    assert_eq!(result.errors(), ["Commander is required for Commander format"]);
}

#[test]
fn test_every_problem_reported_in_one_pass() {
    let lines = ["0 Lightning Bolt", "", "xyz Sol Ring", "3 Sol Ring", "25 Forest"];
    let result = DeckValidator::default().validate_full_deck(ATRAXA, &lines);

    assert!(!result.is_valid());
    assert!(has(result.errors(), "Invalid quantity 0"));
    assert!(has(result.errors(), "Invalid quantity format at position 3"));
    assert!(has(result.errors(), "'Sol Ring' appears 3 times"));
    assert!(has(result.errors(), "Deck has only 29 cards"));
    assert!(has(result.warnings(), "Empty entry at position 2"));
    assert!(has(result.warnings(), "Very high quantity of 'Forest': 25 copies"));
    assert!(has(result.warnings(), "Deck has fewer than 90 cards"));
    assert_eq!(result.is_valid(), result.errors().is_empty());
}

#[test]
fn test_identical_runs_are_identical() {
    let validator = DeckValidator::default();
    let lines = ["4 Forest", "2x Sol Ring", "0 Island", "def Plains"];
    let first = validator.validate_full_deck(ATRAXA, &lines);
    let second = validator.validate_full_deck(ATRAXA, &lines);
    assert_eq!(first, second);
    assert_eq!(first.summary(), second.summary());
}

#[test]
fn test_strict_mode_promotes_warnings() {
    let settings = ValidationSettings {
        policy: ValidationPolicy::default().strict(),
        ..ValidationSettings::default()
    };
    let mut lines = singletons(98);
    lines.push(String::new());
    lines.push("1 Forest".to_string());

    let lenient = DeckValidator::default().validate_full_deck(ATRAXA, &lines);
    assert!(lenient.is_valid());
    assert_eq!(lenient.warnings().len(), 1);

    let strict = DeckValidator::commander(settings).validate_full_deck(ATRAXA, &lines);
    assert!(!strict.is_valid());
    assert_eq!(strict.errors(), ["Empty entry at position 99, skipping"]);
    assert!(strict.warnings().is_empty());
}
