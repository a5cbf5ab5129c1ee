//! Commander analysis against an in-memory card table.

mod common;

use common::{deck_database, filler_names, ATRAXA};
use mtg_deck_mcp::analysis::{CommanderAnalysisError, CommanderAnalyzer};

/// A legal 99-card body: staples, 30 basics and fillers.
fn legal_body() -> Vec<String> {
    let mut lines: Vec<String> = [
        "1 Sol Ring",
        "1 Command Tower",
        "1 Rhystic Study",
        "1 Swords to Plowshares",
        "1 Wrath of God",
        "15 Forest",
        "15 Island",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    lines.extend(filler_names(64).into_iter().map(|name| format!("1 {name}")));
    lines
}

#[tokio::test]
async fn test_legal_deck_report() {
    let db = deck_database(64);
    let report = CommanderAnalyzer::default()
        .analyze(&db, ATRAXA, &legal_body())
        .await
        .unwrap();

    assert_eq!(report.commander.name, ATRAXA);
    assert_eq!(report.commander.color_identity, ["W", "U", "B", "G"]);
    assert_eq!(report.deck.total_cards, 100);
    assert_eq!(report.deck.deck_cards, 99);
    assert!(report.deck.format_valid);
    assert!(!report.deck.commander_in_original_list);
    assert_eq!(report.deck.commander_quantity_removed, 0);
    assert!(report.validation.is_valid);
    assert_eq!(report.validation.summary, "Deck validation passed");

    // basics count once per copy
    assert_eq!(report.categories["Lands"].count, 31);
}

#[tokio::test]
async fn test_commander_copies_are_stripped() {
    let db = deck_database(64);
    let mut lines = vec![ATRAXA.to_string(), format!("2 {ATRAXA}")];
    lines.extend(legal_body());

    let report = CommanderAnalyzer::default()
        .analyze(&db, ATRAXA, &lines)
        .await
        .unwrap();

    assert!(report.deck.commander_in_original_list);
    assert_eq!(report.deck.commander_quantity_removed, 3);
    assert_eq!(report.deck.deck_cards, 99);
    assert!(report.validation.is_valid, "{:?}", report.validation.errors);
    let warnings = report.validation.warnings.as_deref().unwrap();
    assert!(warnings
        .iter()
        .any(|w| w == "Removed 3 copies of commander 'Atraxa, Praetors' Voice' from deck list"));
    assert!(report.cards.iter().all(|c| c.name != ATRAXA));
}

#[tokio::test]
async fn test_invalid_deck_still_produces_report() {
    let db = deck_database(10);
    let lines = ["4 Lightning Bolt", "2 Command Tower", "10 Forest"];

    let report = CommanderAnalyzer::default()
        .analyze(&db, ATRAXA, &lines)
        .await
        .unwrap();

    assert!(!report.validation.is_valid);
    assert!(!report.deck.format_valid);
    assert!(report
        .validation
        .errors
        .iter()
        .any(|e| e.contains("'Lightning Bolt' appears 4 times")));
    assert_eq!(report.cards.len(), 3);
    assert!(report.recommendations.deck_size.is_some());
}

#[tokio::test]
async fn test_lookup_failures_abort() {
    let db = deck_database(0);

    let missing = CommanderAnalyzer::default()
        .analyze(&db, "Atraxa, Praetor's Vioce", &["1 Sol Ring"])
        .await
        .unwrap_err();
    assert_eq!(
        missing.to_string(),
        "Error: Could not find commander 'Atraxa, Praetor's Vioce'. Please check the spelling."
    );

    let unknown = CommanderAnalyzer::default()
        .analyze(&db, ATRAXA, &["1 Sol Ring", "1 Not A Card"])
        .await
        .unwrap_err();
    assert_eq!(
        unknown,
        CommanderAnalysisError::CardsNotFound {
            names: vec!["Not A Card".to_string()]
        }
    );
}

#[tokio::test]
async fn test_empty_inputs_are_rejected() {
    let db = deck_database(0);
    let empty: [&str; 0] = [];
    let err = CommanderAnalyzer::default()
        .analyze(&db, ATRAXA, &empty)
        .await
        .unwrap_err();
    assert_eq!(err, CommanderAnalysisError::MissingInput);
}
