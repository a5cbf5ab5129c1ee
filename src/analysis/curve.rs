//! Mana curve.

use crate::analysis::{not_found_section, NO_CARD_NAMES};
use crate::scryfall::{CardDatabase, LookupOutcome};

/// Counts resolved cards per mana value, ascending.
///
/// Cards without a mana value are skipped.
#[must_use]
pub fn mana_curve(outcome: &LookupOutcome) -> Vec<(f64, usize)> {
    let mut values: Vec<f64> = outcome.cards().filter_map(|card| card.cmc).collect();
    values.sort_by(f64::total_cmp);

    let mut curve: Vec<(f64, usize)> = Vec::new();
    for value in values {
        match curve.last_mut() {
            Some((last, count)) if last.total_cmp(&value).is_eq() => *count += 1,
            _ => curve.push((value, 1)),
        }
    }
    curve
}

/// Renders the Markdown mana curve report.
#[must_use]
pub fn render_mana_curve(outcome: &LookupOutcome) -> String {
    let mut lines = vec!["**Mana Curve:**".to_string()];
    lines.extend(
        mana_curve(outcome)
            .into_iter()
            .map(|(cmc, count)| format!("CMC {cmc:.1}: {count}")),
    );
    lines.extend(not_found_section(&outcome.not_found));
    lines.join("\n")
}

/// Looks up `names` and renders their mana curve.
pub async fn calculate_mana_curve(db: &dyn CardDatabase, names: &[String]) -> String {
    if names.is_empty() {
        return NO_CARD_NAMES.to_string();
    }
    render_mana_curve(&db.lookup_many(names).await)
}
