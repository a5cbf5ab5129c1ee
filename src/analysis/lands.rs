//! Land count and colored mana sources.

use crate::analysis::{not_found_section, NO_CARD_NAMES};
use crate::scryfall::{CardDatabase, LookupOutcome, COLORS};

/// Land totals for a card list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandSummary {
    /// Number of land cards.
    pub lands: usize,
    /// Lands producing each color, in WUBRG order.
    pub sources: [usize; 5],
}

/// Counts lands and the colors their rules text produces.
#[must_use]
pub fn summarize_lands(outcome: &LookupOutcome) -> LandSummary {
    let mut summary = LandSummary::default();
    for card in outcome.cards().filter(|card| card.is_land()) {
        summary.lands += 1;
        let oracle = card.oracle_text();
        for (slot, (code, _)) in summary.sources.iter_mut().zip(COLORS) {
            if oracle.contains(&format!("{{{code}}}")) {
                *slot += 1;
            }
        }
    }
    summary
}

/// Renders the Markdown land report.
#[must_use]
pub fn render_lands(outcome: &LookupOutcome) -> String {
    let summary = summarize_lands(outcome);
    let mut lines = vec![format!("**Land Analysis:**\nTotal Lands: {}", summary.lands)];
    for ((_, color), count) in COLORS.iter().zip(summary.sources) {
        lines.push(format!("{color} mana sources: {count}"));
    }
    lines.extend(not_found_section(&outcome.not_found));
    lines.join("\n")
}

/// Looks up `names` and renders the land report.
pub async fn analyze_lands(db: &dyn CardDatabase, names: &[String]) -> String {
    if names.is_empty() {
        return NO_CARD_NAMES.to_string();
    }
    render_lands(&db.lookup_many(names).await)
}
