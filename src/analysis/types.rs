//! Card type distribution.

use indexmap::IndexMap;

use crate::analysis::{not_found_section, percentage, NO_CARD_NAMES};
use crate::scryfall::{CardDatabase, LookupOutcome};

/// Type lines printed in the "most common" section.
const MAX_COMMON_TYPE_LINES: usize = 8;

/// Type word and full-prefix counts for a card list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDistribution {
    /// Each type word (supertypes included), most frequent first.
    pub types: Vec<(String, usize)>,
    /// Type line prefixes before the em dash, most frequent first.
    pub type_lines: Vec<(String, usize)>,
}

impl TypeDistribution {
    /// Count for one type word.
    #[must_use]
    pub fn count(&self, card_type: &str) -> usize {
        self.types
            .iter()
            .find(|(name, _)| name == card_type)
            .map_or(0, |(_, count)| *count)
    }
}

fn sorted_by_count(counts: IndexMap<String, usize>) -> Vec<(String, usize)> {
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

/// Counts type words and type line prefixes.
#[must_use]
pub fn type_distribution(outcome: &LookupOutcome) -> TypeDistribution {
    let mut types: IndexMap<String, usize> = IndexMap::new();
    let mut type_lines: IndexMap<String, usize> = IndexMap::new();

    for card in outcome.cards() {
        let primary = card
            .type_line
            .split(" — ")
            .next()
            .unwrap_or_default()
            .trim();

        for word in primary.split_whitespace() {
            let word = word.trim_end_matches(',');
            if !word.is_empty() {
                *types.entry(word.to_string()).or_default() += 1;
            }
        }
        *type_lines.entry(primary.to_string()).or_default() += 1;
    }

    TypeDistribution {
        types: sorted_by_count(types),
        type_lines: sorted_by_count(type_lines),
    }
}

fn range_guideline(label: &str, count: usize, low: usize, high: usize) -> String {
    if (low..=high).contains(&count) {
        format!("✓ {label} ({count}): Good range ({low}-{high} typical)")
    } else if count < low {
        format!("⚠ {label} ({count}): Below typical range ({low}-{high})")
    } else {
        format!("⚠ {label} ({count}): Above typical range ({low}-{high})")
    }
}

/// Renders the Markdown type report.
///
/// `requested` is the number of non-blank names asked for.
#[must_use]
pub fn render_card_types(outcome: &LookupOutcome, requested: usize) -> String {
    let distribution = type_distribution(outcome);
    let found = requested.saturating_sub(outcome.not_found.len());

    let mut lines = vec![
        "**Card Type Distribution:**".to_string(),
        format!("Total Cards Analyzed: {found} of {requested}"),
        "\n**All Card Types Found:**".to_string(),
    ];
    for (card_type, count) in &distribution.types {
        lines.push(format!(
            "{card_type}: {count} ({:.1}%)",
            percentage(*count, found)
        ));
    }

    lines.push("\n**Commander Deck Guidelines:**".to_string());
    let creatures = distribution.count("Creature");
    if creatures > 0 {
        lines.push(range_guideline("Creatures", creatures, 25, 35));
    }
    let lands = distribution.count("Land");
    if lands > 0 {
        lines.push(range_guideline("Lands", lands, 36, 40));
    }
    let instants = distribution.count("Instant");
    let sorceries = distribution.count("Sorcery");
    if instants + sorceries > 0 {
        lines.push(format!(
            "• Instants + Sorceries: {} ({instants} instants, {sorceries} sorceries)",
            instants + sorceries
        ));
    }
    let artifacts = distribution.count("Artifact");
    if artifacts > 0 {
        lines.push(format!("• Artifacts: {artifacts}"));
    }
    let enchantments = distribution.count("Enchantment");
    if enchantments > 0 {
        lines.push(format!("• Enchantments: {enchantments}"));
    }

    lines.push("\n**Most Common Type Lines:**".to_string());
    lines.extend(
        distribution
            .type_lines
            .iter()
            .take(MAX_COMMON_TYPE_LINES)
            .filter(|(_, count)| *count > 1)
            .map(|(line, count)| format!("{line}: {count}")),
    );

    lines.extend(not_found_section(&outcome.not_found));
    lines.join("\n")
}

/// Looks up `names` and renders the type report.
pub async fn analyze_card_types(db: &dyn CardDatabase, names: &[String]) -> String {
    if names.is_empty() {
        return NO_CARD_NAMES.to_string();
    }
    let requested = names.iter().filter(|name| !name.trim().is_empty()).count();
    render_card_types(&db.lookup_many(names).await, requested)
}
