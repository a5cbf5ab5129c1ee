//! Markdown replies for the lookup and search tools.

use serde::Deserialize;
use tracing::warn;

use crate::scryfall::database::{CardDatabase, LookupOutcome, SearchOutcome};

/// Largest search page a client may ask for.
pub const MAX_SEARCH_LIMIT: usize = 25;

const fn default_limit() -> usize {
    10
}

/// Filters for a card search. Absent fields do not constrain the search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchCriteria {
    /// Partial card name.
    #[serde(default)]
    pub name: Option<String>,
    /// Color filter, e.g. `red` or `wu`.
    #[serde(default)]
    pub colors: Option<String>,
    /// Type filter, e.g. `creature`.
    #[serde(default)]
    pub type_line: Option<String>,
    /// Exact converted mana cost.
    #[serde(default)]
    pub mana_cost: Option<u32>,
    /// Maximum number of results, clamped to `1..=25`.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            name: None,
            colors: None,
            type_line: None,
            mana_cost: None,
            limit: default_limit(),
        }
    }
}

impl SearchCriteria {
    /// Builds the Scryfall query string, or `None` when no filter is set.
    #[must_use]
    pub fn query(&self) -> Option<String> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let mut parts = Vec::new();
        if let Some(name) = present(&self.name) {
            parts.push(format!("name:\"{name}\""));
        }
        if let Some(colors) = present(&self.colors) {
            parts.push(format!("color:{colors}"));
        }
        if let Some(type_line) = present(&self.type_line) {
            parts.push(format!("type:{type_line}"));
        }
        if let Some(cmc) = self.mana_cost {
            parts.push(format!("cmc:{cmc}"));
        }

        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// The result limit clamped to the supported range.
    #[must_use]
    pub fn clamped_limit(&self) -> usize {
        self.limit.clamp(1, MAX_SEARCH_LIMIT)
    }
}

/// Renders a batch lookup.
#[must_use]
pub fn render_lookup(outcome: &LookupOutcome) -> String {
    let mut parts = Vec::new();
    if !outcome.found.is_empty() {
        parts.push("**Cards Found:**\n".to_string());
        parts.extend(outcome.cards().map(|card| format!("{}\n---\n", card.format_info())));
    }
    if !outcome.not_found.is_empty() {
        parts.push(format!("**Cards Not Found:** {}", outcome.not_found.join(", ")));
    }
    parts.join("\n")
}

/// Renders one page of search results.
#[must_use]
pub fn render_search(query: &str, limit: usize, outcome: &SearchOutcome) -> String {
    if outcome.cards.is_empty() {
        return format!("No cards found matching criteria: {query}");
    }

    let cards: Vec<String> = outcome.cards.iter().map(|card| card.format_info()).collect();
    let mut text = format!("**Search Results for:** {query}\n\n{}", cards.join("\n---\n"));

    if outcome.total_cards > limit as u64 {
        text.push_str(&format!(
            "\n\n*Showing {} of {} total results*",
            outcome.cards.len(),
            outcome.total_cards
        ));
    }
    text
}

/// Looks up `names` and renders the reply.
pub async fn lookup_cards(db: &dyn CardDatabase, names: &[String]) -> String {
    if names.is_empty() {
        return "No card names provided.".to_string();
    }
    render_lookup(&db.lookup_many(names).await)
}

/// Searches by `criteria` and renders the reply.
pub async fn search_cards(db: &dyn CardDatabase, criteria: &SearchCriteria) -> String {
    let Some(query) = criteria.query() else {
        return "No search criteria provided.".to_string();
    };
    let limit = criteria.clamped_limit();

    match db.search(&query, limit).await {
        Ok(outcome) => render_search(&query, limit, &outcome),
        Err(e) => {
            warn!(query = %query, error = %e, "Card search failed");
            format!("Error searching cards: {e}")
        }
    }
}
