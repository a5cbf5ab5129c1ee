//! The card lookup seam.
//!
//! Analysis code only sees [`CardDatabase`], so it can run against the live
//! Scryfall client or an in-memory table.

use async_trait::async_trait;
use serde::Serialize;

use crate::scryfall::card::CardRecord;
use crate::scryfall::error::ScryfallError;

/// A requested name and the card it resolved to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundCard {
    /// The name as the caller typed it (trimmed).
    pub requested: String,
    /// The resolved card.
    pub card: CardRecord,
}

/// Result of a batch lookup, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupOutcome {
    /// Names that resolved to a card.
    pub found: Vec<FoundCard>,
    /// Names with no matching card, as typed.
    pub not_found: Vec<String>,
}

impl LookupOutcome {
    /// Iterates the resolved cards.
    pub fn cards(&self) -> impl Iterator<Item = &CardRecord> {
        self.found.iter().map(|found| &found.card)
    }
}

/// Result of a criteria search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    /// Matching cards, at most the requested limit.
    pub cards: Vec<CardRecord>,
    /// Total matches reported by the database.
    pub total_cards: u64,
}

/// Card lookup and search.
#[async_trait]
pub trait CardDatabase: Send + Sync {
    /// Resolves one name with fuzzy matching.
    async fn lookup_one(&self, name: &str) -> Option<CardRecord>;

    /// Resolves many names. Blank names are skipped.
    async fn lookup_many(&self, names: &[String]) -> LookupOutcome;

    /// Runs a Scryfall-syntax search, returning at most `limit` cards.
    ///
    /// No matches is an empty outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached.
    async fn search(&self, query: &str, limit: usize) -> Result<SearchOutcome, ScryfallError>;
}

/// Normalises a card name into a cache key.
#[must_use]
pub fn cache_key(name: &str) -> String {
    name.trim().to_lowercase()
}
