//! Card data from the Scryfall API.
//!
//! - [`card`] — the [`CardRecord`] model and its Markdown rendering
//! - [`database`] — the [`CardDatabase`] trait the analysis layer depends on
//! - [`client`] — [`ScryfallClient`], the HTTP implementation
//! - [`cache`] — [`TtlCache`], owned by the client
//! - [`report`] — Markdown replies for the lookup and search tools

pub mod cache;
pub mod card;
pub mod client;
pub mod database;
pub mod error;
pub mod report;

pub use cache::TtlCache;
pub use card::{color_name, CardFace, CardRecord, Prices, COLORS};
pub use client::ScryfallClient;
pub use database::{cache_key, CardDatabase, FoundCard, LookupOutcome, SearchOutcome};
pub use error::ScryfallError;
pub use report::{lookup_cards, search_cards, SearchCriteria};
