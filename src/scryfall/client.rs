//! HTTP client for the Scryfall API.
//!
//! Endpoints used:
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | single fuzzy lookup | `GET /cards/named?fuzzy=<name>` |
//! | batch lookup | `POST /cards/collection` |
//! | criteria search | `GET /cards/search?q=<query>&page=1&order=name` |
//!
//! A batch whose request fails falls back to one fuzzy lookup per name.
//! Lookup failures are logged and reported as "not found"; only search
//! surfaces transport errors to the caller.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::{CacheConfig, ScryfallConfig, SCRYFALL_MAX_BATCH};
use crate::scryfall::cache::TtlCache;
use crate::scryfall::card::CardRecord;
use crate::scryfall::database::{cache_key, CardDatabase, FoundCard, LookupOutcome, SearchOutcome};
use crate::scryfall::error::ScryfallError;

/// `POST /cards/collection` response body.
#[derive(Debug, Default, Deserialize)]
struct CollectionResponse {
    #[serde(default)]
    data: Vec<CardRecord>,
    #[serde(default)]
    not_found: Vec<Identifier>,
}

#[derive(Debug, Deserialize)]
struct Identifier {
    #[serde(default)]
    name: Option<String>,
}

/// `GET /cards/search` response body.
#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    data: Vec<CardRecord>,
    #[serde(default)]
    total_cards: Option<u64>,
}

/// Scryfall API client with owned card and search caches.
#[derive(Debug)]
pub struct ScryfallClient {
    api_base: String,
    http: Client,
    batch_size: usize,
    card_cache: Mutex<TtlCache<CardRecord>>,
    search_cache: Mutex<TtlCache<SearchOutcome>>,
}

impl ScryfallClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API base is not a URL or the HTTP client
    /// cannot be built.
    pub fn new(scryfall: &ScryfallConfig, cache: &CacheConfig) -> Result<Self, ScryfallError> {
        let api_base = scryfall.api_base.trim_end_matches('/').to_string();
        Url::parse(&api_base).map_err(|_| ScryfallError::InvalidBaseUrl {
            url: scryfall.api_base.clone(),
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(scryfall.request_timeout_secs))
            .user_agent(scryfall.user_agent.clone())
            .build()?;

        let ttl = Duration::from_secs(cache.ttl_seconds);

        Ok(Self {
            api_base,
            http,
            batch_size: scryfall.batch_size.clamp(1, SCRYFALL_MAX_BATCH),
            card_cache: Mutex::new(TtlCache::new(cache.max_card_cache_size, ttl)),
            search_cache: Mutex::new(TtlCache::new(cache.max_search_cache_size, ttl)),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    fn cards(&self) -> MutexGuard<'_, TtlCache<CardRecord>> {
        self.card_cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn searches(&self) -> MutexGuard<'_, TtlCache<SearchOutcome>> {
        self.search_cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Caches `card` under the requested name and its canonical name.
    fn remember(&self, requested: &str, card: &CardRecord) {
        let mut cache = self.cards();
        let requested_key = cache_key(requested);
        let canonical_key = cache_key(&card.name);
        if canonical_key != requested_key {
            cache.insert(canonical_key, card.clone());
        }
        cache.insert(requested_key, card.clone());
    }

    async fn fetch_named(&self, name: &str) -> Result<Option<CardRecord>, ScryfallError> {
        let response = self
            .http
            .get(self.endpoint("/cards/named"))
            .query(&[("fuzzy", name)])
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(Some(response.json().await?)),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(ScryfallError::Status {
                status: status.as_u16(),
                endpoint: "/cards/named",
            }),
        }
    }

    async fn fetch_collection(&self, batch: &[String]) -> Result<CollectionResponse, ScryfallError> {
        let identifiers: Vec<_> = batch.iter().map(|name| json!({ "name": name })).collect();

        let response = self
            .http
            .post(self.endpoint("/cards/collection"))
            .header(header::ACCEPT, "application/json")
            .json(&json!({ "identifiers": identifiers }))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ScryfallError::Status {
                status: response.status().as_u16(),
                endpoint: "/cards/collection",
            });
        }

        Ok(response.json().await?)
    }

    async fn lookup_individually(&self, names: &[String], resolved: &mut HashMap<String, CardRecord>) {
        for name in names {
            if let Some(card) = self.lookup_one(name).await {
                resolved.insert(cache_key(name), card);
            }
        }
    }
}

/// Pairs collection results with the names that requested them.
///
/// Returns the matched pairs and the names that were neither matched nor
/// reported missing, which deserve a fuzzy retry.
fn assign_collection(
    batch: &[String],
    response: CollectionResponse,
) -> (Vec<(String, CardRecord)>, Vec<String>) {
    let missing: HashSet<String> = response
        .not_found
        .iter()
        .filter_map(|identifier| identifier.name.as_deref())
        .map(cache_key)
        .collect();

    let mut pool: Vec<Option<CardRecord>> = response.data.into_iter().map(Some).collect();
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for name in batch {
        if missing.contains(&cache_key(name)) {
            continue;
        }
        let card = pool
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|card| card.matches_name(name)))
            .and_then(Option::take);
        match card {
            Some(card) => matched.push((name.clone(), card)),
            None => unmatched.push(name.clone()),
        }
    }

    (matched, unmatched)
}

#[async_trait]
impl CardDatabase for ScryfallClient {
    async fn lookup_one(&self, name: &str) -> Option<CardRecord> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let cached = self.cards().get(&cache_key(name));
        if let Some(card) = cached {
            debug!(card = %name, "Card cache hit");
            return Some(card);
        }

        match self.fetch_named(name).await {
            Ok(Some(card)) => {
                self.remember(name, &card);
                Some(card)
            }
            Ok(None) => {
                debug!(card = %name, "Card not found");
                None
            }
            Err(e) => {
                warn!(card = %name, error = %e, "Card lookup failed");
                None
            }
        }
    }

    async fn lookup_many(&self, names: &[String]) -> LookupOutcome {
        let requested: Vec<&str> = names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();

        let mut resolved: HashMap<String, CardRecord> = HashMap::new();
        let mut pending: Vec<String> = Vec::new();
        let mut seen = HashSet::new();

        for name in &requested {
            let key = cache_key(name);
            if !seen.insert(key.clone()) {
                continue;
            }
            let cached = self.cards().get(&key);
            match cached {
                Some(card) => {
                    resolved.insert(key, card);
                }
                None => pending.push((*name).to_string()),
            }
        }

        debug!(
            requested = requested.len(),
            cached = resolved.len(),
            pending = pending.len(),
            "Batch lookup"
        );

        for batch in pending.chunks(self.batch_size) {
            match self.fetch_collection(batch).await {
                Ok(response) => {
                    let (matched, unmatched) = assign_collection(batch, response);
                    for (name, card) in matched {
                        self.remember(&name, &card);
                        resolved.insert(cache_key(&name), card);
                    }
                    self.lookup_individually(&unmatched, &mut resolved).await;
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        batch = batch.len(),
                        "Batch lookup failed, falling back to individual lookups"
                    );
                    self.lookup_individually(batch, &mut resolved).await;
                }
            }
        }

        let mut outcome = LookupOutcome::default();
        for name in requested {
            match resolved.get(&cache_key(name)) {
                Some(card) => outcome.found.push(FoundCard {
                    requested: name.to_string(),
                    card: card.clone(),
                }),
                None => outcome.not_found.push(name.to_string()),
            }
        }
        outcome
    }

    async fn search(&self, query: &str, limit: usize) -> Result<SearchOutcome, ScryfallError> {
        let key = format!("{query}:{limit}");
        let cached = self.searches().get(&key);
        if let Some(hit) = cached {
            debug!(query = %query, "Search cache hit");
            return Ok(hit);
        }

        let response = self
            .http
            .get(self.endpoint("/cards/search"))
            .query(&[("q", query), ("page", "1"), ("order", "name")])
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let outcome = match response.status() {
            StatusCode::OK => {
                let page: SearchPage = response.json().await?;
                let total_cards = page
                    .total_cards
                    .unwrap_or_else(|| u64::try_from(page.data.len()).unwrap_or(u64::MAX));
                SearchOutcome {
                    cards: page.data.into_iter().take(limit).collect(),
                    total_cards,
                }
            }
            StatusCode::NOT_FOUND => SearchOutcome::default(),
            status => {
                return Err(ScryfallError::Status {
                    status: status.as_u16(),
                    endpoint: "/cards/search",
                })
            }
        };

        for card in &outcome.cards {
            self.remember(&card.name, card);
        }
        self.searches().insert(key, outcome.clone());

        Ok(outcome)
    }
}
