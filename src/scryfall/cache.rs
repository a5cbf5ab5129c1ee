//! Bounded key-value cache with a time-to-live.
//!
//! Entries older than the TTL are never returned. When the cache is full,
//! expired entries are purged first and then the oldest insertion is evicted.

use std::time::{Duration, Instant};

use indexmap::IndexMap;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    inserted: Instant,
}

/// Bounded TTL cache keyed by string.
#[derive(Debug, Clone)]
pub struct TtlCache<V> {
    entries: IndexMap<String, Entry<V>>,
    max_entries: usize,
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    /// Creates an empty cache.
    ///
    /// A `max_entries` of zero disables caching.
    #[must_use]
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: IndexMap::new(),
            max_entries,
            ttl,
        }
    }

    /// Number of stored entries, including expired ones not yet purged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a live entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        self.insert_at(key.into(), value, Instant::now());
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn is_live(&self, entry: &Entry<V>, now: Instant) -> bool {
        now.saturating_duration_since(entry.inserted) < self.ttl
    }

    fn get_at(&self, key: &str, now: Instant) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| self.is_live(entry, now))
            .map(|entry| entry.value.clone())
    }

    fn insert_at(&mut self, key: String, value: V, now: Instant) {
        if self.max_entries == 0 {
            return;
        }

        // Re-insertion refreshes both the timestamp and the eviction order.
        self.entries.shift_remove(&key);

        if self.entries.len() >= self.max_entries {
            let ttl = self.ttl;
            self.entries
                .retain(|_, entry| now.saturating_duration_since(entry.inserted) < ttl);
        }
        while self.entries.len() >= self.max_entries {
            self.entries.shift_remove_index(0);
        }

        self.entries.insert(
            key,
            Entry {
                value,
                inserted: now,
            },
        );
    }
}
