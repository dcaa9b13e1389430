//! Keyed payload cache with in-memory storage

use crate::types::{CacheEntry, CacheStats};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

/// Default freshness window: 5 minutes
pub const DEFAULT_TTL_MS: i64 = 300_000;

/// Normalize a category key so lookups are case-insensitive
pub fn normalize_key(key: &str) -> String {
    key.to_uppercase()
}

/// A payload cache keyed by normalized category name
///
/// Stale entries are never removed by reads. They are overwritten by the next
/// `set` for the same key, or dropped when a bounded cache needs room.
pub struct CategoryCache<V> {
    /// Entries keyed by normalized category
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    /// How long an entry stays valid after it is stored
    ttl: TimeDelta,
    /// Optional upper bound on the number of stored keys
    max_entries: Option<usize>,
    /// Cache hit counter
    hits: AtomicU64,
    /// Cache miss counter
    misses: AtomicU64,
}

impl<V: Clone> CategoryCache<V> {
    /// Create an unbounded cache with the default 5 minute TTL
    pub fn new() -> Self {
        Self::with_ttl(TimeDelta::milliseconds(DEFAULT_TTL_MS))
    }

    /// Create an unbounded cache with a custom TTL
    pub fn with_ttl(ttl: TimeDelta) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            max_entries: None,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Bound the number of stored keys. A bound of zero is treated as one.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries.max(1));
        self
    }

    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    /// Look up a fresh entry for `key`
    ///
    /// Never removes entries, but does bump the hit or miss counter.
    pub async fn get(&self, key: &str) -> Option<CacheEntry<V>> {
        self.get_at(key, Utc::now()).await
    }

    /// Look up a fresh entry for `key` as of `now`, counting the hit or miss
    pub async fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<CacheEntry<V>> {
        let key = normalize_key(key);

        let entry = {
            let entries = self.entries.read().await;
            entries
                .get(&key)
                .filter(|entry| entry.is_fresh(now, self.ttl))
                .cloned()
        };

        match entry {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "Cache hit");
                Some(entry)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "Cache miss");
                None
            }
        }
    }

    /// Store `payload` under `key`, replacing any previous entry
    pub async fn set(&self, key: &str, payload: V) {
        self.set_at(key, payload, Utc::now()).await
    }

    /// Store `payload` under `key` stamped with `stored_at`
    pub async fn set_at(&self, key: &str, payload: V, stored_at: DateTime<Utc>) {
        let key = normalize_key(key);
        let mut entries = self.entries.write().await;

        if let Some(max) = self.max_entries {
            if !entries.contains_key(&key) && entries.len() >= max {
                evict(&mut entries, max - 1, stored_at, self.ttl);
            }
        }

        debug!(key = %key, "Cached payload");
        entries.insert(
            key.clone(),
            CacheEntry {
                key,
                payload,
                stored_at,
            },
        );
    }

    /// Number of stored entries, stale ones included
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Get current cache statistics
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        CacheStats {
            entries: entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<V: Clone> Default for CategoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shrink `entries` to at most `target` keys: stale entries go first, then the
/// oldest by `stored_at`
fn evict<V>(
    entries: &mut HashMap<String, CacheEntry<V>>,
    target: usize,
    now: DateTime<Utc>,
    ttl: TimeDelta,
) {
    let before = entries.len();
    entries.retain(|_, entry| entry.is_fresh(now, ttl));
    if entries.len() < before {
        debug!(evicted = before - entries.len(), "Evicted stale cache entries");
    }

    while entries.len() > target {
        let oldest_key = entries
            .iter()
            .min_by_key(|(_, entry)| entry.stored_at)
            .map(|(key, _)| key.clone());

        match oldest_key {
            Some(key) => {
                entries.remove(&key);
                debug!(key = %key, "Evicted oldest cache entry");
            }
            None => break,
        }
    }
}
