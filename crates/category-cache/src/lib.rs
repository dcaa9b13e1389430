//! In-memory category cache with TTL freshness and optional size bound
//!
//! Stores fetched upstream payloads keyed by an uppercased category name.
//! Entries older than the TTL are treated as absent but stay in place until
//! the next successful store for the same key overwrites them.

mod cache;
mod types;

pub use cache::{normalize_key, CategoryCache, DEFAULT_TTL_MS};
pub use types::{CacheEntry, CacheStats};
