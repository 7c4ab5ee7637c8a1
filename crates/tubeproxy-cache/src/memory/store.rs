//! In-memory cache backend with strict LRU eviction and lazy expiry.

use std::num::NonZeroUsize;
use std::time::Duration;

use async_trait::async_trait;
use lru::LruCache;
use parking_lot::Mutex;
use tokio::time::Instant;

use tubeproxy_core::traits::cache::CacheBackend;

/// A stored value together with its absolute expiry instant.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// In-memory cache backend bounded by entry count.
///
/// Entries are kept in strict access order: a read-hit promotes the entry to
/// most-recently-used, and a write that would exceed capacity evicts the
/// least-recently-used entry. Expiry is checked lazily on read; the expired
/// entry is removed on the access that discovers it.
///
/// The map is guarded by a mutex held for the duration of each call and
/// never across an await point.
#[derive(Debug)]
pub struct MemoryCacheBackend {
    entries: Mutex<LruCache<String, CacheEntry>>,
}

impl MemoryCacheBackend {
    /// Create a new in-memory backend holding at most `max_size` entries.
    pub fn new(max_size: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(max_size)),
        }
    }
}

#[async_trait]
impl CacheBackend for MemoryCacheBackend {
    async fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock();
        let entry = entries.get(key)?.clone();
        if Instant::now() > entry.expires_at {
            entries.pop(key);
            return None;
        }
        Some(entry.value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };
        // `put` replaces an existing key at the most-recent position and
        // evicts the least-recently-used entry when at capacity.
        self.entries.lock().put(key.to_string(), entry);
    }

    async fn delete(&self, key: &str) {
        self.entries.lock().pop(key);
    }

    async fn clear(&self) {
        self.entries.lock().clear();
    }

    async fn size(&self) -> usize {
        self.entries.lock().len()
    }

    async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock();
        let now = Instant::now();
        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| now > entry.expires_at)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            entries.pop(key);
        }
        expired.len()
    }
}
