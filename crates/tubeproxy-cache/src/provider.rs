//! Transcript/metadata cache facade.
//!
//! The facade translates domain-level requests (video id + optional language
//! variants) into backend operations, honoring the global enabled switch and
//! applying one configured TTL to every write. It is constructed once at
//! startup and passed explicitly to whatever needs it.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{error, info, warn};

use tubeproxy_core::config::cache::{CacheBackendKind, CacheConfig};
use tubeproxy_core::traits::cache::CacheBackend;
use tubeproxy_core::types::{TranscriptSegment, VideoMetadata};

use crate::keys;
use crate::memory::MemoryCacheBackend;
use crate::redis::{RedisCacheBackend, RedisClient};

/// Cache facade for YouTube transcripts and video metadata.
///
/// Best-effort by contract: every operation silently becomes a no-op/miss
/// when the facade is disabled or the backend misbehaves. Callers must be
/// able to proceed (just slower) as if the cache were empty.
#[derive(Debug, Clone)]
pub struct TranscriptCache {
    /// The active backend; `None` when the cache is disabled.
    backend: Option<Arc<dyn CacheBackend>>,
    /// Which backend variant is actually active (after any fallback).
    active: CacheBackendKind,
    enabled: bool,
    ttl: Duration,
    max_size: usize,
}

impl TranscriptCache {
    /// Create a cache facade from configuration.
    ///
    /// Selects the backend variant from `config.backend`. If the Redis
    /// backend cannot be initialized, the facade falls back to the
    /// in-memory LRU backend rather than failing. Note that the fallback
    /// trades distributed cache semantics for per-process ones;
    /// [`TranscriptCache::backend_kind`] reports which backend is live.
    pub async fn new(config: &CacheConfig) -> Self {
        let mut active = config.backend;

        let backend: Option<Arc<dyn CacheBackend>> = if !config.enabled {
            None
        } else {
            match config.backend {
                CacheBackendKind::Redis => match RedisClient::connect(&config.redis).await {
                    Ok(client) => {
                        info!("Initialized Redis cache backend");
                        Some(Arc::new(RedisCacheBackend::new(client)))
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to initialize Redis, falling back to memory cache");
                        active = CacheBackendKind::Memory;
                        Some(Arc::new(MemoryCacheBackend::new(
                            config.max_size_non_zero(),
                        )))
                    }
                },
                CacheBackendKind::Memory => {
                    info!("Initialized in-memory cache backend");
                    Some(Arc::new(MemoryCacheBackend::new(
                        config.max_size_non_zero(),
                    )))
                }
            }
        };

        Self {
            backend,
            active,
            enabled: config.enabled,
            ttl: config.ttl(),
            max_size: config.max_size,
        }
    }

    /// Create a facade around an existing backend (for testing).
    pub fn from_backend(backend: Arc<dyn CacheBackend>, ttl: Duration, max_size: usize) -> Self {
        Self {
            backend: Some(backend),
            active: CacheBackendKind::Memory,
            enabled: true,
            ttl,
            max_size,
        }
    }

    fn backend(&self) -> Option<&Arc<dyn CacheBackend>> {
        if !self.enabled {
            return None;
        }
        self.backend.as_ref()
    }

    /// Get a cached transcript, if present and not expired.
    pub async fn get_transcript(
        &self,
        video_id: &str,
        languages: Option<&[String]>,
    ) -> Option<Vec<TranscriptSegment>> {
        let backend = self.backend()?;
        let key = keys::transcript(video_id, languages);
        let payload = backend.get(&key).await?;
        decode(&key, &payload)
    }

    /// Cache a transcript under the configured TTL.
    pub async fn set_transcript(
        &self,
        video_id: &str,
        transcript: &[TranscriptSegment],
        languages: Option<&[String]>,
    ) {
        let Some(backend) = self.backend() else {
            return;
        };
        let key = keys::transcript(video_id, languages);
        if let Some(payload) = encode(&key, &transcript) {
            backend.set(&key, &payload, self.ttl).await;
        }
    }

    /// Get cached video metadata, if present and not expired.
    pub async fn get_metadata(&self, video_id: &str) -> Option<VideoMetadata> {
        let backend = self.backend()?;
        let key = keys::metadata(video_id);
        let payload = backend.get(&key).await?;
        decode(&key, &payload)
    }

    /// Cache video metadata under the configured TTL.
    pub async fn set_metadata(&self, video_id: &str, metadata: &VideoMetadata) {
        let Some(backend) = self.backend() else {
            return;
        };
        let key = keys::metadata(video_id);
        if let Some(payload) = encode(&key, metadata) {
            backend.set(&key, &payload, self.ttl).await;
        }
    }

    /// Clear all cached data.
    pub async fn clear(&self) {
        if let Some(backend) = self.backend() {
            backend.clear().await;
        }
    }

    /// Current number of cached entries (0 when disabled).
    pub async fn size(&self) -> usize {
        match self.backend() {
            Some(backend) => backend.size().await,
            None => 0,
        }
    }

    /// Sweep expired entries from the backend, returning how many were
    /// removed. Only the memory backend has anything to sweep.
    pub async fn purge_expired(&self) -> usize {
        match self.backend() {
            Some(backend) => backend.purge_expired().await,
            None => 0,
        }
    }

    /// Whether the cache is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The backend variant actually in use (after any fallback).
    pub fn backend_kind(&self) -> CacheBackendKind {
        self.active
    }

    /// The TTL applied to every write.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The configured LRU capacity bound.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Snapshot of cache state and configuration for diagnostics.
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            enabled: self.enabled,
            backend: self.active,
            size: self.size().await,
            max_size: self.max_size,
            ttl_seconds: self.ttl.as_secs(),
        }
    }
}

/// Cache statistics exposed by the status/diagnostics endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Whether the cache is enabled.
    pub enabled: bool,
    /// The active backend variant.
    pub backend: CacheBackendKind,
    /// Current number of cached entries.
    pub size: usize,
    /// Configured LRU capacity bound.
    pub max_size: usize,
    /// Configured TTL in seconds.
    pub ttl_seconds: u64,
}

fn encode<T: Serialize>(key: &str, value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(payload) => Some(payload),
        Err(e) => {
            error!(key, error = %e, "Failed to serialize value, dropping cache write");
            None
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(key: &str, payload: &str) -> Option<T> {
    match serde_json::from_str(payload) {
        Ok(value) => Some(value),
        Err(e) => {
            error!(key, error = %e, "Failed to deserialize cached value, treating as miss");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubeproxy_core::config::cache::RedisCacheConfig;

    fn memory_config() -> CacheConfig {
        CacheConfig {
            ttl_seconds: 60,
            max_size: 10,
            ..CacheConfig::default()
        }
    }

    fn segment(text: &str) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            start: 0.0,
            duration: 1.0,
        }
    }

    #[tokio::test]
    async fn test_disabled_cache_is_inert() {
        let config = CacheConfig {
            enabled: false,
            ..memory_config()
        };
        let cache = TranscriptCache::new(&config).await;

        cache.set_transcript("abc12345678", &[segment("hi")], None).await;
        assert_eq!(cache.get_transcript("abc12345678", None).await, None);
        assert_eq!(cache.size().await, 0);
        assert!(!cache.is_enabled());
    }

    #[tokio::test]
    async fn test_redis_connect_failure_falls_back_to_memory() {
        let config = CacheConfig {
            backend: CacheBackendKind::Redis,
            redis: RedisCacheConfig {
                // Nothing listens on port 1, so connecting fails.
                url: "redis://127.0.0.1:1".to_string(),
                ..RedisCacheConfig::default()
            },
            ..memory_config()
        };
        let cache = TranscriptCache::new(&config).await;

        assert_eq!(cache.backend_kind(), CacheBackendKind::Memory);
        // The fallback backend must actually work.
        cache.set_metadata("abc12345678", &VideoMetadata::default()).await;
        assert!(cache.get_metadata("abc12345678").await.is_some());
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_a_miss() {
        let config = memory_config();
        let cache = TranscriptCache::new(&config).await;
        let backend = cache.backend().unwrap().clone();

        backend
            .set("metadata:abc12345678", "{not json", Duration::from_secs(60))
            .await;
        assert_eq!(cache.get_metadata("abc12345678").await, None);
    }

    #[tokio::test]
    async fn test_stats_reflect_configuration() {
        let cache = TranscriptCache::new(&memory_config()).await;
        cache.set_metadata("abc12345678", &VideoMetadata::default()).await;

        let stats = cache.stats().await;
        assert!(stats.enabled);
        assert_eq!(stats.backend, CacheBackendKind::Memory);
        assert_eq!(stats.size, 1);
        assert_eq!(stats.max_size, 10);
        assert_eq!(stats.ttl_seconds, 60);
    }
}
