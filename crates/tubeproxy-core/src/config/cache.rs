//! Cache provider configuration.

use std::fmt;
use std::num::NonZeroUsize;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Top-level cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Global on/off switch for the cache facade.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Cache backend to construct: `"memory"` or `"redis"`.
    #[serde(default)]
    pub backend: CacheBackendKind,
    /// TTL applied to every cached entry, in seconds.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
    /// Maximum number of entries in the in-memory LRU backend.
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    /// Redis-specific cache configuration.
    #[serde(default)]
    pub redis: RedisCacheConfig,
}

impl CacheConfig {
    /// Load the cache configuration from environment variables.
    ///
    /// Reads variables prefixed with `TUBEPROXY_CACHE` (e.g.
    /// `TUBEPROXY_CACHE_ENABLED`, `TUBEPROXY_CACHE_TTL_SECONDS`,
    /// `TUBEPROXY_CACHE_REDIS__URL`). Unset fields fall back to their
    /// defaults.
    pub fn from_env() -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("TUBEPROXY_CACHE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build cache config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize cache config: {e}")))
    }

    /// The configured TTL as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    /// The LRU capacity bound, floored at 1 so the cache is always usable.
    pub fn max_size_non_zero(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.max_size).unwrap_or(NonZeroUsize::MIN)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            backend: CacheBackendKind::default(),
            ttl_seconds: default_ttl(),
            max_size: default_max_size(),
            redis: RedisCacheConfig::default(),
        }
    }
}

/// Which cache backend variant to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackendKind {
    /// In-process bounded LRU store.
    #[default]
    Memory,
    /// Redis-backed store with server-side expiry.
    Redis,
}

impl CacheBackendKind {
    /// Lowercase name matching the configuration value (`"memory"`/`"redis"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Redis => "redis",
        }
    }
}

impl fmt::Display for CacheBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Redis cache backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisCacheConfig {
    /// Redis connection URL.
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Key prefix for all TubeProxy cache keys.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for RedisCacheConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            key_prefix: default_key_prefix(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_ttl() -> u64 {
    3600
}

fn default_max_size() -> usize {
    1000
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_key_prefix() -> String {
    "ytcache:".to_string()
}
