//! Redis cache backend implementation.
//!
//! Every runtime operation is best-effort: a Redis failure is logged at
//! error level and degrades to a miss or no-op. Expiry is handled
//! server-side via `SETEX`, so there is no local bookkeeping.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, error};

use tubeproxy_core::traits::cache::CacheBackend;

use super::client::RedisClient;

/// Redis-backed cache backend.
#[derive(Debug, Clone)]
pub struct RedisCacheBackend {
    /// Redis client.
    client: RedisClient,
}

impl RedisCacheBackend {
    /// Create a new Redis cache backend.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// All keys under this cache's namespace prefix.
    ///
    /// Only keys carrying the prefix are ever touched, so other users of
    /// the same Redis instance are left alone.
    async fn namespaced_keys(&self) -> Option<Vec<String>> {
        let pattern = format!("{}*", self.client.prefix());
        let mut conn = self.client.conn_mut();
        let result: Result<Vec<String>, redis::RedisError> =
            redis::cmd("KEYS").arg(&pattern).query_async(&mut conn).await;
        match result {
            Ok(keys) => Some(keys),
            Err(e) => {
                error!(pattern = %pattern, error = %e, "Redis KEYS scan failed");
                None
            }
        }
    }
}

#[async_trait]
impl CacheBackend for RedisCacheBackend {
    async fn get(&self, key: &str) -> Option<String> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Result<Option<String>, redis::RedisError> = conn.get(&full_key).await;
        match result {
            Ok(value) => value,
            Err(e) => {
                error!(key = %full_key, error = %e, "Redis GET failed");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Result<(), redis::RedisError> =
            conn.set_ex(&full_key, value, ttl.as_secs()).await;
        if let Err(e) = result {
            error!(key = %full_key, error = %e, "Redis SETEX failed, dropping write");
        }
    }

    async fn delete(&self, key: &str) {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Result<(), redis::RedisError> = conn.del(&full_key).await;
        if let Err(e) = result {
            error!(key = %full_key, error = %e, "Redis DEL failed");
        }
    }

    async fn clear(&self) {
        let Some(keys) = self.namespaced_keys().await else {
            return;
        };
        if keys.is_empty() {
            return;
        }

        let count = keys.len();
        let mut conn = self.client.conn_mut();
        let result: Result<(), redis::RedisError> = conn.del(keys).await;
        if let Err(e) = result {
            error!(error = %e, "Redis DEL failed while clearing cache");
            return;
        }
        debug!(count, "Cleared namespaced Redis keys");
    }

    async fn size(&self) -> usize {
        self.namespaced_keys().await.map_or(0, |keys| keys.len())
    }

    async fn purge_expired(&self) -> usize {
        // Redis expires keys server-side; nothing to sweep.
        0
    }
}
