//! Redis-backed store.

use super::CacheStore;
use crate::error::{CacheError, StoreResult};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config, Pool, Runtime};
use registrar_config::RedisConfig;
use registrar_core::{HealthCheck, HealthStatus, RegistrarError, RegistrarResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Redis store over a `deadpool-redis` pool.
///
/// A store built with [`RedisCacheStore::disabled`] holds no pool: every read
/// misses and every write is a no-op.
#[derive(Clone)]
pub struct RedisCacheStore {
    pool: Option<Arc<Pool>>,
}

impl RedisCacheStore {
    /// Create a store over an existing pool.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op store (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Builds the store from configuration.
    ///
    /// The pool connects lazily, so an unreachable server does not prevent
    /// startup; reads simply miss until it comes back.
    pub fn from_config(config: &RedisConfig) -> RegistrarResult<Self> {
        if !config.enabled {
            info!("Redis disabled, cache reads will always miss");
            return Ok(Self::disabled());
        }

        let pool = Config::from_url(&config.url)
            .builder()
            .map_err(|e| RegistrarError::Configuration(format!("Invalid Redis config: {}", e)))?
            .max_size(config.pool_size as usize)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| RegistrarError::Cache(format!("Failed to create Redis pool: {}", e)))?;

        info!(pool_size = config.pool_size, "Redis connection pool created");
        Ok(Self::new(Arc::new(pool)))
    }

    /// Returns true if the store talks to Redis.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_conn(&self, pool: &Pool) -> StoreResult<deadpool_redis::Connection> {
        pool.get()
            .await
            .map_err(|e| CacheError::StoreUnavailable(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let Some(pool) = &self.pool else {
            return Ok(None);
        };

        let mut conn = self.get_conn(pool).await?;
        let value: Option<Vec<u8>> = conn.get(key).await.map_err(|e| {
            CacheError::StoreUnavailable(format!("Failed to get key '{}': {}", key, e))
        })?;

        Ok(value)
    }

    async fn set_with_ttl(&self, key: &str, value: &[u8], ttl: Duration) -> StoreResult<()> {
        let Some(pool) = &self.pool else {
            return Ok(());
        };

        let mut conn = self.get_conn(pool).await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
            CacheError::StoreUnavailable(format!("Failed to set key '{}': {}", key, e))
        })?;

        debug!("Stored key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        let Some(pool) = &self.pool else {
            return Ok(false);
        };

        let mut conn = self.get_conn(pool).await?;
        let deleted: i64 = conn.del(key).await.map_err(|e| {
            CacheError::StoreUnavailable(format!("Failed to delete key '{}': {}", key, e))
        })?;

        Ok(deleted > 0)
    }
}

#[async_trait]
impl HealthCheck for RedisCacheStore {
    fn name(&self) -> &str {
        "redis"
    }

    async fn check(&self) -> HealthStatus {
        let Some(pool) = &self.pool else {
            return HealthStatus::Degraded("Redis disabled".to_string());
        };

        let mut conn = match self.get_conn(pool).await {
            Ok(conn) => conn,
            Err(e) => return HealthStatus::Unhealthy(e.to_string()),
        };

        match deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
        {
            Ok(_) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(format!("PING failed: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_store_is_a_no_op() {
        let store = RedisCacheStore::disabled();
        assert!(!store.is_enabled());

        store
            .set_with_ttl("student:all", b"[]", Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(store.get("student:all").await.unwrap(), None);
        assert!(!store.delete("student:all").await.unwrap());
    }

    #[tokio::test]
    async fn test_disabled_store_reports_degraded() {
        let store = RedisCacheStore::disabled();
        assert!(matches!(store.check().await, HealthStatus::Degraded(_)));
    }

    #[test]
    fn test_from_config_respects_enabled_flag() {
        let config = RedisConfig {
            enabled: false,
            ..RedisConfig::default()
        };
        assert!(!RedisCacheStore::from_config(&config).unwrap().is_enabled());
    }
}
