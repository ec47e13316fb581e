//! Fail-open wrapper around a [`CacheStore`].

use crate::error::{CacheError, StoreResult};
use crate::keys::CacheKey;
use crate::metrics::CacheMetrics;
use crate::store::CacheStore;
use registrar_config::{CacheConfig, RedisConfig};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default bound on a single store call.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_millis(250);

/// Store adapter that never fails.
///
/// Every call is bounded by the operation timeout. Errors and timeouts are
/// logged, counted, and turned into "absent" for reads and into no-ops for
/// writes.
#[derive(Clone)]
pub struct StoreAdapter {
    store: Arc<dyn CacheStore>,
    timeout: Duration,
    key_prefix: String,
}

impl StoreAdapter {
    /// Create an adapter with the default timeout and no key prefix.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self {
            store,
            timeout: DEFAULT_OPERATION_TIMEOUT,
            key_prefix: String::new(),
        }
    }

    /// Create an adapter from the cache and Redis configuration sections.
    #[must_use]
    pub fn from_config(store: Arc<dyn CacheStore>, cache: &CacheConfig, redis: &RedisConfig) -> Self {
        Self::new(store)
            .with_timeout(cache.operation_timeout())
            .with_key_prefix(&redis.key_prefix)
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Prefix every key with `{prefix}:`. An empty prefix disables prefixing.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn store_key(&self, key: &CacheKey) -> String {
        if self.key_prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}:{}", self.key_prefix, key)
        }
    }

    async fn bounded<T, Fut>(&self, fut: Fut) -> StoreResult<T>
    where
        Fut: Future<Output = StoreResult<T>>,
    {
        let timeout = self.timeout;
        tokio::time::timeout(timeout, fut)
            .await
            .map_err(|_| CacheError::StoreUnavailable(format!("timed out after {:?}", timeout)))?
    }

    fn report(operation: &'static str, key: &str, err: &CacheError) {
        CacheMetrics::store_error(operation, err.kind());
        warn!(operation, key, error = %err, "Cache store call failed, continuing without cache");
    }

    /// Returns the bytes under `key`, or `None` on a miss or any store failure.
    pub async fn get(&self, key: &CacheKey) -> Option<Vec<u8>> {
        let key = self.store_key(key);
        match self.bounded(self.store.get(&key)).await {
            Ok(value) => value,
            Err(err) => {
                Self::report("get", &key, &err);
                None
            }
        }
    }

    /// Stores `value` under `key`. Failures are logged and swallowed.
    pub async fn set_with_ttl(&self, key: &CacheKey, value: &[u8], ttl: Duration) {
        let key = self.store_key(key);
        match self.bounded(self.store.set_with_ttl(&key, value, ttl)).await {
            Ok(()) => debug!(key = %key, ttl_secs = ttl.as_secs(), "Cache entry stored"),
            Err(err) => Self::report("set", &key, &err),
        }
    }

    /// Deletes `key`. Returns true only if the store confirmed the delete.
    pub async fn delete(&self, key: &CacheKey) -> bool {
        let key = self.store_key(key);
        match self.bounded(self.store.delete(&key)).await {
            Ok(existed) => {
                debug!(key = %key, existed, "Cache entry deleted");
                existed
            }
            Err(err) => {
                Self::report("delete", &key, &err);
                false
            }
        }
    }
}
