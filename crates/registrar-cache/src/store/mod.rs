//! Key-value store backends.

mod memory;
mod redis;

pub use memory::MemoryCacheStore;
pub use redis::RedisCacheStore;

use crate::error::StoreResult;
use async_trait::async_trait;
use std::time::Duration;

/// Raw key-value store used by the cache layer.
///
/// Implementations report every failure; deciding to fail open is the
/// adapter's job.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Gets the bytes stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, expiring after `ttl`.
    async fn set_with_ttl(&self, key: &str, value: &[u8], ttl: Duration) -> StoreResult<()>;

    /// Deletes `key`.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> StoreResult<bool>;
}
