//! In-process store.

use super::CacheStore;
use crate::error::StoreResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Entry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory store with lazy TTL expiry.
///
/// Expiry is measured on the tokio clock, so tests running with a paused
/// runtime can advance past a TTL deterministically. Expired entries are
/// dropped when next touched.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCacheStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Returns true if a live entry exists under `key`.
    pub async fn contains(&self, key: &str) -> bool {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now))
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
                Some(_) => {}
            }
        }

        // Expired: drop it unless a writer replaced it meanwhile.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set_with_ttl(&self, key: &str, value: &[u8], ttl: Duration) -> StoreResult<()> {
        let entry = Entry {
            value: value.to_vec(),
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        let now = Instant::now();
        let removed = self.entries.write().await.remove(key);
        Ok(removed.is_some_and(|entry| !entry.is_expired(now)))
    }
}
