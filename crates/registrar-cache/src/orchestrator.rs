//! Cache-aside orchestration.

use crate::adapter::StoreAdapter;
use crate::codec;
use crate::invalidation::InvalidationPlan;
use crate::keys::CacheTarget;
use crate::metrics::CacheMetrics;
use crate::policy::TtlPolicy;
use crate::store::CacheStore;
use futures::future::join_all;
use registrar_core::RegistrarResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of a cache read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    /// A decodable entry was found.
    Hit(T),
    /// Absent, expired, undecodable, or the store was unreachable.
    Miss,
}

impl<T> CacheResult<T> {
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::Miss)
    }
}

/// Cache-aside orchestrator.
///
/// Stateless apart from its injected adapter and TTL table; safe to share
/// across tasks behind an `Arc`.
#[derive(Clone)]
pub struct CacheAside {
    adapter: StoreAdapter,
    policy: TtlPolicy,
}

impl CacheAside {
    /// Create an orchestrator.
    #[must_use]
    pub const fn new(adapter: StoreAdapter, policy: TtlPolicy) -> Self {
        Self { adapter, policy }
    }

    /// Create an orchestrator over a store with default timeout and TTLs.
    #[must_use]
    pub fn with_store(store: Arc<dyn CacheStore>) -> Self {
        Self::new(StoreAdapter::new(store), TtlPolicy::default())
    }

    #[must_use]
    pub const fn policy(&self) -> &TtlPolicy {
        &self.policy
    }

    /// Looks up a target.
    ///
    /// An entry that fails to decode as `T` is deleted and reported as a miss.
    pub async fn read_through<T: DeserializeOwned>(&self, target: &CacheTarget) -> CacheResult<T> {
        let namespace = target.namespace();
        let key = target.key();

        let Some(bytes) = self.adapter.get(&key).await else {
            debug!(key = %key, "Cache miss");
            CacheMetrics::miss(namespace);
            return CacheResult::Miss;
        };

        match codec::decode::<T>(&bytes) {
            Ok(value) => {
                debug!(key = %key, "Cache hit");
                CacheMetrics::hit(namespace);
                CacheResult::Hit(value)
            }
            Err(err) => {
                warn!(key = %key, error = %err, "Discarding undecodable cache entry");
                CacheMetrics::decode_failure(namespace);
                CacheMetrics::miss(namespace);
                self.adapter.delete(&key).await;
                CacheResult::Miss
            }
        }
    }

    /// Stores a value freshly loaded from the backing store.
    ///
    /// Encode failures are logged and the entry is skipped.
    pub async fn populate<T: Serialize + ?Sized>(&self, target: &CacheTarget, value: &T) {
        let key = target.key();
        let bytes = match codec::encode(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(key = %key, error = %err, "Skipping cache populate");
                return;
            }
        };

        let ttl = self.policy.ttl_for(target);
        self.adapter.set_with_ttl(&key, &bytes, ttl).await;
    }

    /// Deletes a target. Never repopulates.
    pub async fn invalidate(&self, target: &CacheTarget) {
        let key = target.key();
        self.adapter.delete(&key).await;
        CacheMetrics::invalidation(target.namespace());
        debug!(key = %key, "Cache entry invalidated");
    }

    /// Deletes every target of a plan concurrently.
    pub async fn invalidate_plan(&self, plan: &InvalidationPlan) {
        if plan.is_empty() {
            return;
        }

        join_all(plan.targets().iter().map(|target| self.invalidate(target))).await;

        let keys: Vec<String> = plan.keys().iter().map(ToString::to_string).collect();
        debug!(keys = ?keys, "Invalidation plan applied");
    }

    /// Reads through the cache, falling back to `loader` on a miss.
    ///
    /// A loaded value is populated before returning. Loader errors propagate
    /// unchanged and nothing is cached for them.
    pub async fn get_or_load<T, F, Fut>(&self, target: &CacheTarget, loader: F) -> RegistrarResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = RegistrarResult<T>>,
    {
        if let CacheResult::Hit(value) = self.read_through(target).await {
            return Ok(value);
        }

        let value = loader().await?;
        self.populate(target, &value).await;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CacheError, StoreResult};
    use crate::keys::Namespace;
    use crate::store::MemoryCacheStore;
    use async_trait::async_trait;
    use mockall::mock;
    use registrar_config::{TtlConfig, TtlOverride};
    use registrar_core::RegistrarError;
    use serde::Deserialize;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    mock! {
        pub Store {}

        #[async_trait]
        impl CacheStore for Store {
            async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;
            async fn set_with_ttl(&self, key: &str, value: &[u8], ttl: Duration) -> StoreResult<()>;
            async fn delete(&self, key: &str) -> StoreResult<bool>;
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Learner {
        id: u32,
        name: String,
    }

    fn learner(id: u32, name: &str) -> Learner {
        Learner {
            id,
            name: name.to_string(),
        }
    }

    fn setup() -> (Arc<MemoryCacheStore>, CacheAside) {
        let store = Arc::new(MemoryCacheStore::new());
        let cache = CacheAside::with_store(store.clone());
        (store, cache)
    }

    #[tokio::test]
    async fn test_populate_then_read_hits() {
        let (_, cache) = setup();
        let target = CacheTarget::item(Namespace::Student, 1);

        cache.populate(&target, &learner(1, "Ana")).await;

        assert_eq!(
            cache.read_through::<Learner>(&target).await,
            CacheResult::Hit(learner(1, "Ana"))
        );
    }

    #[tokio::test]
    async fn test_read_after_invalidate_misses() {
        let (_, cache) = setup();
        let target = CacheTarget::collection(Namespace::Student);

        cache.populate(&target, &vec![learner(1, "Ana")]).await;
        cache.invalidate(&target).await;

        assert!(cache.read_through::<Vec<Learner>>(&target).await.is_miss());
    }

    #[tokio::test]
    async fn test_invalidating_one_scope_keeps_another() {
        let (_, cache) = setup();
        let sy2023 = CacheTarget::scoped(Namespace::Section, "SY2023");
        let sy2024 = CacheTarget::scoped(Namespace::Section, "SY2024");

        cache.populate(&sy2023, &vec!["7-A"]).await;
        cache.populate(&sy2024, &vec!["8-A"]).await;
        cache.invalidate(&sy2023).await;

        assert!(cache.read_through::<Vec<String>>(&sy2023).await.is_miss());
        assert_eq!(
            cache.read_through::<Vec<String>>(&sy2024).await,
            CacheResult::Hit(vec!["8-A".to_string()])
        );
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_miss_and_purged() {
        let (store, cache) = setup();
        let target = CacheTarget::collection(Namespace::User);
        store
            .set_with_ttl("user:all", b"{\"not\": \"a list\"", Duration::from_secs(60))
            .await
            .unwrap();

        assert!(cache.read_through::<Vec<Learner>>(&target).await.is_miss());
        assert!(!store.contains("user:all").await);
    }

    #[tokio::test]
    async fn test_schema_mismatch_is_miss() {
        let (store, cache) = setup();
        let target = CacheTarget::item(Namespace::Student, 7);
        cache.populate(&target, &vec![1, 2, 3]).await;

        assert!(cache.read_through::<Learner>(&target).await.is_miss());
        assert!(!store.contains("student:7").await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let store = Arc::new(MemoryCacheStore::new());
        let mut ttl = TtlConfig::default();
        ttl.overrides.insert(
            "student".to_string(),
            TtlOverride {
                item_secs: Some(1),
                ..TtlOverride::default()
            },
        );
        let cache = CacheAside::new(StoreAdapter::new(store), TtlPolicy::from_config(&ttl));
        let target = CacheTarget::item(Namespace::Student, 1);

        cache.populate(&target, &learner(1, "Ana")).await;
        assert!(cache.read_through::<Learner>(&target).await.is_hit());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(cache.read_through::<Learner>(&target).await.is_miss());
    }

    #[tokio::test]
    async fn test_plan_deletes_every_target() {
        let (store, cache) = setup();
        for key in ["student:1", "student:all", "section:7-A:all", "school-year:2023:all"] {
            store
                .set_with_ttl(key, b"[]", Duration::from_secs(60))
                .await
                .unwrap();
        }

        let plan = InvalidationPlan::new()
            .item(Namespace::Student, 1)
            .collection(Namespace::Student)
            .scoped(Namespace::Section, "7-A");
        cache.invalidate_plan(&plan).await;

        assert!(!store.contains("student:1").await);
        assert!(!store.contains("student:all").await);
        assert!(!store.contains("section:7-A:all").await);
        assert!(store.contains("school-year:2023:all").await);
    }

    #[tokio::test]
    async fn test_get_or_load_populates_once() {
        let (_, cache) = setup();
        let target = CacheTarget::item(Namespace::User, 5);
        let loads = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_load(&target, || async {
                    loads.fetch_add(1, Ordering::SeqCst);
                    Ok(learner(5, "Ben"))
                })
                .await
                .unwrap();
            assert_eq!(value, learner(5, "Ben"));
        }

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_get_or_load_propagates_and_skips_caching_errors() {
        let (store, cache) = setup();
        let target = CacheTarget::item(Namespace::User, 404);

        let result = cache
            .get_or_load::<Learner, _, _>(&target, || async {
                Err(RegistrarError::not_found("User", 404))
            })
            .await;

        assert!(matches!(result, Err(RegistrarError::NotFound { .. })));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_failing_store_never_fails_callers() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .returning(|_| Err(CacheError::StoreUnavailable("down".to_string())));
        store
            .expect_set_with_ttl()
            .returning(|_, _, _| Err(CacheError::StoreUnavailable("down".to_string())));
        store
            .expect_delete()
            .returning(|_| Err(CacheError::StoreUnavailable("down".to_string())));
        let cache = CacheAside::with_store(Arc::new(store));
        let target = CacheTarget::collection(Namespace::SchoolYear);

        let loaded = cache
            .get_or_load(&target, || async { Ok(vec![learner(1, "Ana")]) })
            .await
            .unwrap();
        assert_eq!(loaded, vec![learner(1, "Ana")]);

        cache.invalidate_plan(&InvalidationPlan::new().collection(Namespace::SchoolYear)).await;
        assert!(cache.read_through::<Vec<Learner>>(&target).await.is_miss());
    }

    #[tokio::test]
    async fn test_populate_uses_granularity_ttl() {
        let mut store = MockStore::new();
        store
            .expect_set_with_ttl()
            .withf(|key, _, ttl| key == "section:7-A:all" && *ttl == Duration::from_secs(3600))
            .times(1)
            .returning(|_, _, _| Ok(()));
        store
            .expect_set_with_ttl()
            .withf(|key, _, ttl| key == "section:9" && *ttl == Duration::from_secs(300))
            .times(1)
            .returning(|_, _, _| Ok(()));
        let cache = CacheAside::with_store(Arc::new(store));

        cache
            .populate(&CacheTarget::scoped(Namespace::Section, "7-A"), &Vec::<u8>::new())
            .await;
        cache
            .populate(&CacheTarget::item(Namespace::Section, 9), &"7-A")
            .await;
    }
}
