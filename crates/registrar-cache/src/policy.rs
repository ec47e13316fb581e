//! TTL policy.

use crate::keys::{CacheTarget, Namespace};
use registrar_config::TtlConfig;
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

/// Shape of a cached entry, which decides its default lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Item,
    Collection,
    ScopedCollection,
}

impl From<&CacheTarget> for Granularity {
    fn from(target: &CacheTarget) -> Self {
        match target {
            CacheTarget::Item { .. } => Self::Item,
            CacheTarget::Collection { .. } => Self::Collection,
            CacheTarget::Scoped { .. } => Self::ScopedCollection,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TtlSet {
    item: Duration,
    collection: Duration,
    scoped_collection: Duration,
}

impl TtlSet {
    const fn get(&self, granularity: Granularity) -> Duration {
        match granularity {
            Granularity::Item => self.item,
            Granularity::Collection => self.collection,
            Granularity::ScopedCollection => self.scoped_collection,
        }
    }
}

/// Resolves the TTL of an entry from its namespace and granularity.
#[derive(Debug, Clone)]
pub struct TtlPolicy {
    defaults: TtlSet,
    overrides: HashMap<Namespace, TtlSet>,
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self::from_config(&TtlConfig::default())
    }
}

impl TtlPolicy {
    /// Builds the policy from configuration.
    ///
    /// Overrides for unknown namespaces are logged and ignored.
    #[must_use]
    pub fn from_config(config: &TtlConfig) -> Self {
        let defaults = TtlSet {
            item: Duration::from_secs(config.item_secs),
            collection: Duration::from_secs(config.collection_secs),
            scoped_collection: Duration::from_secs(config.scoped_collection_secs),
        };

        let mut overrides = HashMap::new();
        for (name, entry) in &config.overrides {
            let Ok(namespace) = name.parse::<Namespace>() else {
                warn!(namespace = %name, "Ignoring TTL override for unknown namespace");
                continue;
            };
            let secs = |value: Option<u64>, fallback: Duration| {
                value.map_or(fallback, Duration::from_secs)
            };
            overrides.insert(
                namespace,
                TtlSet {
                    item: secs(entry.item_secs, defaults.item),
                    collection: secs(entry.collection_secs, defaults.collection),
                    scoped_collection: secs(entry.scoped_collection_secs, defaults.scoped_collection),
                },
            );
        }

        Self { defaults, overrides }
    }

    /// Returns the TTL for a namespace and granularity.
    #[must_use]
    pub fn ttl(&self, namespace: Namespace, granularity: Granularity) -> Duration {
        self.overrides
            .get(&namespace)
            .unwrap_or(&self.defaults)
            .get(granularity)
    }

    /// Returns the TTL for a target.
    #[must_use]
    pub fn ttl_for(&self, target: &CacheTarget) -> Duration {
        self.ttl(target.namespace(), Granularity::from(target))
    }
}
