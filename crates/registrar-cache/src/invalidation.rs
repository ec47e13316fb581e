//! Sets of cache entries a write makes stale.

use crate::keys::{CacheKey, CacheTarget, Namespace};

/// Deduplicated list of targets to delete after a write commits.
///
/// Insertion order is kept for logging; deletion order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidationPlan {
    targets: Vec<CacheTarget>,
}

impl InvalidationPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a target unless it is already planned.
    #[must_use]
    pub fn with(mut self, target: CacheTarget) -> Self {
        self.push(target);
        self
    }

    #[must_use]
    pub fn item(self, namespace: Namespace, id: impl ToString) -> Self {
        self.with(CacheTarget::item(namespace, id))
    }

    #[must_use]
    pub fn collection(self, namespace: Namespace) -> Self {
        self.with(CacheTarget::collection(namespace))
    }

    #[must_use]
    pub fn scoped(self, namespace: Namespace, scope: impl Into<String>) -> Self {
        self.with(CacheTarget::scoped(namespace, scope))
    }

    /// Adds every scope in `scopes`; `None` entries are skipped.
    #[must_use]
    pub fn scopes<I, S>(mut self, namespace: Namespace, scopes: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        for scope in scopes.into_iter().flatten() {
            self.push(CacheTarget::scoped(namespace, scope));
        }
        self
    }

    pub fn push(&mut self, target: CacheTarget) {
        if !self.targets.contains(&target) {
            self.targets.push(target);
        }
    }

    #[must_use]
    pub fn targets(&self) -> &[CacheTarget] {
        &self.targets
    }

    #[must_use]
    pub fn keys(&self) -> Vec<CacheKey> {
        self.targets.iter().map(CacheTarget::key).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
