//! Generic keyed table shared by the in-memory repositories.

use registrar_core::{Entity, RegistrarError, RegistrarResult};
use std::collections::BTreeMap;
use std::fmt::Display;
use tokio::sync::RwLock;

/// Returns a conflict message when `candidate` violates a uniqueness rule
/// against `existing`.
pub(crate) type Clash<T> = fn(existing: &T, candidate: &T) -> Option<String>;

pub(crate) struct Table<ID, T> {
    resource: &'static str,
    clash: Clash<T>,
    rows: RwLock<BTreeMap<ID, T>>,
}

impl<ID, T> Table<ID, T>
where
    ID: Ord + Copy + Display + Send + Sync,
    T: Entity<ID> + Clone + Send + Sync,
{
    pub(crate) fn new(resource: &'static str, clash: Clash<T>) -> Self {
        Self {
            resource,
            clash,
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    pub(crate) fn with_rows(resource: &'static str, clash: Clash<T>, rows: Vec<T>) -> Self {
        let rows = rows.into_iter().map(|row| (*row.id(), row)).collect();
        Self {
            resource,
            clash,
            rows: RwLock::new(rows),
        }
    }

    pub(crate) async fn get(&self, id: ID) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    pub(crate) async fn all(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }

    pub(crate) async fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .await
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    fn check_unique(&self, rows: &BTreeMap<ID, T>, candidate: &T) -> RegistrarResult<()> {
        rows.values()
            .filter(|existing| existing.id() != candidate.id())
            .find_map(|existing| (self.clash)(existing, candidate))
            .map_or(Ok(()), |message| Err(RegistrarError::Conflict(message)))
    }

    pub(crate) async fn insert(&self, row: &T) -> RegistrarResult<T> {
        let mut rows = self.rows.write().await;
        let id = *row.id();
        if rows.contains_key(&id) {
            return Err(RegistrarError::Conflict(format!(
                "{} '{}' already exists",
                self.resource, id
            )));
        }
        self.check_unique(&rows, row)?;

        rows.insert(id, row.clone());
        Ok(row.clone())
    }

    pub(crate) async fn replace(&self, row: &T) -> RegistrarResult<T> {
        let mut rows = self.rows.write().await;
        let id = *row.id();
        if !rows.contains_key(&id) {
            return Err(RegistrarError::not_found(self.resource, id));
        }
        self.check_unique(&rows, row)?;

        rows.insert(id, row.clone());
        Ok(row.clone())
    }
}
