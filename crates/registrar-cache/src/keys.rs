//! Cache key construction.
//!
//! Keys follow three shapes:
//!
//! - `{namespace}:all` for a whole collection
//! - `{namespace}:{scope}:all` for a collection filtered by a parent scope
//! - `{namespace}:{id}` for a single record
//!
//! Scoped listings live under the namespace of the scope's owner, so the
//! roster of section `7-A` is `section:7-A:all` and the sections of a school
//! year are `school-year:{year_id}:all`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ALL: &str = "all";

/// Record families with their own key namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Namespace {
    Student,
    User,
    SchoolYear,
    Section,
}

impl Namespace {
    /// Every namespace, in key-listing order.
    pub const ALL: [Self; 4] = [Self::Student, Self::User, Self::SchoolYear, Self::Section];

    /// Returns the namespace as it appears in keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::User => "user",
            Self::SchoolYear => "school-year",
            Self::Section => "section",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ns| ns.as_str() == s)
            .ok_or_else(|| format!("Unknown cache namespace: {}", s))
    }
}

/// A fully built cache key, without any deployment prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds a cache key.
///
/// An `id` always produces an item key and wins over `scope`. Without an id
/// the key names a collection, scoped when `scope` is given. A given but empty
/// part keeps its separator, so `Some("")` never folds into another shape.
#[must_use]
pub fn build_key(namespace: &str, scope: Option<&str>, id: Option<&str>) -> CacheKey {
    let key = match (scope, id) {
        (_, Some(id)) => format!("{}:{}", namespace, id),
        (Some(scope), None) => format!("{}:{}:{}", namespace, scope, ALL),
        (None, None) => format!("{}:{}", namespace, ALL),
    };
    CacheKey(key)
}

/// What a cached entry holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheTarget {
    /// One record.
    Item { namespace: Namespace, id: String },
    /// Every record of a namespace.
    Collection { namespace: Namespace },
    /// Records belonging to one scope value of a namespace.
    Scoped { namespace: Namespace, scope: String },
}

impl CacheTarget {
    #[must_use]
    pub fn item(namespace: Namespace, id: impl ToString) -> Self {
        Self::Item {
            namespace,
            id: id.to_string(),
        }
    }

    #[must_use]
    pub const fn collection(namespace: Namespace) -> Self {
        Self::Collection { namespace }
    }

    #[must_use]
    pub fn scoped(namespace: Namespace, scope: impl Into<String>) -> Self {
        Self::Scoped {
            namespace,
            scope: scope.into(),
        }
    }

    #[must_use]
    pub const fn namespace(&self) -> Namespace {
        match self {
            Self::Item { namespace, .. }
            | Self::Collection { namespace }
            | Self::Scoped { namespace, .. } => *namespace,
        }
    }

    /// Returns the key this target is stored under.
    #[must_use]
    pub fn key(&self) -> CacheKey {
        match self {
            Self::Item { namespace, id } => build_key(namespace.as_str(), None, Some(id)),
            Self::Collection { namespace } => build_key(namespace.as_str(), None, None),
            Self::Scoped { namespace, scope } => build_key(namespace.as_str(), Some(scope), None),
        }
    }
}
