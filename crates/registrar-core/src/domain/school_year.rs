//! School year record.

use crate::{Entity, SchoolYearId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An academic year, the parent scope of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolYear {
    pub id: SchoolYearId,
    /// Starting calendar year, e.g. `2023` for SY 2023-2024.
    pub year: i32,
    pub label: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SchoolYear {
    /// Creates an inactive school year labelled `SY {year}-{year + 1}`.
    #[must_use]
    pub fn new(year: i32) -> Self {
        let now = Utc::now();
        Self {
            id: SchoolYearId::new(),
            year,
            label: format!("SY {}-{}", year, year + 1),
            is_active: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Renames the school year and toggles whether it is the active one.
    pub fn update(&mut self, label: String, is_active: bool) {
        self.label = label;
        self.is_active = is_active;
        self.updated_at = Utc::now();
    }
}

impl Entity<SchoolYearId> for SchoolYear {
    fn id(&self) -> &SchoolYearId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_label() {
        let year = SchoolYear::new(2023);
        assert_eq!(year.label, "SY 2023-2024");
        assert!(!year.is_active);
    }
}
