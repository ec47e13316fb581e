//! Section record.

use crate::{Entity, SchoolYearId, SectionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A class section within one school year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub school_year_id: SchoolYearId,
    /// Section name, e.g. `7-A`. Students reference their section by name.
    pub name: String,
    pub grade_level: String,
    pub adviser: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Section {
    /// Creates a new section in a school year.
    #[must_use]
    pub fn new(
        school_year_id: SchoolYearId,
        name: impl Into<String>,
        grade_level: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: SectionId::new(),
            school_year_id,
            name: name.into(),
            grade_level: grade_level.into(),
            adviser: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the section details, possibly moving it to another school year.
    pub fn update(
        &mut self,
        school_year_id: SchoolYearId,
        name: String,
        grade_level: String,
        adviser: Option<String>,
    ) {
        self.school_year_id = school_year_id;
        self.name = name;
        self.grade_level = grade_level;
        self.adviser = adviser;
        self.updated_at = Utc::now();
    }
}

impl Entity<SectionId> for Section {
    fn id(&self) -> &SectionId {
        &self.id
    }
}
