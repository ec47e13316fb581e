//! In-memory school year repository.

use super::table::Table;
use crate::traits::SchoolYearRepository;
use async_trait::async_trait;
use registrar_core::{RegistrarResult, SchoolYear, SchoolYearId};

fn year_clash(existing: &SchoolYear, candidate: &SchoolYear) -> Option<String> {
    (existing.year == candidate.year)
        .then(|| format!("School year {} already exists", candidate.year))
}

/// School year repository over an in-process table.
pub struct InMemorySchoolYearRepository {
    school_years: Table<SchoolYearId, SchoolYear>,
}

impl InMemorySchoolYearRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            school_years: Table::new("SchoolYear", year_clash),
        }
    }

    /// Creates a repository seeded with `school_years`.
    #[must_use]
    pub fn with_school_years(school_years: Vec<SchoolYear>) -> Self {
        Self {
            school_years: Table::with_rows("SchoolYear", year_clash, school_years),
        }
    }
}

impl Default for InMemorySchoolYearRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchoolYearRepository for InMemorySchoolYearRepository {
    async fn find_by_id(&self, id: SchoolYearId) -> RegistrarResult<Option<SchoolYear>> {
        Ok(self.school_years.get(id).await)
    }

    async fn find_all(&self) -> RegistrarResult<Vec<SchoolYear>> {
        Ok(self.school_years.all().await)
    }

    async fn save(&self, school_year: &SchoolYear) -> RegistrarResult<SchoolYear> {
        self.school_years.insert(school_year).await
    }

    async fn update(&self, school_year: &SchoolYear) -> RegistrarResult<SchoolYear> {
        self.school_years.replace(school_year).await
    }
}
