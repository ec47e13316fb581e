//! In-memory section repository.

use super::table::Table;
use crate::traits::SectionRepository;
use async_trait::async_trait;
use registrar_core::{RegistrarResult, SchoolYearId, Section, SectionId};
use tracing::debug;

fn name_clash(existing: &Section, candidate: &Section) -> Option<String> {
    (existing.school_year_id == candidate.school_year_id && existing.name == candidate.name)
        .then(|| format!("Section '{}' already exists in this school year", candidate.name))
}

/// Section repository over an in-process table.
pub struct InMemorySectionRepository {
    sections: Table<SectionId, Section>,
}

impl InMemorySectionRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: Table::new("Section", name_clash),
        }
    }

    /// Creates a repository seeded with `sections`.
    #[must_use]
    pub fn with_sections(sections: Vec<Section>) -> Self {
        Self {
            sections: Table::with_rows("Section", name_clash, sections),
        }
    }
}

impl Default for InMemorySectionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SectionRepository for InMemorySectionRepository {
    async fn find_by_id(&self, id: SectionId) -> RegistrarResult<Option<Section>> {
        Ok(self.sections.get(id).await)
    }

    async fn find_all(&self) -> RegistrarResult<Vec<Section>> {
        Ok(self.sections.all().await)
    }

    async fn find_all_by_school_year(&self, school_year_id: SchoolYearId) -> RegistrarResult<Vec<Section>> {
        debug!("Repository: find sections of school year {}", school_year_id);
        Ok(self
            .sections
            .filter(|s| s.school_year_id == school_year_id)
            .await)
    }

    async fn save(&self, section: &Section) -> RegistrarResult<Section> {
        self.sections.insert(section).await
    }

    async fn update(&self, section: &Section) -> RegistrarResult<Section> {
        self.sections.replace(section).await
    }
}
