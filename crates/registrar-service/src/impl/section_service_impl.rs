//! Section service implementation.

use crate::dto::{CreateSectionRequest, UpdateSectionRequest};
use crate::invalidation::section_plan;
use crate::section_service::SectionService;
use async_trait::async_trait;
use registrar_cache::{CacheAside, CacheTarget, Namespace};
use registrar_core::{RegistrarError, RegistrarResult, SchoolYearId, Section, SectionId};
use registrar_repository::{SchoolYearRepository, SectionRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Section service with cache-aside reads.
pub struct SectionServiceImpl {
    section_repository: Arc<dyn SectionRepository>,
    school_year_repository: Arc<dyn SchoolYearRepository>,
    cache: Arc<CacheAside>,
}

impl SectionServiceImpl {
    /// Creates a new section service.
    pub fn new(
        section_repository: Arc<dyn SectionRepository>,
        school_year_repository: Arc<dyn SchoolYearRepository>,
        cache: Arc<CacheAside>,
    ) -> Self {
        Self {
            section_repository,
            school_year_repository,
            cache,
        }
    }

    async fn ensure_school_year(&self, id: SchoolYearId) -> RegistrarResult<()> {
        self.school_year_repository
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| RegistrarError::not_found("SchoolYear", id))
    }

    async fn find_section(&self, id: SectionId) -> RegistrarResult<Section> {
        self.section_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RegistrarError::not_found("Section", id))
    }
}

#[async_trait]
impl SectionService for SectionServiceImpl {
    async fn list_sections(&self) -> RegistrarResult<Vec<Section>> {
        debug!("Listing sections");

        self.cache
            .get_or_load(&CacheTarget::collection(Namespace::Section), || {
                self.section_repository.find_all()
            })
            .await
    }

    async fn get_section(&self, id: SectionId) -> RegistrarResult<Section> {
        debug!("Getting section: {}", id);

        self.cache
            .get_or_load(&CacheTarget::item(Namespace::Section, id), || self.find_section(id))
            .await
    }

    async fn create_section(&self, request: CreateSectionRequest) -> RegistrarResult<Section> {
        debug!("Creating section: {}", request.name);

        self.ensure_school_year(request.school_year_id).await?;

        let mut section = Section::new(request.school_year_id, request.name, request.grade_level);
        section.adviser = request.adviser;

        let saved = self.section_repository.save(&section).await?;
        self.cache.invalidate_plan(&section_plan(None, &saved)).await;

        info!("Section created: {} ({})", saved.name, saved.id);
        Ok(saved)
    }

    async fn update_section(&self, id: SectionId, request: UpdateSectionRequest) -> RegistrarResult<Section> {
        debug!("Updating section: {}", id);

        let before = self.find_section(id).await?;
        if request.school_year_id != before.school_year_id {
            self.ensure_school_year(request.school_year_id).await?;
        }

        let mut section = before.clone();
        section.update(
            request.school_year_id,
            request.name,
            request.grade_level,
            request.adviser,
        );

        let updated = self.section_repository.update(&section).await?;
        self.cache
            .invalidate_plan(&section_plan(Some(&before), &updated))
            .await;

        info!("Section updated: {}", id);
        Ok(updated)
    }
}
