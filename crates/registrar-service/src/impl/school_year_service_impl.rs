//! School year service implementation.

use crate::dto::{CreateSchoolYearRequest, UpdateSchoolYearRequest};
use crate::invalidation::school_year_plan;
use crate::school_year_service::SchoolYearService;
use async_trait::async_trait;
use registrar_cache::{CacheAside, CacheTarget, Namespace};
use registrar_core::{RegistrarError, RegistrarResult, SchoolYear, SchoolYearId, Section};
use registrar_repository::{SchoolYearRepository, SectionRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// School year service with cache-aside reads.
///
/// The sections of a year are cached under `school-year:{id}:all`; section
/// writes are responsible for dropping that entry.
pub struct SchoolYearServiceImpl {
    school_year_repository: Arc<dyn SchoolYearRepository>,
    section_repository: Arc<dyn SectionRepository>,
    cache: Arc<CacheAside>,
}

impl SchoolYearServiceImpl {
    /// Creates a new school year service.
    pub fn new(
        school_year_repository: Arc<dyn SchoolYearRepository>,
        section_repository: Arc<dyn SectionRepository>,
        cache: Arc<CacheAside>,
    ) -> Self {
        Self {
            school_year_repository,
            section_repository,
            cache,
        }
    }

    async fn find_school_year(&self, id: SchoolYearId) -> RegistrarResult<SchoolYear> {
        self.school_year_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RegistrarError::not_found("SchoolYear", id))
    }
}

#[async_trait]
impl SchoolYearService for SchoolYearServiceImpl {
    async fn list_school_years(&self) -> RegistrarResult<Vec<SchoolYear>> {
        debug!("Listing school years");

        self.cache
            .get_or_load(&CacheTarget::collection(Namespace::SchoolYear), || {
                self.school_year_repository.find_all()
            })
            .await
    }

    async fn get_school_year(&self, id: SchoolYearId) -> RegistrarResult<SchoolYear> {
        debug!("Getting school year: {}", id);

        self.cache
            .get_or_load(&CacheTarget::item(Namespace::SchoolYear, id), || {
                self.find_school_year(id)
            })
            .await
    }

    async fn list_sections(&self, id: SchoolYearId) -> RegistrarResult<Vec<Section>> {
        debug!("Listing sections of school year: {}", id);

        self.cache
            .get_or_load(&CacheTarget::scoped(Namespace::SchoolYear, id.to_string()), || async move {
                // An unknown year is NotFound rather than an empty listing.
                self.find_school_year(id).await?;
                self.section_repository.find_all_by_school_year(id).await
            })
            .await
    }

    async fn create_school_year(&self, request: CreateSchoolYearRequest) -> RegistrarResult<SchoolYear> {
        debug!("Creating school year: {}", request.year);

        let mut school_year = SchoolYear::new(request.year);
        if let Some(label) = request.label {
            school_year.label = label;
        }
        school_year.is_active = request.is_active;

        let saved = self.school_year_repository.save(&school_year).await?;
        self.cache.invalidate_plan(&school_year_plan(&saved)).await;

        info!("School year created: {} ({})", saved.label, saved.id);
        Ok(saved)
    }

    async fn update_school_year(&self, id: SchoolYearId, request: UpdateSchoolYearRequest) -> RegistrarResult<SchoolYear> {
        debug!("Updating school year: {}", id);

        let mut school_year = self.find_school_year(id).await?;
        school_year.update(request.label, request.is_active);

        let updated = self.school_year_repository.update(&school_year).await?;
        self.cache.invalidate_plan(&school_year_plan(&updated)).await;

        info!("School year updated: {}", id);
        Ok(updated)
    }
}
