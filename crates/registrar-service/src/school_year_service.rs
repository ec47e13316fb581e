//! School year service trait definition.

use crate::dto::{CreateSchoolYearRequest, UpdateSchoolYearRequest};
use async_trait::async_trait;
use registrar_core::{RegistrarResult, SchoolYear, SchoolYearId, Section};

/// School year service trait.
#[async_trait]
pub trait SchoolYearService: Send + Sync {
    /// Lists all school years.
    async fn list_school_years(&self) -> RegistrarResult<Vec<SchoolYear>>;

    /// Gets a school year by ID.
    async fn get_school_year(&self, id: SchoolYearId) -> RegistrarResult<SchoolYear>;

    /// Lists the sections of a school year.
    async fn list_sections(&self, id: SchoolYearId) -> RegistrarResult<Vec<Section>>;

    /// Opens a new school year.
    async fn create_school_year(&self, request: CreateSchoolYearRequest) -> RegistrarResult<SchoolYear>;

    /// Renames or (de)activates a school year.
    async fn update_school_year(&self, id: SchoolYearId, request: UpdateSchoolYearRequest) -> RegistrarResult<SchoolYear>;
}
