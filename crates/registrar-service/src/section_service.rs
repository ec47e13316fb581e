//! Section service trait definition.

use crate::dto::{CreateSectionRequest, UpdateSectionRequest};
use async_trait::async_trait;
use registrar_core::{RegistrarResult, Section, SectionId};

/// Section service trait.
#[async_trait]
pub trait SectionService: Send + Sync {
    /// Lists every section across school years.
    async fn list_sections(&self) -> RegistrarResult<Vec<Section>>;

    /// Gets a section by ID.
    async fn get_section(&self, id: SectionId) -> RegistrarResult<Section>;

    /// Creates a section in an existing school year.
    async fn create_section(&self, request: CreateSectionRequest) -> RegistrarResult<Section>;

    /// Replaces a section's details.
    async fn update_section(&self, id: SectionId, request: UpdateSectionRequest) -> RegistrarResult<Section>;
}
