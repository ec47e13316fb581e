//! Section DTOs.

use registrar_core::SchoolYearId;
use serde::{Deserialize, Serialize};

/// Request to create a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSectionRequest {
    pub school_year_id: SchoolYearId,
    pub name: String,
    pub grade_level: String,
    pub adviser: Option<String>,
}

/// Request to replace a section's details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSectionRequest {
    /// Moving a section to another year drops both years' section listings.
    pub school_year_id: SchoolYearId,
    pub name: String,
    pub grade_level: String,
    pub adviser: Option<String>,
}
