//! School year DTOs.

use serde::{Deserialize, Serialize};

/// Request to open a new school year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSchoolYearRequest {
    /// Starting calendar year.
    pub year: i32,
    /// Defaults to `SY {year}-{year + 1}`.
    pub label: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Request to rename or (de)activate a school year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSchoolYearRequest {
    pub label: String,
    pub is_active: bool,
}
