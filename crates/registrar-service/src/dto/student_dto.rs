//! Student-related DTOs.

use registrar_core::UserId;
use serde::{Deserialize, Serialize};

/// Request to enroll a user as a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub user_id: UserId,
    pub learner_reference_number: String,
    pub current_grade_level: Option<String>,
    pub current_section: Option<String>,
    pub current_adviser: Option<String>,
    /// Section rosters to drop from the cache besides the student's own.
    #[serde(default)]
    pub also_invalidate_sections: Vec<String>,
}

/// Request to replace a student's enrollment details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    pub learner_reference_number: String,
    pub current_grade_level: Option<String>,
    pub current_section: Option<String>,
    pub current_adviser: Option<String>,
    /// Section rosters to drop from the cache besides the old and new one.
    #[serde(default)]
    pub also_invalidate_sections: Vec<String>,
}
