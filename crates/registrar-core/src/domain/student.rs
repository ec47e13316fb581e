//! Student record.

use crate::{Entity, StudentId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student enrolled in the school, linked one-to-one with a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub user_id: UserId,
    /// Learner reference number, unique per student.
    pub learner_reference_number: String,
    pub current_grade_level: Option<String>,
    /// Name of the section the student currently belongs to.
    pub current_section: Option<String>,
    pub current_adviser: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Creates a new student record for a user.
    #[must_use]
    pub fn new(user_id: UserId, learner_reference_number: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: StudentId::new(),
            user_id,
            learner_reference_number: learner_reference_number.into(),
            current_grade_level: None,
            current_section: None,
            current_adviser: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Places the student in a section.
    #[must_use]
    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        self.current_section = Some(section.into());
        self
    }

    /// Replaces the enrollment details.
    pub fn update_enrollment(
        &mut self,
        learner_reference_number: String,
        current_grade_level: Option<String>,
        current_section: Option<String>,
        current_adviser: Option<String>,
    ) {
        self.learner_reference_number = learner_reference_number;
        self.current_grade_level = current_grade_level;
        self.current_section = current_section;
        self.current_adviser = current_adviser;
        self.updated_at = Utc::now();
    }
}

impl Entity<StudentId> for Student {
    fn id(&self) -> &StudentId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_enrollment_moves_section() {
        let mut student = Student::new(UserId::new(), "123456789012").in_section("7-A");
        let before = student.updated_at;

        student.update_enrollment(
            "123456789012".to_string(),
            Some("8".to_string()),
            Some("8-B".to_string()),
            None,
        );

        assert_eq!(student.current_section.as_deref(), Some("8-B"));
        assert_eq!(student.current_grade_level.as_deref(), Some("8"));
        assert!(student.updated_at >= before);
    }
}
