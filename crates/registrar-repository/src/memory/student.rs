//! In-memory student repository.

use super::table::Table;
use crate::traits::StudentRepository;
use async_trait::async_trait;
use registrar_core::{RegistrarResult, Student, StudentId};
use tracing::debug;

fn lrn_clash(existing: &Student, candidate: &Student) -> Option<String> {
    (existing.learner_reference_number == candidate.learner_reference_number).then(|| {
        format!(
            "Learner reference number '{}' already exists",
            candidate.learner_reference_number
        )
    })
}

/// Student repository over an in-process table.
pub struct InMemoryStudentRepository {
    students: Table<StudentId, Student>,
}

impl InMemoryStudentRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            students: Table::new("Student", lrn_clash),
        }
    }

    /// Creates a repository seeded with `students`.
    #[must_use]
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Table::with_rows("Student", lrn_clash, students),
        }
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_id(&self, id: StudentId) -> RegistrarResult<Option<Student>> {
        debug!("Repository: find student {}", id);
        Ok(self.students.get(id).await)
    }

    async fn find_all(&self) -> RegistrarResult<Vec<Student>> {
        Ok(self.students.all().await)
    }

    async fn find_all_by_section(&self, section: &str) -> RegistrarResult<Vec<Student>> {
        debug!("Repository: find students in section {}", section);
        Ok(self
            .students
            .filter(|s| s.current_section.as_deref() == Some(section))
            .await)
    }

    async fn save(&self, student: &Student) -> RegistrarResult<Student> {
        self.students.insert(student).await
    }

    async fn update(&self, student: &Student) -> RegistrarResult<Student> {
        self.students.replace(student).await
    }
}
