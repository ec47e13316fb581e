//! Student service trait definition.

use crate::dto::{CreateStudentRequest, UpdateStudentRequest};
use async_trait::async_trait;
use registrar_core::{RegistrarResult, Student, StudentId};

/// Student service trait.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Lists all students.
    async fn list_students(&self) -> RegistrarResult<Vec<Student>>;

    /// Gets a student by ID.
    async fn get_student(&self, id: StudentId) -> RegistrarResult<Student>;

    /// Lists the students of a section, by section name.
    async fn list_students_in_section(&self, section: &str) -> RegistrarResult<Vec<Student>>;

    /// Enrolls an existing user as a student.
    async fn create_student(&self, request: CreateStudentRequest) -> RegistrarResult<Student>;

    /// Replaces a student's enrollment details.
    async fn update_student(&self, id: StudentId, request: UpdateStudentRequest) -> RegistrarResult<Student>;
}
