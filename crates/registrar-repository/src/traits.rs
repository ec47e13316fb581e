//! Repository trait definitions.

use async_trait::async_trait;
use registrar_core::{
    RegistrarResult, SchoolYear, SchoolYearId, Section, SectionId, Student, StudentId, User, UserId,
};

/// Student repository trait.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Finds a student by ID.
    async fn find_by_id(&self, id: StudentId) -> RegistrarResult<Option<Student>>;

    /// Finds all students.
    async fn find_all(&self) -> RegistrarResult<Vec<Student>>;

    /// Finds the students currently in a section, by section name.
    async fn find_all_by_section(&self, section: &str) -> RegistrarResult<Vec<Student>>;

    /// Saves a new student.
    async fn save(&self, student: &Student) -> RegistrarResult<Student>;

    /// Updates an existing student.
    async fn update(&self, student: &Student) -> RegistrarResult<Student>;
}

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RegistrarResult<Option<User>>;

    /// Finds all users.
    async fn find_all(&self) -> RegistrarResult<Vec<User>>;

    /// Saves a new user.
    async fn save(&self, user: &User) -> RegistrarResult<User>;

    /// Updates an existing user.
    async fn update(&self, user: &User) -> RegistrarResult<User>;
}

/// School year repository trait.
#[async_trait]
pub trait SchoolYearRepository: Send + Sync {
    /// Finds a school year by ID.
    async fn find_by_id(&self, id: SchoolYearId) -> RegistrarResult<Option<SchoolYear>>;

    /// Finds all school years.
    async fn find_all(&self) -> RegistrarResult<Vec<SchoolYear>>;

    /// Saves a new school year.
    async fn save(&self, school_year: &SchoolYear) -> RegistrarResult<SchoolYear>;

    /// Updates an existing school year.
    async fn update(&self, school_year: &SchoolYear) -> RegistrarResult<SchoolYear>;
}

/// Section repository trait.
#[async_trait]
pub trait SectionRepository: Send + Sync {
    /// Finds a section by ID.
    async fn find_by_id(&self, id: SectionId) -> RegistrarResult<Option<Section>>;

    /// Finds all sections.
    async fn find_all(&self) -> RegistrarResult<Vec<Section>>;

    /// Finds the sections of a school year.
    async fn find_all_by_school_year(&self, school_year_id: SchoolYearId) -> RegistrarResult<Vec<Section>>;

    /// Saves a new section.
    async fn save(&self, section: &Section) -> RegistrarResult<Section>;

    /// Updates an existing section.
    async fn update(&self, section: &Section) -> RegistrarResult<Section>;
}
