//! Shared wiring for the service integration tests.

use chrono::NaiveDate;
use registrar_cache::{CacheAside, CacheStore, MemoryCacheStore};
use registrar_core::{SchoolYear, Section, Sex, Student, User};
use registrar_repository::{
    InMemorySchoolYearRepository, InMemorySectionRepository, InMemoryStudentRepository,
    InMemoryUserRepository,
};
use registrar_service::{SchoolYearServiceImpl, SectionServiceImpl, StudentServiceImpl, UserServiceImpl};
use std::sync::Arc;

/// Seed data for a [`Registrar`].
#[derive(Default)]
pub struct Seed {
    pub users: Vec<User>,
    pub students: Vec<Student>,
    pub school_years: Vec<SchoolYear>,
    pub sections: Vec<Section>,
}

/// All four services sharing one cache.
pub struct Registrar {
    pub store: Arc<MemoryCacheStore>,
    pub cache: Arc<CacheAside>,
    pub students: Arc<InMemoryStudentRepository>,
    pub student_service: StudentServiceImpl,
    pub user_service: UserServiceImpl,
    pub school_year_service: SchoolYearServiceImpl,
    pub section_service: SectionServiceImpl,
}

impl Registrar {
    pub fn new(seed: Seed) -> Self {
        let store = Arc::new(MemoryCacheStore::new());
        Self::with_store(seed, store.clone(), store)
    }

    /// Wires the services over `cache_store`; `store` is kept for inspection.
    pub fn with_store(seed: Seed, store: Arc<MemoryCacheStore>, cache_store: Arc<dyn CacheStore>) -> Self {
        let cache = Arc::new(CacheAside::with_store(cache_store));
        let students = Arc::new(InMemoryStudentRepository::with_students(seed.students));
        let users = Arc::new(InMemoryUserRepository::with_users(seed.users));
        let school_years = Arc::new(InMemorySchoolYearRepository::with_school_years(seed.school_years));
        let sections = Arc::new(InMemorySectionRepository::with_sections(seed.sections));

        Self {
            store,
            cache: cache.clone(),
            students: students.clone(),
            student_service: StudentServiceImpl::new(students, users.clone(), cache.clone()),
            user_service: UserServiceImpl::new(users, cache.clone()),
            school_year_service: SchoolYearServiceImpl::new(
                school_years.clone(),
                sections.clone(),
                cache.clone(),
            ),
            section_service: SectionServiceImpl::new(sections, school_years, cache),
        }
    }
}

pub fn user(email: &str, first_name: &str) -> User {
    User::new(
        email,
        first_name,
        "Bautista",
        Sex::Female,
        NaiveDate::from_ymd_opt(2011, 8, 21).unwrap(),
    )
}
