//! Student service implementation.

use crate::dto::{CreateStudentRequest, UpdateStudentRequest};
use crate::invalidation::student_plan;
use crate::student_service::StudentService;
use async_trait::async_trait;
use registrar_cache::{CacheAside, CacheTarget, Namespace};
use registrar_core::{RegistrarError, RegistrarResult, Student, StudentId};
use registrar_repository::{StudentRepository, UserRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Student service with cache-aside reads.
pub struct StudentServiceImpl {
    student_repository: Arc<dyn StudentRepository>,
    user_repository: Arc<dyn UserRepository>,
    cache: Arc<CacheAside>,
}

impl StudentServiceImpl {
    /// Creates a new student service.
    pub fn new(
        student_repository: Arc<dyn StudentRepository>,
        user_repository: Arc<dyn UserRepository>,
        cache: Arc<CacheAside>,
    ) -> Self {
        Self {
            student_repository,
            user_repository,
            cache,
        }
    }
}

#[async_trait]
impl StudentService for StudentServiceImpl {
    async fn list_students(&self) -> RegistrarResult<Vec<Student>> {
        debug!("Listing students");

        self.cache
            .get_or_load(&CacheTarget::collection(Namespace::Student), || {
                self.student_repository.find_all()
            })
            .await
    }

    async fn get_student(&self, id: StudentId) -> RegistrarResult<Student> {
        debug!("Getting student: {}", id);

        self.cache
            .get_or_load(&CacheTarget::item(Namespace::Student, id), || async move {
                self.student_repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| RegistrarError::not_found("Student", id))
            })
            .await
    }

    async fn list_students_in_section(&self, section: &str) -> RegistrarResult<Vec<Student>> {
        debug!("Listing students in section: {}", section);

        self.cache
            .get_or_load(&CacheTarget::scoped(Namespace::Section, section), || {
                self.student_repository.find_all_by_section(section)
            })
            .await
    }

    async fn create_student(&self, request: CreateStudentRequest) -> RegistrarResult<Student> {
        debug!("Creating student for user: {}", request.user_id);

        let user = self
            .user_repository
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| RegistrarError::not_found("User", request.user_id))?;

        let mut student = Student::new(user.id, request.learner_reference_number);
        student.current_grade_level = request.current_grade_level;
        student.current_section = request.current_section;
        student.current_adviser = request.current_adviser;

        let saved = self.student_repository.save(&student).await?;

        self.cache
            .invalidate_plan(&student_plan(None, &saved, &request.also_invalidate_sections))
            .await;

        info!("Student created: {}", saved.id);
        Ok(saved)
    }

    async fn update_student(&self, id: StudentId, request: UpdateStudentRequest) -> RegistrarResult<Student> {
        debug!("Updating student: {}", id);

        let before = self
            .student_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RegistrarError::not_found("Student", id))?;

        let mut student = before.clone();
        student.update_enrollment(
            request.learner_reference_number,
            request.current_grade_level,
            request.current_section,
            request.current_adviser,
        );

        let updated = self.student_repository.update(&student).await?;

        self.cache
            .invalidate_plan(&student_plan(
                Some(&before),
                &updated,
                &request.also_invalidate_sections,
            ))
            .await;

        info!("Student updated: {}", id);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use mockall::mock;
    use registrar_cache::{CacheResult, CacheStore, MemoryCacheStore};
    use registrar_core::{Sex, User, UserId};
    use registrar_repository::{InMemoryStudentRepository, InMemoryUserRepository};

    mock! {
        pub Students {}

        #[async_trait]
        impl StudentRepository for Students {
            async fn find_by_id(&self, id: StudentId) -> RegistrarResult<Option<Student>>;
            async fn find_all(&self) -> RegistrarResult<Vec<Student>>;
            async fn find_all_by_section(&self, section: &str) -> RegistrarResult<Vec<Student>>;
            async fn save(&self, student: &Student) -> RegistrarResult<Student>;
            async fn update(&self, student: &Student) -> RegistrarResult<Student>;
        }
    }

    struct Fixture {
        store: Arc<MemoryCacheStore>,
        cache: Arc<CacheAside>,
        students: Arc<InMemoryStudentRepository>,
        service: StudentServiceImpl,
        user: User,
    }

    fn fixture(seed: Vec<Student>) -> Fixture {
        let user = User::new(
            "ana@example.com",
            "Ana",
            "Reyes",
            Sex::Female,
            NaiveDate::from_ymd_opt(2011, 1, 15).unwrap(),
        );
        let store = Arc::new(MemoryCacheStore::new());
        let cache = Arc::new(CacheAside::with_store(store.clone()));
        let students = Arc::new(InMemoryStudentRepository::with_students(seed));
        let users = Arc::new(InMemoryUserRepository::with_users(vec![user.clone()]));
        let service = StudentServiceImpl::new(students.clone(), users, cache.clone());
        Fixture {
            store,
            cache,
            students,
            service,
            user,
        }
    }

    fn update_request(section: Option<&str>) -> UpdateStudentRequest {
        UpdateStudentRequest {
            learner_reference_number: "100000000001".to_string(),
            current_grade_level: Some("7".to_string()),
            current_section: section.map(str::to_string),
            current_adviser: None,
            also_invalidate_sections: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_list_students_is_served_from_cache() {
        let a = Student::new(UserId::new(), "100000000001");
        let f = fixture(vec![a.clone()]);

        assert_eq!(f.service.list_students().await.unwrap(), vec![a.clone()]);

        // A record written behind the service's back is invisible until invalidated.
        f.students
            .save(&Student::new(UserId::new(), "100000000002"))
            .await
            .unwrap();
        assert_eq!(f.service.list_students().await.unwrap(), vec![a]);
    }

    #[tokio::test]
    async fn test_get_missing_student_is_not_cached() {
        let f = fixture(Vec::new());

        let err = f.service.get_student(StudentId::new()).await.unwrap_err();

        assert!(matches!(err, RegistrarError::NotFound { .. }));
        assert!(f.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_requires_existing_user() {
        let f = fixture(Vec::new());
        let request = CreateStudentRequest {
            user_id: UserId::new(),
            learner_reference_number: "100000000001".to_string(),
            current_grade_level: None,
            current_section: None,
            current_adviser: None,
            also_invalidate_sections: Vec::new(),
        };

        let err = f.service.create_student(request).await.unwrap_err();
        assert!(matches!(err, RegistrarError::NotFound { resource_type: "User", .. }));
    }

    #[tokio::test]
    async fn test_create_drops_listing_and_roster() {
        let f = fixture(Vec::new());
        f.service.list_students().await.unwrap();
        f.service.list_students_in_section("7-A").await.unwrap();
        f.service.list_students_in_section("7-B").await.unwrap();

        let created = f
            .service
            .create_student(CreateStudentRequest {
                user_id: f.user.id,
                learner_reference_number: "100000000001".to_string(),
                current_grade_level: Some("7".to_string()),
                current_section: Some("7-A".to_string()),
                current_adviser: None,
                also_invalidate_sections: Vec::new(),
            })
            .await
            .unwrap();

        assert!(!f.store.contains("student:all").await);
        assert!(!f.store.contains("section:7-A:all").await);
        assert!(f.store.contains("section:7-B:all").await);
        assert_eq!(
            f.service.list_students_in_section("7-A").await.unwrap(),
            vec![created]
        );
    }

    #[tokio::test]
    async fn test_update_moving_section_drops_both_rosters() {
        let student = Student::new(UserId::new(), "100000000001").in_section("7-A");
        let f = fixture(vec![student.clone()]);
        f.service.get_student(student.id).await.unwrap();
        f.service.list_students_in_section("7-A").await.unwrap();
        f.service.list_students_in_section("7-B").await.unwrap();

        let updated = f
            .service
            .update_student(student.id, update_request(Some("7-B")))
            .await
            .unwrap();

        let item = CacheTarget::item(Namespace::Student, student.id);
        assert!(f.cache.read_through::<Student>(&item).await.is_miss());
        assert!(!f.store.contains("section:7-A:all").await);
        assert!(!f.store.contains("section:7-B:all").await);
        assert!(f.service.list_students_in_section("7-A").await.unwrap().is_empty());
        assert_eq!(
            f.service.list_students_in_section("7-B").await.unwrap(),
            vec![updated]
        );
    }

    #[tokio::test]
    async fn test_update_drops_extra_sections() {
        let student = Student::new(UserId::new(), "100000000001").in_section("7-A");
        let f = fixture(vec![student.clone()]);
        f.service.list_students_in_section("8-C").await.unwrap();

        let mut request = update_request(Some("7-A"));
        request.also_invalidate_sections = vec!["8-C".to_string()];
        f.service.update_student(student.id, request).await.unwrap();

        assert!(!f.store.contains("section:8-C:all").await);
    }

    #[tokio::test]
    async fn test_writes_do_not_repopulate() {
        let student = Student::new(UserId::new(), "100000000001");
        let f = fixture(vec![student.clone()]);

        f.service
            .update_student(student.id, update_request(None))
            .await
            .unwrap();

        assert!(f.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut students = MockStudents::new();
        students
            .expect_find_all()
            .times(1)
            .returning(|| Err(RegistrarError::database("connection reset")));
        let store: Arc<dyn CacheStore> = Arc::new(MemoryCacheStore::new());
        let cache = Arc::new(CacheAside::with_store(store));
        let service = StudentServiceImpl::new(
            Arc::new(students),
            Arc::new(InMemoryUserRepository::new()),
            cache.clone(),
        );

        let err = service.list_students().await.unwrap_err();

        assert!(matches!(err, RegistrarError::Database(_)));
        let listing = CacheTarget::collection(Namespace::Student);
        assert_eq!(
            cache.read_through::<Vec<Student>>(&listing).await,
            CacheResult::Miss
        );
    }

    #[tokio::test]
    async fn test_failed_write_leaves_cache_alone() {
        let student = Student::new(UserId::new(), "100000000001");
        let mut students = MockStudents::new();
        let found = student.clone();
        students
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        students
            .expect_update()
            .times(1)
            .returning(|_| Err(RegistrarError::database("deadlock")));
        let store = Arc::new(MemoryCacheStore::new());
        let cache = Arc::new(CacheAside::with_store(store.clone()));
        let service = StudentServiceImpl::new(
            Arc::new(students),
            Arc::new(InMemoryUserRepository::new()),
            cache,
        );
        service.get_student(student.id).await.unwrap();

        let result = service.update_student(student.id, update_request(None)).await;

        assert!(matches!(result, Err(RegistrarError::Database(_))));
        assert!(store.contains(&format!("student:{}", student.id)).await);
    }
}
