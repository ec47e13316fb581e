//! End-to-end cache-aside behaviour across the record services.

mod common;

use common::{user, Registrar, Seed};
use registrar_cache::{CacheTarget, Namespace, RedisCacheStore};
use registrar_core::{SchoolYear, Section, Student};
use registrar_repository::StudentRepository;
use registrar_service::{
    CreateStudentRequest, SchoolYearService, SectionService, StudentService, UpdateStudentRequest,
    UserService,
};
use std::sync::Arc;

#[tokio::test]
async fn test_listing_is_cached_until_a_write_invalidates_it() {
    let (ana, ben, cora) = (
        user("ana@example.com", "Ana"),
        user("ben@example.com", "Ben"),
        user("cora@example.com", "Cora"),
    );
    let a = Student::new(ana.id, "100000000001");
    let b = Student::new(ben.id, "100000000002");
    let registrar = Registrar::new(Seed {
        users: vec![ana, ben, cora.clone()],
        students: vec![a.clone(), b.clone()],
        ..Seed::default()
    });

    // Miss, loaded from the repository, populated.
    assert_eq!(
        registrar.student_service.list_students().await.unwrap(),
        vec![a.clone(), b.clone()]
    );
    let listing = CacheTarget::collection(Namespace::Student);
    assert!(registrar.cache.read_through::<Vec<Student>>(&listing).await.is_hit());

    // Served from the cache even though the repository moved on.
    let stray = Student::new(cora.id, "100000000099");
    registrar.students.save(&stray).await.unwrap();
    assert_eq!(
        registrar.student_service.list_students().await.unwrap(),
        vec![a.clone(), b.clone()]
    );

    // A write through the service invalidates; the next read repopulates.
    let c = registrar
        .student_service
        .create_student(CreateStudentRequest {
            user_id: cora.id,
            learner_reference_number: "100000000003".to_string(),
            current_grade_level: Some("7".to_string()),
            current_section: None,
            current_adviser: None,
            also_invalidate_sections: Vec::new(),
        })
        .await
        .unwrap();
    assert!(registrar.cache.read_through::<Vec<Student>>(&listing).await.is_miss());

    assert_eq!(
        registrar.student_service.list_students().await.unwrap(),
        vec![a, b, stray, c]
    );
    assert!(registrar.cache.read_through::<Vec<Student>>(&listing).await.is_hit());
}

#[tokio::test]
async fn test_student_update_invalidates_exactly_its_keys() {
    let ana = user("ana@example.com", "Ana");
    let sy2023 = SchoolYear::new(2023);
    let section = Section::new(sy2023.id, "7-A", "7");
    let x = Student::new(ana.id, "100000000001").in_section("7-A");
    let registrar = Registrar::new(Seed {
        users: vec![ana.clone()],
        students: vec![x.clone()],
        school_years: vec![sy2023.clone()],
        sections: vec![section],
    });

    registrar.student_service.get_student(x.id).await.unwrap();
    registrar.student_service.list_students().await.unwrap();
    registrar.student_service.list_students_in_section("7-A").await.unwrap();
    registrar.school_year_service.list_sections(sy2023.id).await.unwrap();
    registrar.user_service.get_user(ana.id).await.unwrap();

    let student_key = format!("student:{}", x.id);
    let year_sections_key = format!("school-year:{}:all", sy2023.id);
    let user_key = format!("user:{}", ana.id);
    for key in [
        student_key.as_str(),
        "student:all",
        "section:7-A:all",
        year_sections_key.as_str(),
        user_key.as_str(),
    ] {
        assert!(registrar.store.contains(key).await, "{} should be cached", key);
    }

    registrar
        .student_service
        .update_student(
            x.id,
            UpdateStudentRequest {
                learner_reference_number: "100000000001".to_string(),
                current_grade_level: Some("8".to_string()),
                current_section: Some("7-A".to_string()),
                current_adviser: Some("G. Cruz".to_string()),
                also_invalidate_sections: Vec::new(),
            },
        )
        .await
        .unwrap();

    for key in [student_key.as_str(), "student:all", "section:7-A:all"] {
        assert!(!registrar.store.contains(key).await, "{} should be invalidated", key);
    }
    assert!(registrar.store.contains(&year_sections_key).await);
    assert!(registrar.store.contains(&user_key).await);

    let roster = registrar
        .student_service
        .list_students_in_section("7-A")
        .await
        .unwrap();
    assert_eq!(roster[0].current_grade_level.as_deref(), Some("8"));
}

#[tokio::test]
async fn test_services_work_with_cache_disabled() {
    let ana = user("ana@example.com", "Ana");
    let sy2023 = SchoolYear::new(2023);
    let seed = Seed {
        users: vec![ana.clone()],
        school_years: vec![sy2023.clone()],
        ..Seed::default()
    };
    let registrar = Registrar::with_store(
        seed,
        Arc::new(registrar_cache::MemoryCacheStore::new()),
        Arc::new(RedisCacheStore::disabled()),
    );

    assert_eq!(registrar.user_service.get_user(ana.id).await.unwrap(), ana);
    assert_eq!(registrar.school_year_service.list_school_years().await.unwrap(), vec![sy2023]);
    assert!(registrar.section_service.list_sections().await.unwrap().is_empty());
    assert!(registrar.store.is_empty().await);
}

#[tokio::test]
async fn test_empty_section_roster_does_not_shadow_section_listing() {
    let sy2023 = SchoolYear::new(2023);
    let section = Section::new(sy2023.id, "7-A", "7");
    let registrar = Registrar::new(Seed {
        school_years: vec![sy2023],
        sections: vec![section.clone()],
        ..Seed::default()
    });

    let roster = registrar
        .student_service
        .list_students_in_section("")
        .await
        .unwrap();
    assert!(roster.is_empty());
    assert!(registrar.store.contains("section::all").await);
    assert!(!registrar.store.contains("section:all").await);

    assert_eq!(
        registrar.section_service.list_sections().await.unwrap(),
        vec![section]
    );
}
