//! Cache entries made stale by each kind of write.
//!
//! Every write path builds its plan here, so the full list of keys an entity
//! touches can be read in one place. `before` is the record as it was prior
//! to the write, `None` for creates.

use registrar_cache::{InvalidationPlan, Namespace};
use registrar_core::{SchoolYear, Section, Student, User};

/// `student:{id}`, `student:all`, and the roster of every section the student
/// left or joined, plus any extra rosters named by the caller.
#[must_use]
pub fn student_plan(before: Option<&Student>, after: &Student, extra_sections: &[String]) -> InvalidationPlan {
    InvalidationPlan::new()
        .item(Namespace::Student, after.id)
        .collection(Namespace::Student)
        .scopes(
            Namespace::Section,
            [
                before.and_then(|s| s.current_section.clone()),
                after.current_section.clone(),
            ],
        )
        .scopes(Namespace::Section, extra_sections.iter().cloned().map(Some))
}

/// `user:{id}` and `user:all`.
#[must_use]
pub fn user_plan(user: &User) -> InvalidationPlan {
    InvalidationPlan::new()
        .item(Namespace::User, user.id)
        .collection(Namespace::User)
}

/// `school-year:{id}` and `school-year:all`.
///
/// The year's section listing holds sections only, so it survives.
#[must_use]
pub fn school_year_plan(school_year: &SchoolYear) -> InvalidationPlan {
    InvalidationPlan::new()
        .item(Namespace::SchoolYear, school_year.id)
        .collection(Namespace::SchoolYear)
}

/// `section:{id}`, `section:all`, and the section listing of the old and new
/// school year.
#[must_use]
pub fn section_plan(before: Option<&Section>, after: &Section) -> InvalidationPlan {
    InvalidationPlan::new()
        .item(Namespace::Section, after.id)
        .collection(Namespace::Section)
        .scopes(
            Namespace::SchoolYear,
            [
                before.map(|s| s.school_year_id.to_string()),
                Some(after.school_year_id.to_string()),
            ],
        )
}
