//! In-process repositories.
//!
//! Rows live in ordered maps keyed by their time-ordered ids, so listings
//! come back in creation order.

mod school_year;
mod section;
mod student;
mod table;
mod user;

pub use school_year::InMemorySchoolYearRepository;
pub use section::InMemorySectionRepository;
pub use student::InMemoryStudentRepository;
pub use user::InMemoryUserRepository;
