//! Records served by the directory.

mod school_year;
mod section;
mod student;
mod user;

pub use school_year::SchoolYear;
pub use section::Section;
pub use student::Student;
pub use user::{Sex, User};
