//! # Registrar Service
//!
//! Record services for students, users, school years and sections.
//!
//! Reads go through the cache-aside layer; a miss loads from the repository
//! and populates the cache. Writes go to the repository and then apply the
//! entity's [`invalidation`] plan. Writes never populate.

pub mod dto;
pub mod invalidation;
pub mod r#impl;
pub mod school_year_service;
pub mod section_service;
pub mod student_service;
pub mod user_service;

pub use dto::*;
pub use r#impl::{SchoolYearServiceImpl, SectionServiceImpl, StudentServiceImpl, UserServiceImpl};
pub use school_year_service::*;
pub use section_service::*;
pub use student_service::*;
pub use user_service::*;
