//! Data Transfer Objects (DTOs).

mod school_year_dto;
mod section_dto;
mod student_dto;
mod user_dto;

pub use school_year_dto::*;
pub use section_dto::*;
pub use student_dto::*;
pub use user_dto::*;
