//! Service implementations.

mod school_year_service_impl;
mod section_service_impl;
mod student_service_impl;
mod user_service_impl;

pub use school_year_service_impl::SchoolYearServiceImpl;
pub use section_service_impl::SectionServiceImpl;
pub use student_service_impl::StudentServiceImpl;
pub use user_service_impl::UserServiceImpl;
