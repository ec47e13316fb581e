//! # Registrar Repository
//!
//! Backing-store access for the records served by the directory.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn StudentRepository>  (domain interface)
//! InMemoryStudentRepository       (in-process tables)
//! ```
//!
//! Repositories are the source of truth. They know nothing about the cache;
//! the service layer decides what to read through and what to invalidate.

pub mod memory;
pub mod traits;

pub use memory::{
    InMemorySchoolYearRepository, InMemorySectionRepository, InMemoryStudentRepository,
    InMemoryUserRepository,
};
pub use traits::*;
