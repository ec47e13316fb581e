//! # Registrar Core
//!
//! Core types, traits, and error definitions for the Registrar records service.
//! Holds the plain records (students, users, school years, sections) that the
//! repositories return and the cache layer stores.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
