//! Result type aliases for Registrar.

use crate::RegistrarError;

/// A specialized `Result` type for Registrar operations.
pub type RegistrarResult<T> = Result<T, RegistrarError>;
