//! Unified error types for all layers of the records service.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Registrar.
///
/// Cache subsystem failures never surface through this type to end callers;
/// the cache layer logs them and falls back to the backing store. What does
/// surface is the backing store's own failure, propagated verbatim.
#[derive(Error, Debug)]
pub enum RegistrarError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Conflict error (e.g., duplicate learner reference number)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Backing store error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Redis/Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistrarError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Conflict(_) => 409,
            Self::Database(_) | Self::Configuration(_) | Self::Cache(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a backing store error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }
}

impl From<serde_json::Error> for RegistrarError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request trace ID for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response from a `RegistrarError`.
    #[must_use]
    pub fn from_error(error: &RegistrarError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            trace_id: None,
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

impl From<&RegistrarError> for ErrorResponse {
    fn from(error: &RegistrarError) -> Self {
        Self::from_error(error)
    }
}
