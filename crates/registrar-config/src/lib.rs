//! # Registrar Config
//!
//! Configuration management for the Registrar records service.
//! Supports layered configuration from files and environment variables,
//! validated up front and refreshable at runtime.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
