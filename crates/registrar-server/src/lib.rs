//! # Registrar Server Library
//!
//! Wiring of the cache, repositories and services from configuration, plus
//! startup utilities.

pub mod app;
pub mod startup;
