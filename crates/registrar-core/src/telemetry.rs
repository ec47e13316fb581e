//! Tracing subscriber initialization.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::RegistrarResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, one event per line.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    "info,registrar=debug".to_string()
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter when set.
#[cfg(feature = "telemetry")]
pub fn init_tracing(config: &TracingConfig) -> RegistrarResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| crate::RegistrarError::Configuration(format!("Invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    result.map_err(|e| crate::RegistrarError::Internal(format!("Failed to install tracing subscriber: {}", e)))?;

    tracing::info!(filter = %config.filter, format = %config.format, "Tracing initialized");
    Ok(())
}

/// Placeholder for when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_config: &TracingConfig) -> RegistrarResult<()> {
    Ok(())
}
