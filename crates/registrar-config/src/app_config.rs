//! Application configuration structures.

use registrar_core::telemetry::{LogFormat, TracingConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Redis configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Cache-aside layer configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "registrar".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Redis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Redis URL.
    pub url: String,
    /// Connection pool size.
    pub pool_size: u32,
    /// Enable Redis. When disabled every read misses and every write is a no-op.
    pub enabled: bool,
    /// Prefix prepended to every key, empty for none.
    pub key_prefix: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            pool_size: 10,
            enabled: true,
            key_prefix: String::new(),
        }
    }
}

/// Cache-aside layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Upper bound on a single store call in milliseconds.
    pub operation_timeout_ms: u64,
    /// TTL table.
    pub ttl: TtlConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            operation_timeout_ms: 250,
            ttl: TtlConfig::default(),
        }
    }
}

impl CacheConfig {
    /// Returns the store operation timeout as a Duration.
    #[must_use]
    pub const fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}

/// TTL defaults plus per-namespace overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TtlConfig {
    /// TTL of single-item entries in seconds.
    pub item_secs: u64,
    /// TTL of `{namespace}:all` entries in seconds.
    pub collection_secs: u64,
    /// TTL of `{namespace}:{scope}:all` entries in seconds.
    pub scoped_collection_secs: u64,
    /// Overrides keyed by namespace (`student`, `school-year`, ...).
    pub overrides: HashMap<String, TtlOverride>,
}

impl Default for TtlConfig {
    fn default() -> Self {
        Self {
            item_secs: 300,             // 5 minutes
            collection_secs: 3600,      // 1 hour
            scoped_collection_secs: 3600,
            overrides: HashMap::new(),
        }
    }
}

/// Per-namespace TTL override; unset fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtlOverride {
    pub item_secs: Option<u64>,
    pub collection_secs: Option<u64>,
    pub scoped_collection_secs: Option<u64>,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: LogFormat,
    /// Install the Prometheus recorder.
    pub metrics_enabled: bool,
    /// Address the Prometheus exporter listens on.
    pub metrics_addr: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_addr: "0.0.0.0:9000".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Builds the tracing configuration, keeping debug output for this workspace's crates.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        TracingConfig {
            filter: format!("{},registrar=debug", self.log_level),
            format: self.log_format,
        }
    }
}
