//! Configuration validation.
//!
//! Collects every problem in one pass so a misconfigured deployment fails at
//! startup with the full list instead of one error at a time.

use crate::{AppConfig, CacheConfig, ObservabilityConfig, RedisConfig, TtlConfig};
use thiserror::Error;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    /// URL format is invalid.
    #[error("Invalid {url_type} URL: {message}")]
    InvalidUrl { url_type: String, message: String },

    /// Pool size is zero or too large.
    #[error("Invalid Redis pool size {value} (must be between 1 and {maximum})")]
    InvalidPoolSize { value: u32, maximum: u32 },

    /// Timeout value must be positive.
    #[error("Timeout '{name}' must be positive, got {value}")]
    NonPositiveTimeout { name: String, value: u64 },

    /// Store timeout must stay below the request budget.
    #[error("Timeout '{name}' is {value}ms, must not exceed {maximum}ms")]
    TimeoutTooLong { name: String, value: u64, maximum: u64 },

    /// A TTL of zero would make the entry expire immediately.
    #[error("TTL '{name}' must be positive")]
    ZeroTtl { name: String },

    /// Log level is invalid.
    #[error("Invalid log level: '{value}' (valid: trace, debug, info, warn, error)")]
    InvalidLogLevel { value: String },
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;
    /// Store calls must finish well inside a request's own timeout.
    const MAX_OPERATION_TIMEOUT_MS: u64 = 5_000;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_redis(&config.redis, &mut errors);
        Self::validate_cache(&config.cache, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_redis(config: &RedisConfig, errors: &mut Vec<ConfigValidationError>) {
        if !config.enabled {
            return;
        }

        match Url::parse(&config.url) {
            Ok(url) if matches!(url.scheme(), "redis" | "rediss") => {}
            Ok(url) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "Redis".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "Redis".to_string(),
                message: e.to_string(),
            }),
        }

        if config.pool_size == 0 || config.pool_size > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::InvalidPoolSize {
                value: config.pool_size,
                maximum: Self::MAX_POOL_SIZE,
            });
        }
    }

    fn validate_cache(config: &CacheConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.operation_timeout_ms == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "cache.operation_timeout_ms".to_string(),
                value: 0,
            });
        } else if config.operation_timeout_ms > Self::MAX_OPERATION_TIMEOUT_MS {
            errors.push(ConfigValidationError::TimeoutTooLong {
                name: "cache.operation_timeout_ms".to_string(),
                value: config.operation_timeout_ms,
                maximum: Self::MAX_OPERATION_TIMEOUT_MS,
            });
        }

        Self::validate_ttl(&config.ttl, errors);
    }

    fn validate_ttl(config: &TtlConfig, errors: &mut Vec<ConfigValidationError>) {
        let defaults = [
            ("cache.ttl.item_secs", config.item_secs),
            ("cache.ttl.collection_secs", config.collection_secs),
            ("cache.ttl.scoped_collection_secs", config.scoped_collection_secs),
        ];
        for (name, value) in defaults {
            if value == 0 {
                errors.push(ConfigValidationError::ZeroTtl { name: name.to_string() });
            }
        }

        let mut namespaces: Vec<_> = config.overrides.keys().collect();
        namespaces.sort();
        for namespace in namespaces {
            let entry = &config.overrides[namespace];
            let fields = [
                ("item_secs", entry.item_secs),
                ("collection_secs", entry.collection_secs),
                ("scoped_collection_secs", entry.scoped_collection_secs),
            ];
            for (field, value) in fields {
                if value == Some(0) {
                    errors.push(ConfigValidationError::ZeroTtl {
                        name: format!("cache.ttl.overrides.{}.{}", namespace, field),
                    });
                }
            }
        }
    }

    fn validate_observability(config: &ObservabilityConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }
    }
}
