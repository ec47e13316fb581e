//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use registrar_core::RegistrarError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides, not committed
    /// 4. Environment variables with `REGISTRAR__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, RegistrarError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, RegistrarError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    ///
    /// The previous configuration stays in place if the new one fails validation.
    pub async fn reload(&self) -> Result<(), RegistrarError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    fn load_config(config_dir: &str) -> Result<AppConfig, RegistrarError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("REGISTRAR_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("REGISTRAR")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize::<AppConfig>())
            .map_err(config_error_to_registrar_error)?;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            RegistrarError::Configuration(messages.join("; "))
        })?;

        Ok(app_config)
    }
}

fn config_error_to_registrar_error(err: ConfigError) -> RegistrarError {
    RegistrarError::Configuration(err.to_string())
}
