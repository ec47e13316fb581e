//! Server startup utilities.

use registrar_config::{AppConfig, ObservabilityConfig};
use registrar_core::{RegistrarError, RegistrarResult};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    if config.redis.enabled {
        info!("Cache:       {} (pool {})", config.redis.url, config.redis.pool_size);
    } else {
        info!("Cache:       disabled");
    }
    info!(
        "TTLs:        item {}s, collection {}s, scoped {}s",
        config.cache.ttl.item_secs,
        config.cache.ttl.collection_secs,
        config.cache.ttl.scoped_collection_secs
    );
    if config.observability.metrics_enabled {
        info!("Metrics:     http://{}/metrics", config.observability.metrics_addr);
    }
    info!("{}", separator);
}

/// Installs the Prometheus exporter when metrics are enabled.
///
/// Must be called from within the tokio runtime.
pub fn install_metrics(config: &ObservabilityConfig) -> RegistrarResult<()> {
    if !config.metrics_enabled {
        return Ok(());
    }

    let addr: SocketAddr = config.metrics_addr.parse().map_err(|e| {
        RegistrarError::Configuration(format!(
            "Invalid metrics address '{}': {}",
            config.metrics_addr, e
        ))
    })?;

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| RegistrarError::Internal(format!("Failed to install metrics exporter: {}", e)))?;

    registrar_cache::metrics::register_metrics();
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}
