//! # Registrar Server
//!
//! Loads configuration, installs logging and metrics, wires the record
//! services over the cache-aside layer, and runs until a shutdown signal.

use registrar_config::ConfigLoader;
use registrar_core::telemetry::init_tracing;
use registrar_core::{HealthStatus, RegistrarResult};
use registrar_server::app::App;
use registrar_server::startup::{install_metrics, print_startup_info};
use std::time::Duration;
use tokio::signal;
use tracing::{debug, error, info};

const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("registrar-server: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> RegistrarResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_tracing(&config.observability.tracing_config())?;

    info!("Starting Registrar Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    install_metrics(&config.observability)?;

    let app = App::build(&config)?;
    print_startup_info(&config);

    let mut ticker = tokio::time::interval(HEALTH_CHECK_INTERVAL);
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            () = &mut shutdown => break,
            _ = ticker.tick() => match app.health().await {
                HealthStatus::Healthy => debug!("Health check passed"),
                status => info!(?status, "Running degraded, cache reads fall through"),
            },
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
