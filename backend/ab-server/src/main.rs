use ab_server::{AppState, ConnectionRegistry, Metrics, ShutdownCoordinator, build_router, logger};

use ab_config::Config;
use ab_core::{AuthProvider, MemoryProvider, MemoryProviderOptions};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_deref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Before any other logging
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ab-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let provider: Arc<dyn AuthProvider> =
        Arc::new(MemoryProvider::with_options(MemoryProviderOptions {
            latency: config.provider.latency(),
            sms_code: config.provider.sms_code.clone(),
        }));
    info!("In-memory auth provider ready");

    let shutdown = ShutdownCoordinator::new();

    let app_state = AppState {
        provider,
        registry: ConnectionRegistry::new(config.server.max_connections),
        metrics: Metrics::new(),
        shutdown: shutdown.clone(),
        send_buffer_size: config.server.send_buffer_size,
    };

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.trigger();
            }
            Err(e) => error!("Failed to listen for SIGINT: {e}"),
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.signal().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
