use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;

use topic_push_relay::config::Settings;
use topic_push_relay::push;
use topic_push_relay::server::{create_app, AppState};
use topic_push_relay::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (.env first, then config files and environment)
    let settings = Settings::new().context("failed to load configuration")?;

    // Initialize tracing
    let _telemetry = init_telemetry(&settings.otel)?;
    tracing::info!("Configuration loaded");

    // Credentials must be usable before we accept any request
    let base_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let sender = push::init_sender(&settings.fcm, &base_dir)
        .inspect_err(|e| tracing::error!(error = %e, "Failed to load service account key"))
        .context("failed to initialize FCM sender")?;

    let addr = settings.server_addr();
    let state = AppState::new(settings, sender);
    let app = create_app(state);

    // Start server
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
