use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use invitation_dispatcher::api;
use invitation_dispatcher::config::Config;
use invitation_dispatcher::mail::ResendTransport;
use invitation_dispatcher::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Invitation Dispatcher...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(
        host = %config.server_host,
        port = %config.server_port,
        dispatch_ready = config.is_dispatch_ready(),
        "Configuration loaded"
    );

    if !config.is_dispatch_ready() {
        // Requests will be rejected with MissingConfiguration until the
        // environment is fixed; the server still starts so that health
        // checks can report the gap.
        tracing::warn!(
            missing = ?config.missing_dispatch_values(),
            "Dispatch configuration incomplete"
        );
    }

    // Create the mail transport
    let transport = ResendTransport::new(
        config.mail_api_key.clone().unwrap_or_default(),
        Duration::from_secs(config.mail_send_timeout_seconds),
    )?;

    // Create application state
    let state = AppState::new(config.clone(), Arc::new(transport));

    // Build router
    let app = api::create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config.server_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Handle shutdown signals
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
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            tracing::info!("Received terminate signal, shutting down...");
        },
    }
}
