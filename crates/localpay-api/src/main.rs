//! # localpay
//!
//! Local payment simulator for frontend development. No money moves.
//!
//! ## Usage
//!
//! ```bash
//! # Optional overrides (defaults shown)
//! export PORT=8080
//! export CORS_ALLOWED_ORIGINS=http://localhost:5173,http://localhost:3000
//! export PROCESSING_DELAY_MS=1500
//!
//! # Run the server
//! localpay
//! ```

use localpay_api::{routes, AppConfig, AppState, LogFormat};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    match config.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
    }

    print_banner();

    let addr = config.socket_addr()?;
    info!("Allowed origins: {:?}", config.allowed_origins);
    info!("Simulated processing delay: {:?}", config.processing_delay);

    let state = AppState::new(config);
    let app = routes::create_router(state);

    info!("localpay starting on http://{}", addr);
    info!("Health: GET http://{}/health", addr);
    info!("Payments: POST http://{}/api/local-payment", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("localpay stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

fn print_banner() {
    println!(
        r#"
  localpay
  ━━━━━━━━━━━━━━━━━━━━━━━
  Local payment simulator
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
