//! nodepulse agent
//!
//! Serves a JSON status document on `agent.path`:
//! `{"status":"online","cpu_load":..,"current_users":..,"max_users":200}`.
//! Config path is the first CLI argument (default `nodepulse.yaml`).

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nodepulse_agent::{app_state, config, router};
use nodepulse_core::error::{NodePulseError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "nodepulse.yaml".to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.agent.listen_addr()?;
    let route = cfg.agent.path.clone();

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, %route, "nodepulse-agent starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| NodePulseError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| NodePulseError::Internal(format!("server failed: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
