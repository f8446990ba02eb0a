//! Provider server: loads configuration, bootstraps storage, then serves HTTP.
//!
//! Run from repo root: `cargo run -p provider-server`

use provider_service::{app, bootstrap, AppState, PgProviderStore, ServiceConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("provider_service=info,provider_server=info,tower_http=info")
            }),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let pool = match bootstrap(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "bootstrap failed");
            return Err(e.into());
        }
    };

    let state = AppState::new(PgProviderStore::new(pool));
    let router = app(state, config.max_body_bytes);

    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("Server running on port {}", listener.local_addr()?.port());
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
