mod app;
mod handlers;
mod models;
mod notifications;
mod oauth;
mod views;

use models::oauth::OAuthProvider;
use tower_sessions::MemoryStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use models::{AppConfig, AppState};

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app_config = AppConfig::from_env()?;

    for provider in OAuthProvider::ALL {
        if app_config.is_enabled(provider) {
            tracing::info!(%provider, "login provider enabled");
        } else {
            tracing::warn!(%provider, "login provider not configured, button disabled");
        }
    }

    let listen_addr = app_config.listen_addr;
    let app_state = AppState {
        config: app_config,
    };

    let app = app::router(app_state, MemoryStore::default());

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!(%listen_addr, "listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
