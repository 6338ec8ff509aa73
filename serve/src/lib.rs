//! Proxy gateway for the pitch builder (axum).
//!
//! Listens on http://127.0.0.1:8787 and exposes `POST /api/generate`: the caller sends
//! `{prompt, max_tokens?}`, the server attaches its credential and relays a single-turn
//! request to the Messages API. Clients never see the key.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`GatewaySettings`].

mod app;
mod credential;
mod error;
mod upstream;

use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub use app::GatewaySettings;
pub use credential::{ApiKey, CredentialSource, DEFAULT_API_KEY_VAR};
pub use error::ProxyError;

use app::{router, AppState};

pub const DEFAULT_ADDR: &str = "127.0.0.1:8787";

/// Serves the proxy on an existing listener until `shutdown` resolves. Used by tests
/// (bind to 127.0.0.1:0 then pass the listener).
pub async fn run_serve_with_shutdown<F>(
    listener: TcpListener,
    settings: GatewaySettings,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        upstream = %settings.upstream_url,
        model = %settings.model,
        "proxy listening on http://{}",
        addr
    );
    if settings.credential.resolve().is_none() {
        tracing::warn!("no API key configured; generate requests will fail until one is set");
    }
    let app = router(Arc::new(AppState::new(settings)));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("proxy stopped");
    Ok(())
}

/// Serves the proxy on an existing listener until the task is dropped.
pub async fn run_serve_on_listener(
    listener: TcpListener,
    settings: GatewaySettings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    run_serve_with_shutdown(listener, settings, std::future::pending()).await
}

/// Runs the proxy on `addr` (default 127.0.0.1:8787) with settings from the environment.
/// Stops on Ctrl+C.
pub async fn run_serve(addr: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = addr.unwrap_or(DEFAULT_ADDR);
    let listener = TcpListener::bind(addr).await?;
    run_serve_with_shutdown(listener, GatewaySettings::from_env(), async {
        let _ = tokio::signal::ctrl_c().await;
        info!("received Ctrl+C, shutting down");
    })
    .await
}
