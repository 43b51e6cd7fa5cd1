use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::shop::{InMemoryDirectory, RepairShopDirectory};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {e}")))
}

/// Build the application router from configuration.
pub fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let directory: Arc<dyn RepairShopDirectory> = InMemoryDirectory::from_config(&cfg.directory)?;
    let state = ServerState::new(directory);
    Ok(routes::build_router(state, build_cors(), cfg.server.enable_docs))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg)?;
    let addr = bind_addr(&cfg)?;
    info!(%addr, docs = cfg.server.enable_docs, "starting honey raes server");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
