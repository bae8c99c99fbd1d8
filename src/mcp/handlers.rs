//! MCP server handlers.
//!
//! This module contains the MCP server startup logic.

use anyhow::{bail, Context, Result};
use axum::Router;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::api::AlertsClient;
use crate::config::ServerConfig;

use super::server::EchoMcpServer;

/// Run the MCP server over streamable HTTP until shutdown.
pub async fn run_mcp_server(config: ServerConfig) -> Result<()> {
    info!("🔧 Starting Echo MCP Tool Server...");
    info!("📝 Streamable HTTP mode (using rmcp)");

    let path = mount_path(&config.path)?;
    let router = http_router(&config)?;
    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;

    info!("✅ MCP tool server started");
    info!(
        "🔗 Ready for MCP client connections at http://{}{}",
        config.bind_address, path
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("MCP HTTP server error: {:?}", e);
            anyhow::anyhow!("MCP HTTP server error: {:?}", e)
        })?;

    info!("MCP server shutting down");
    Ok(())
}

/// Normalize a configured endpoint path to `/segment[/segment...]`.
///
/// Empty means the root; leading and trailing slashes are optional. Route
/// syntax characters are rejected.
pub fn mount_path(path: &str) -> Result<String> {
    let path = path.trim();
    if path.contains(['*', '{', '}']) {
        bail!("Invalid MCP path {:?}: must not contain '*', '{{' or '}}'", path);
    }

    Ok(format!("/{}", path.trim_matches('/')))
}

/// Build the axum router serving MCP over streamable HTTP at `config.path`.
pub fn http_router(config: &ServerConfig) -> Result<Router> {
    let path = mount_path(&config.path)?;
    let alerts = AlertsClient::new(&config.alerts)?;

    let service = StreamableHttpService::new(
        move || Ok(EchoMcpServer::new(alerts.clone())),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    // axum refuses to nest at the root
    let router = if path == "/" {
        Router::new().fallback_service(service)
    } else {
        Router::new().nest_service(&path, service)
    };

    Ok(router.layer(TraceLayer::new_for_http()))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
