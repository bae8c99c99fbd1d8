//! Server configuration.
//!
//! Built once from the command line in `main.rs` and handed to the MCP
//! server by value. Nothing here is mutated after startup.

use std::time::Duration;

/// Configuration for the HTTP transport and the tools it serves.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `host:port` the streamable HTTP transport binds to
    pub bind_address: String,
    /// Path the MCP endpoint is nested under
    pub path: String,
    /// Upstream used by the `get_counts` tool
    pub alerts: AlertsConfig,
}

/// Upstream alerts count API settings.
#[derive(Debug, Clone)]
pub struct AlertsConfig {
    pub url: String,
    pub tenant_id: String,
    pub timeout_secs: u64,
}

impl AlertsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
