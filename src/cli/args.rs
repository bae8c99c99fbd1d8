use clap::Parser;

use crate::config::{AlertsConfig, ServerConfig};

/// Echo MCP server - demonstration tools over streamable HTTP
#[derive(Parser)]
#[command(name = "echo-mcp-server")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to bind the HTTP transport to
    #[arg(long, env = "MCP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP transport to
    #[arg(short, long, env = "MCP_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path the MCP endpoint is mounted at
    #[arg(long, env = "MCP_PATH", default_value = "/mcp")]
    pub path: String,

    /// Alerts count endpoint used by the get_counts tool
    #[arg(
        long,
        env = "ALERTS_API_URL",
        default_value = "https://cwpp.dev.accuknox.com/monitors/v1/alerts/events/count"
    )]
    pub alerts_url: String,

    /// Tenant sent as X-Tenant-Id to the alerts endpoint
    #[arg(long, env = "ALERTS_TENANT_ID", default_value = "11")]
    pub tenant_id: String,

    /// Timeout for alerts requests, in seconds
    #[arg(long, env = "ALERTS_TIMEOUT_SECS", default_value_t = 30)]
    pub alerts_timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the server configuration from parsed arguments.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_address: format!("{}:{}", self.host, self.port),
            path: self.path.clone(),
            alerts: AlertsConfig {
                url: self.alerts_url.clone(),
                tenant_id: self.tenant_id.clone(),
                timeout_secs: self.alerts_timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["echo-mcp-server"]).unwrap();
        assert!(!cli.verbose);

        let config = cli.server_config();
        assert_eq!(config.bind_address, "127.0.0.1:8000");
        assert_eq!(config.path, "/mcp");
        assert_eq!(config.alerts.tenant_id, "11");
        assert_eq!(config.alerts.timeout_secs, 30);
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["echo-mcp-server", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_custom_address() {
        let cli = Cli::try_parse_from([
            "echo-mcp-server",
            "--host",
            "0.0.0.0",
            "--port",
            "9090",
            "--path",
            "/rpc",
        ])
        .unwrap();
        let config = cli.server_config();
        assert_eq!(config.bind_address, "0.0.0.0:9090");
        assert_eq!(config.path, "/rpc");
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["echo-mcp-server", "--port", "70000"]).is_err());
    }
}
