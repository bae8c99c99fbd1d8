//! MCP server implementation.
//!
//! This module contains the EchoMcpServer struct and its tool routing.

use rmcp::{
    handler::server::router::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    service::RequestContext, tool, tool_handler, tool_router, ErrorData as McpError, RoleServer,
    ServerHandler,
};
use tracing::debug;

use crate::api::AlertsClient;

use super::tools::{self, Authorization};
use super::types::*;

/// Echo MCP Server
///
/// One instance is created per session; all fields are cheap clones.
#[derive(Clone)]
pub struct EchoMcpServer {
    tool_router: ToolRouter<Self>,
    alerts: AlertsClient,
}

#[tool_router]
impl EchoMcpServer {
    /// Create a new Echo MCP server
    pub fn new(alerts: AlertsClient) -> Self {
        Self {
            tool_router: Self::tool_router(),
            alerts,
        }
    }

    /// Echo back the input message
    #[tool(
        description = "Echo back the input text. Useful for testing and debugging.\n\nThe message is repeated `repeat` times (1-10, default 1), one copy per line. When repeated more than once the output is prefixed with \"Echo (<repeat>x): \"."
    )]
    fn echo(
        &self,
        Parameters(args): Parameters<EchoArgs>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let authorization = Authorization::from_context(&context);
        debug!(
            "echo called with {} (repeat {:?})",
            authorization.describe(),
            args.repeat
        );
        tools::echo(args)
    }

    /// Get alert counts for the caller's tenant
    #[tool(
        name = "get_counts",
        description = "Get alert counts for different alert types from the alerts API.\n\nThe caller's bearer token (from the HTTP Authorization header) is forwarded upstream. All arguments are optional; the response reports the upstream status code, the parsed data on success, the raw error body otherwise, and the payload that was sent."
    )]
    async fn get_counts(
        &self,
        Parameters(args): Parameters<GetCountsArgs>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let authorization = Authorization::from_context(&context);
        debug!("get_counts called with {}", authorization.describe());
        tools::get_counts(&self.alerts, authorization, args).await
    }
}

#[tool_handler]
impl ServerHandler for EchoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "echo-mcp-server".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Echo MCP Server provides an echo tool for testing and an alert counts tool."
                    .to_string(),
            ),
        }
    }
}
