//! Common utilities for MCP tools.

use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap};
use rmcp::{
    model::{CallToolResult, Content},
    service::RequestContext,
    RoleServer,
};

/// Error result for tool failures
pub fn tool_error(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Authorization presented with the HTTP request carrying a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    /// `Authorization: Bearer <token>` with a non-empty token
    Bearer(String),
    /// An Authorization header in some other scheme
    NonBearer,
    /// No usable Authorization header
    Missing,
}

impl Authorization {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) else {
            return Authorization::Missing;
        };

        match value.strip_prefix("Bearer ") {
            Some("") => Authorization::Missing,
            Some(token) => Authorization::Bearer(token.to_string()),
            None => Authorization::NonBearer,
        }
    }

    /// Look up the HTTP request parts the streamable HTTP transport attaches
    /// to each call.
    pub fn from_context(context: &RequestContext<RoleServer>) -> Self {
        context
            .extensions
            .get::<Parts>()
            .map(|parts| Self::from_headers(&parts.headers))
            .unwrap_or(Authorization::Missing)
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Authorization::Bearer(_) => "bearer token",
            Authorization::NonBearer => "non-bearer authorization",
            Authorization::Missing => "no authorization",
        }
    }
}
