//! MCP (Model Context Protocol) server implementation using rmcp.
//!
//! The server exposes an `echo` tool and a `get_counts` tool over
//! streamable HTTP.

mod handlers;
mod server;
mod tools;
pub mod types;

// Re-export run_mcp_server from handlers
pub use handlers::run_mcp_server;
