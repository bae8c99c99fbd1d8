//! MCP tool implementations.
//!
//! Each tool is implemented in its own module for better organization.

mod common;
mod echo;
mod get_counts;

// Re-export tool functions
pub use common::Authorization;
pub use echo::echo;
pub use get_counts::get_counts;
