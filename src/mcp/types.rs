//! MCP tool parameter types.
//!
//! These types are used with rmcp's `Parameters<T>` wrapper for automatic
//! deserialization and JSON schema generation.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::api::AlertCountRequest;

/// Parameters for the echo tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct EchoArgs {
    /// The message to echo back
    pub message: String,
    /// Number of times to repeat the message (1-10, default: 1)
    #[serde(default)]
    #[schemars(range(min = 1, max = 10))]
    pub repeat: Option<i64>,
}

/// Parameters for the get_counts tool
///
/// Every field is optional; omitted or null fields take the defaults below.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct GetCountsArgs {
    /// Alert type (default: "Kubearmor")
    #[serde(default, rename = "type")]
    pub alert_type: Option<String>,
    /// View type (default: "List")
    #[serde(default)]
    pub view: Option<String>,
    /// List of cluster IDs (default: empty list)
    #[serde(default)]
    pub cluster_id: Option<Vec<String>>,
    /// Workspace ID (default: 11)
    #[serde(default)]
    pub workspace_id: Option<i64>,
    /// List of namespaces (default: empty list)
    #[serde(default)]
    pub namespace: Option<Vec<String>>,
    /// List of filters (default: empty list)
    #[serde(default)]
    pub filters: Option<Vec<String>>,
    /// Start time as a unix timestamp (default: 1730399520)
    #[serde(default)]
    pub from_time: Option<i64>,
    /// End time as a unix timestamp (default: 1751518034)
    #[serde(default)]
    pub to_time: Option<i64>,
    /// Log type (default: "active")
    #[serde(default)]
    pub log_type: Option<String>,
    /// Search query (default: empty string)
    #[serde(default)]
    pub search: Option<String>,
    /// List of workload types (default: empty list)
    #[serde(default)]
    pub workload_type: Option<Vec<String>>,
    /// List of workload names (default: empty list)
    #[serde(default)]
    pub workload_name: Option<Vec<String>>,
}

impl GetCountsArgs {
    /// Fill in defaults and build the upstream request body.
    pub fn into_request(self) -> AlertCountRequest {
        AlertCountRequest {
            alert_type: self.alert_type.unwrap_or_else(|| "Kubearmor".to_string()),
            view: self.view.unwrap_or_else(|| "List".to_string()),
            cluster_id: self.cluster_id.unwrap_or_default(),
            workspace_id: self.workspace_id.unwrap_or(11),
            namespace: self.namespace.unwrap_or_default(),
            filters: self.filters.unwrap_or_default(),
            from_time: self.from_time.unwrap_or(1730399520),
            to_time: self.to_time.unwrap_or(1751518034),
            log_type: self.log_type.unwrap_or_else(|| "active".to_string()),
            search: self.search.unwrap_or_default(),
            workload_type: self.workload_type.unwrap_or_default(),
            workload_name: self.workload_name.unwrap_or_default(),
        }
    }
}
