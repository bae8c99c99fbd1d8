//! Request and response types for the alerts count API.

use serde::{Deserialize, Serialize};

/// Alerts count request body, in the upstream's field naming.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertCountRequest {
    #[serde(rename = "Type")]
    pub alert_type: String,
    #[serde(rename = "View")]
    pub view: String,
    #[serde(rename = "ClusterID")]
    pub cluster_id: Vec<String>,
    #[serde(rename = "WorkspaceID")]
    pub workspace_id: i64,
    #[serde(rename = "Namespace")]
    pub namespace: Vec<String>,
    #[serde(rename = "Filters")]
    pub filters: Vec<String>,
    #[serde(rename = "FromTime")]
    pub from_time: i64,
    #[serde(rename = "ToTime")]
    pub to_time: i64,
    #[serde(rename = "LogType")]
    pub log_type: String,
    #[serde(rename = "Search")]
    pub search: String,
    #[serde(rename = "WorkloadType")]
    pub workload_type: Vec<String>,
    #[serde(rename = "WorkloadName")]
    pub workload_name: Vec<String>,
}

/// Outcome of a completed alerts count exchange, whatever its status.
#[derive(Debug, Clone, Serialize)]
pub struct AlertCountReport {
    pub status_code: u16,
    pub success: bool,
    /// Parsed body, present only on 200
    pub data: Option<serde_json::Value>,
    /// Raw body, present only on non-200
    pub error: Option<String>,
    pub request_payload: AlertCountRequest,
    /// Redacted token, e.g. `Bearer abcdefgh...`
    pub token_used: String,
}
