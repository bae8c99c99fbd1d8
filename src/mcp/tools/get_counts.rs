//! Alert counts tool implementation.

use rmcp::{model::*, ErrorData as McpError};
use tracing::warn;

use crate::api::AlertsClient;
use crate::mcp::types::GetCountsArgs;

use super::common::{tool_error, Authorization};

/// Fetch alert counts on behalf of the caller's bearer token
pub async fn get_counts(
    client: &AlertsClient,
    authorization: Authorization,
    args: GetCountsArgs,
) -> Result<CallToolResult, McpError> {
    let Authorization::Bearer(token) = authorization else {
        return Ok(tool_error("No Bearer token found in request headers"));
    };

    match client.get_counts(&token, args.into_request()).await {
        Ok(report) => {
            let text = serde_json::to_string_pretty(&report)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
        Err(e) => {
            warn!("Alerts request failed: {}", e);
            Ok(tool_error(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AlertsConfig;

    fn unreachable_client() -> AlertsClient {
        // Port 9 (discard) on loopback; never contacted by these tests
        AlertsClient::new(&AlertsConfig {
            url: "http://127.0.0.1:9/count".to_string(),
            tenant_id: "11".to_string(),
            timeout_secs: 1,
        })
        .unwrap()
    }

    fn text_of(result: &CallToolResult) -> &str {
        result.content[0].as_text().map(|t| t.text.as_str()).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_short_circuits() {
        let result = get_counts(
            &unreachable_client(),
            Authorization::Missing,
            GetCountsArgs::default(),
        )
        .await
        .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "No Bearer token found in request headers");
    }

    #[tokio::test]
    async fn test_non_bearer_short_circuits() {
        let result = get_counts(
            &unreachable_client(),
            Authorization::NonBearer,
            GetCountsArgs::default(),
        )
        .await
        .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_transport_failure_is_tool_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/count", listener.local_addr().unwrap());
        drop(listener);
        let client = AlertsClient::new(&AlertsConfig {
            url,
            tenant_id: "11".to_string(),
            timeout_secs: 5,
        })
        .unwrap();

        let result = get_counts(
            &client,
            Authorization::Bearer("tok".to_string()),
            GetCountsArgs::default(),
        )
        .await
        .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).starts_with("Request failed:"));
    }
}
