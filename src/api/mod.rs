//! HTTP client for the alerts count API used by the `get_counts` tool.

mod http;
mod types;

pub use types::{AlertCountReport, AlertCountRequest};

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::AlertsConfig;

/// Number of token characters kept when reporting which token was used
const TOKEN_PREVIEW_CHARS: usize = 8;

/// Failures that prevented an HTTP exchange from completing.
#[derive(Debug, Error)]
pub enum AlertsError {
    #[error("Request timeout - API took too long to respond")]
    Timeout,
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl From<reqwest::Error> for AlertsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AlertsError::Timeout
        } else {
            AlertsError::Request(err)
        }
    }
}

/// Alerts API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct AlertsClient {
    client: Client,
    url: String,
    tenant_id: String,
    /// End-to-end budget for one `get_counts` call, retries included
    timeout: Duration,
}

impl AlertsClient {
    pub fn new(config: &AlertsConfig) -> Result<Self, AlertsError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(AlertsError::Client)?;

        Ok(Self {
            client,
            url: config.url.clone(),
            tenant_id: config.tenant_id.clone(),
            timeout: config.timeout(),
        })
    }

    /// POST the request with the caller's bearer token.
    ///
    /// The whole exchange, including retries and reading the body, is
    /// bounded by the configured timeout.
    pub async fn get_counts(
        &self,
        access_token: &str,
        request: AlertCountRequest,
    ) -> Result<AlertCountReport, AlertsError> {
        info!("📡 Requesting alert counts from {}", self.url);

        tokio::time::timeout(self.timeout, self.exchange(access_token, request))
            .await
            .map_err(|_| AlertsError::Timeout)?
    }

    async fn exchange(
        &self,
        access_token: &str,
        request: AlertCountRequest,
    ) -> Result<AlertCountReport, AlertsError> {
        let response = http::send_with_retry(|| {
            self.client
                .post(&self.url)
                .bearer_auth(access_token)
                .header("Accept", "*/*")
                .header("X-Tenant-Id", &self.tenant_id)
                .json(&request)
        })
        .await?;

        let status = response.status();
        debug!("Alerts API responded with {}", status);

        let body = response.text().await?;
        let (data, error) = if status == StatusCode::OK {
            match serde_json::from_str::<serde_json::Value>(&body) {
                Ok(data) => (Some(data), None),
                Err(e) => {
                    warn!("Alerts API returned a non-JSON body: {}", e);
                    (None, Some(body))
                }
            }
        } else {
            (None, Some(body))
        };

        Ok(AlertCountReport {
            status_code: status.as_u16(),
            success: data.is_some(),
            data,
            error,
            request_payload: request,
            token_used: redact_token(access_token),
        })
    }
}

/// Render a token for display, keeping only its first few characters.
pub fn redact_token(token: &str) -> String {
    let preview: String = token.chars().take(TOKEN_PREVIEW_CHARS).collect();
    format!("Bearer {}...", preview)
}
