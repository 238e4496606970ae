//! HTTP client for the remote scanning service

use super::models::{LogsResponse, ProcessTextRequest, WireDetectionResult};
use super::RemoteDetector;
use crate::config::RemoteConfig;
use crate::detection::DetectionResult;
use crate::domain::{RemoteError, Result, ShieldError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Remote scanning service client
///
/// # Example
///
/// ```no_run
/// use aishield::config::RemoteConfig;
/// use aishield::remote::{HttpRemoteClient, RemoteDetector};
///
/// # async fn example() -> aishield::domain::Result<()> {
/// let client = HttpRemoteClient::new(&RemoteConfig::default())?;
/// let result = client.detect("Call me at 555-123-4567").await?;
/// println!("{}", result.redacted_text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpRemoteClient {
    /// Base URL of the service, without trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Time bound for the connectivity check
    health_timeout: Duration,
}

impl HttpRemoteClient {
    /// Create a new client from the `[remote]` configuration section
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ShieldError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            health_timeout: Duration::from_secs(config.health_timeout_seconds),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch raw audit records from `GET /logs`
    ///
    /// Records are returned untyped; see [`crate::audit`] for normalization.
    pub async fn fetch_logs(&self) -> std::result::Result<Vec<serde_json::Value>, RemoteError> {
        let url = format!("{}/logs", self.base_url);
        tracing::debug!(url = %url, "Fetching audit logs");

        let response = self.client.get(&url).send().await.map_err(map_send_error)?;
        let logs: LogsResponse = read_json(response).await?;
        let records = logs.into_records();

        tracing::info!(records = records.len(), "Fetched audit logs");
        Ok(records)
    }

    /// Connectivity check against `GET /logs` with the short health timeout
    pub async fn health_check(&self) -> std::result::Result<(), RemoteError> {
        let url = format!("{}/logs", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(map_send_error)?;

        check_status(response).await.map(|_| ())
    }
}

#[async_trait]
impl RemoteDetector for HttpRemoteClient {
    async fn detect(&self, text: &str) -> std::result::Result<DetectionResult, RemoteError> {
        let url = format!("{}/process_text", self.base_url);
        tracing::debug!(url = %url, text_len = text.len(), "Sending text to remote service");

        let response = self
            .client
            .post(&url)
            .json(&ProcessTextRequest { text })
            .send()
            .await
            .map_err(map_send_error)?;

        let wire: WireDetectionResult = read_json(response).await?;
        DetectionResult::try_from(wire)
    }
}

fn map_send_error(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Timeout(err.to_string())
    } else {
        RemoteError::ConnectionFailed(err.to_string())
    }
}

async fn check_status(response: Response) -> std::result::Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(RemoteError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> std::result::Result<T, RemoteError> {
    let response = check_status(response).await?;
    let body = response.text().await.map_err(map_send_error)?;

    serde_json::from_str(&body).map_err(|e| RemoteError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = RemoteConfig {
            base_url: "http://localhost:5000/".to_string(),
            ..RemoteConfig::default()
        };
        let client = HttpRemoteClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_connection_error() {
        let config = RemoteConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_seconds: 2,
            ..RemoteConfig::default()
        };
        let client = HttpRemoteClient::new(&config).unwrap();

        let err = client.detect("hello").await.unwrap_err();
        assert!(matches!(
            err,
            RemoteError::ConnectionFailed(_) | RemoteError::Timeout(_)
        ));
    }
}
