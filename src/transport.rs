use anyhow::{Context, Result};
use reqwest::Client as HttpClient;
use std::time::Duration;

use crate::error::TrackingError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends a JSON body to the tracking endpoint and hands back the raw reply.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: String) -> Result<String, TrackingError>;
}

pub struct ReqwestTransport {
    http_client: HttpClient,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_client(http_client))
    }

    /// Reuse an already configured client (proxies, custom TLS roots, ...).
    pub fn with_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<String, TrackingError> {
        let request = self
            .http_client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .build()
            .map_err(|e| TrackingError::RequestBuild(Box::new(e)))?;

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| TrackingError::Transport(Box::new(e)))?;

        // UPS reports faults in the body, so the status alone decides nothing.
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TrackingError::ResponseRead(Box::new(e)))?;

        tracing::debug!("UPS replied with HTTP {} ({} bytes)", status, body.len());

        Ok(body)
    }
}
