use anyhow::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::error::TrackingError;
use crate::models::TrackResponse;
use crate::request::{Credentials, TrackingRequest};
use crate::response::interpret_response;
use crate::transport::{ReqwestTransport, Transport};

/// Production tracking endpoint
pub const UPS_TRACKING_URL: &str = "https://onlinetools.ups.com/rest/Track";

/// Customer integration (test) environment
pub const UPS_TEST_TRACKING_URL: &str = "https://wwwcie.ups.com/rest/Track";

/// Client for the UPS tracking service.
///
/// Holds nothing but credentials, the endpoint and a transport, so one
/// instance can serve any number of concurrent lookups.
#[derive(Clone)]
pub struct TrackingClient {
    credentials: Credentials,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl TrackingClient {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        access_key: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            credentials: Credentials::new(username, password, access_key),
            endpoint: UPS_TRACKING_URL.to_string(),
            transport,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;

        Ok(Self::new(
            config.username.clone(),
            config.password.clone(),
            config.access_key.clone(),
            Arc::new(transport),
        )
        .with_endpoint(config.tracking_url.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(&self, tracking_number: &str) -> TrackingRequest {
        TrackingRequest::activity(&self.credentials, tracking_number)
    }

    /// Look up the activity history of one package.
    ///
    /// Makes exactly one request. A fault envelope or a non-success status
    /// comes back as `CarrierFault` / `CarrierStatus`; activities whose date
    /// or time cannot be parsed keep `timestamp == None`.
    pub async fn track_activity(&self, tracking_number: &str) -> Result<TrackResponse, TrackingError> {
        let request = self.build_request(tracking_number);
        let body = serde_json::to_string(&request).map_err(TrackingError::Serialization)?;

        tracing::debug!("Tracking {} via {}", tracking_number, self.endpoint);

        let reply = self.transport.post_json(&self.endpoint, body).await?;

        interpret_response(&reply)
    }
}

impl std::fmt::Debug for TrackingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingClient")
            .field("username", &self.credentials.username)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
