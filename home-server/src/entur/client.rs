//! Journey planner HTTP client.
//!
//! Sends one GraphQL POST per trip query. There are no retries: a failed
//! call is reported to the caller straight away.

use std::future::Future;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::query::TripQuery;

use super::error::EnturError;
use super::types::JourneyPlannerResponse;

/// Default GraphQL endpoint of the journey planner.
pub const DEFAULT_BASE_URL: &str = "https://api.entur.io/journey-planner/v3/graphql";

/// Header identifying the calling application.
pub const CLIENT_NAME_HEADER: &str = "et-client-name";

/// Source of trip query responses.
///
/// Implemented by the HTTP client and by [`MockPlanner`](super::MockPlanner).
pub trait JourneyPlanner: Send + Sync {
    /// Run a trip query and decode the response.
    fn fetch_trip(
        &self,
        query: &TripQuery,
    ) -> impl Future<Output = Result<JourneyPlannerResponse, EnturError>> + Send;
}

/// Configuration for the journey planner client.
#[derive(Debug, Clone)]
pub struct EnturConfig {
    /// Value sent in the client-name header
    pub client_name: String,
    /// GraphQL endpoint (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds; `None` leaves reqwest's default
    pub timeout_secs: Option<u64>,
}

impl EnturConfig {
    /// Create a new config with the given client name.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }

    /// Set a custom endpoint (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Journey planner API client.
#[derive(Debug, Clone)]
pub struct EnturClient {
    http: reqwest::Client,
    url: String,
}

impl EnturClient {
    /// Create a new client with the given configuration.
    pub fn new(config: EnturConfig) -> Result<Self, EnturError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client_name = HeaderValue::from_str(&config.client_name)
            .map_err(|_| EnturError::InvalidClientName(config.client_name.clone()))?;
        headers.insert(HeaderName::from_static(CLIENT_NAME_HEADER), client_name);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            url: config.base_url,
        })
    }

    /// The endpoint queries are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post_query(&self, query: &TripQuery) -> Result<JourneyPlannerResponse, EnturError> {
        debug!(payload = %query.payload, "calling journey planner");

        let response = self
            .http
            .post(&self.url)
            .body(query.payload.clone())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), body = %body, "journey planner rejected query");
            return Err(EnturError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        debug!(body = %body, "journey planner response");

        serde_json::from_str(&body).map_err(|e| EnturError::decode(&e, &body))
    }
}

impl JourneyPlanner for EnturClient {
    fn fetch_trip(
        &self,
        query: &TripQuery,
    ) -> impl Future<Output = Result<JourneyPlannerResponse, EnturError>> + Send {
        self.post_query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = EnturConfig::new("acme-hometime")
            .with_base_url("http://localhost:8080/graphql")
            .with_timeout(5);

        assert_eq!(config.client_name, "acme-hometime");
        assert_eq!(config.base_url, "http://localhost:8080/graphql");
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn config_defaults() {
        let config = EnturConfig::new("acme-hometime");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn no_timeout_by_default() {
        let config = EnturConfig::new("acme-hometime");
        assert_eq!(config.timeout_secs, None);

        let client = EnturClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn client_creation() {
        let client = EnturClient::new(EnturConfig::new("acme-hometime")).unwrap();
        assert_eq!(client.url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn client_name_must_be_a_header_value() {
        let err = EnturClient::new(EnturConfig::new("line\nbreak")).unwrap_err();
        assert!(matches!(err, EnturError::InvalidClientName(_)));
    }

    // Requests against a live endpoint are covered in tests/entur_client.rs
    // using a local mock server.
}
