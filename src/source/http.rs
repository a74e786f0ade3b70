//! HTTP catalog client
//!
//! POSTs `{"name": <query>}` to the configured endpoint and expects a JSON
//! array of names back. Any non-success status is an error.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use super::CatalogSource;
use crate::config::RemoteConfig;
use crate::error::SuggestError;

/// Request body sent to the catalog
#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    name: &'a str,
}

/// Async catalog client backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    endpoint: String,
}

impl HttpCatalogSource {
    /// Create a client for `endpoint` with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SuggestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a client from the `[remote]` config section
    ///
    /// Returns an error if the endpoint is blank.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, SuggestError> {
        let endpoint = config.endpoint.trim();
        if endpoint.is_empty() {
            return Err(SuggestError::Config(
                "Missing endpoint. Set 'endpoint' in the [remote] section or pass --endpoint."
                    .to_string(),
            ));
        }

        Self::new(endpoint, Duration::from_millis(config.timeout_ms))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self, name: &str) -> Result<Vec<String>, SuggestError> {
        log::debug!("POST {} name={:?}", self.endpoint, name);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&LookupRequest { name })
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SuggestError::Api { code, message });
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| SuggestError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
