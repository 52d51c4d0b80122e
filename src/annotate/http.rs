//! Minimal JSON lookup client shared by the frequency and media services.
//!
//! Both services answer `GET {endpoint}?word=…&lang=…` with a small JSON
//! object; only the response shape differs.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::Language;

/// Errors from an external lookup service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("service request timed out")]
    Timeout,

    /// Non-success HTTP status.
    #[error("service returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("failed to parse service response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ServiceError::Timeout
        } else {
            ServiceError::Request(e.to_string())
        }
    }
}

/// A configured lookup endpoint.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LookupClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query the endpoint for `word` and decode the JSON body as `T`.
    pub async fn lookup<T: DeserializeOwned>(
        &self,
        word: &str,
        language: Language,
    ) -> Result<T, ServiceError> {
        let mut req = self
            .client
            .get(&self.endpoint)
            .query(&[("word", word), ("lang", language.code())]);

        if let Some(key) = self.api_key.as_deref() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::Parse(e.to_string()))
    }
}
