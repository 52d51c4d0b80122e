//! Word frequency estimation.
//!
//! [`FrequencyEstimator`] asks an external [`FrequencySource`] when one is
//! configured and silently falls back to [`mock_frequency`] when none is, or
//! when the lookup fails.  The result is always in `[0, 1]`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::FrequencyConfig;
use crate::model::Language;

use super::char_code_sum;
use super::http::{LookupClient, ServiceError};

// ---------------------------------------------------------------------------
// FrequencySource
// ---------------------------------------------------------------------------

/// External word-frequency capability.
#[async_trait]
pub trait FrequencySource: Send + Sync {
    async fn query(&self, word: &str, language: Language) -> Result<f64, ServiceError>;
}

#[derive(Debug, Deserialize)]
struct FrequencyReport {
    #[serde(default)]
    frequency: Option<f64>,
}

/// HTTP frequency service: `GET {endpoint}?word=…&lang=…` → `{"frequency": n}`.
pub struct HttpFrequencySource {
    client: LookupClient,
}

impl HttpFrequencySource {
    pub fn from_config(config: &FrequencyConfig) -> Self {
        Self {
            client: LookupClient::new(
                config.endpoint.clone().unwrap_or_default(),
                config.api_key.clone(),
                config.timeout_secs,
            ),
        }
    }
}

#[async_trait]
impl FrequencySource for HttpFrequencySource {
    /// A missing `frequency` field reads as 0.
    async fn query(&self, word: &str, language: Language) -> Result<f64, ServiceError> {
        let report: FrequencyReport = self.client.lookup(word, language).await?;
        Ok(report.frequency.unwrap_or(0.0))
    }
}

// ---------------------------------------------------------------------------
// FrequencyEstimator
// ---------------------------------------------------------------------------

pub struct FrequencyEstimator {
    source: Option<Arc<dyn FrequencySource>>,
}

impl FrequencyEstimator {
    /// Estimator that only uses the deterministic mock.
    pub fn offline() -> Self {
        Self { source: None }
    }

    pub fn with_source(source: Arc<dyn FrequencySource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    pub fn from_config(config: &FrequencyConfig) -> Self {
        if config.is_available() {
            Self::with_source(Arc::new(HttpFrequencySource::from_config(config)))
        } else {
            log::debug!("frequency service not configured, using mock frequencies");
            Self::offline()
        }
    }

    /// Frequency of `word` in `[0, 1]`.  Never fails.
    pub async fn estimate(&self, word: &str, language: Language) -> f64 {
        log::debug!("getting frequency for {word:?} in {language}");

        let Some(source) = &self.source else {
            return mock_frequency(word);
        };

        match source.query(word, language).await {
            Ok(frequency) if frequency.is_finite() => frequency.clamp(0.0, 1.0),
            Ok(frequency) => {
                log::warn!("frequency service returned {frequency} for {word:?}, using mock");
                mock_frequency(word)
            }
            Err(e) => {
                log::warn!("failed to get word frequency for {word:?}: {e}");
                mock_frequency(word)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Mock
// ---------------------------------------------------------------------------

/// Deterministic stand-in frequency derived from the word's shape.
///
/// Mid-length words (5–8 chars) score highest on length; a code-point
/// checksum adds spread.  Clamped to `[0.01, 0.99]`.
pub fn mock_frequency(word: &str) -> f64 {
    let normalized = word.to_lowercase();
    let len = normalized.chars().count();

    let length_factor = if (5..=8).contains(&len) {
        0.7
    } else if len < 5 {
        0.5 + 0.1 * len as f64
    } else {
        0.9 - 0.05 * (len - 8) as f64
    };

    let random_factor = (char_code_sum(&normalized) % 100) as f64 / 100.0;

    let frequency = (0.7 * length_factor + 0.3 * random_factor).clamp(0.01, 0.99);
    log::debug!("mock frequency for {word:?}: {frequency}");
    frequency
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
