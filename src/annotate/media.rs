//! Audio / image availability estimation.
//!
//! Unlike frequency, a failing media service is reported to the caller
//! rather than replaced by the mock: an unknown availability must not be
//! stored as a guess.  Without a configured service the deterministic
//! [`mock_availability`] is used.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::MediaConfig;
use crate::model::{Language, MediaAvailability};

use super::char_code_sum;
use super::http::{LookupClient, ServiceError};

// ---------------------------------------------------------------------------
// MediaSource
// ---------------------------------------------------------------------------

/// External media-availability capability.
#[async_trait]
pub trait MediaSource: Send + Sync {
    async fn query(&self, word: &str, language: Language)
        -> Result<MediaAvailability, ServiceError>;
}

#[derive(Debug, Deserialize)]
struct MediaReport {
    #[serde(default)]
    audio: Option<bool>,
    #[serde(default)]
    image: Option<bool>,
}

/// HTTP media service: `GET {endpoint}?word=…&lang=…` → `{"audio": b, "image": b}`.
pub struct HttpMediaSource {
    client: LookupClient,
}

impl HttpMediaSource {
    pub fn from_config(config: &MediaConfig) -> Self {
        Self {
            client: LookupClient::new(
                config.endpoint.clone().unwrap_or_default(),
                None,
                config.timeout_secs,
            ),
        }
    }
}

#[async_trait]
impl MediaSource for HttpMediaSource {
    /// Missing fields read as `false`.
    async fn query(
        &self,
        word: &str,
        language: Language,
    ) -> Result<MediaAvailability, ServiceError> {
        let report: MediaReport = self.client.lookup(word, language).await?;
        Ok(MediaAvailability {
            has_audio: report.audio.unwrap_or(false),
            has_image: report.image.unwrap_or(false),
        })
    }
}

// ---------------------------------------------------------------------------
// MediaEstimator
// ---------------------------------------------------------------------------

pub struct MediaEstimator {
    source: Option<Arc<dyn MediaSource>>,
}

impl MediaEstimator {
    pub fn offline() -> Self {
        Self { source: None }
    }

    pub fn with_source(source: Arc<dyn MediaSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    pub fn from_config(config: &MediaConfig) -> Self {
        if config.is_available() {
            Self::with_source(Arc::new(HttpMediaSource::from_config(config)))
        } else {
            log::debug!("media service not configured, using mock availability");
            Self::offline()
        }
    }

    /// Media availability for `word`; service failures are returned as-is.
    pub async fn estimate(
        &self,
        word: &str,
        language: Language,
    ) -> Result<MediaAvailability, ServiceError> {
        log::debug!("checking media availability for {word:?} in {language}");

        let Some(source) = &self.source else {
            return Ok(mock_availability(word));
        };

        source.query(word, language).await.map_err(|e| {
            log::warn!("media availability check failed for {word:?}: {e}");
            e
        })
    }
}

// ---------------------------------------------------------------------------
// Mock
// ---------------------------------------------------------------------------

/// Length factor of the mock: short words are favoured.
fn length_factor(len: usize) -> f64 {
    if len <= 6 {
        0.8
    } else {
        (16 - len.min(15)) as f64 / 10.0
    }
}

/// Deterministic stand-in availability derived from the word's shape.
pub fn mock_availability(word: &str) -> MediaAvailability {
    let normalized = word.to_lowercase();
    let sum = char_code_sum(&normalized);
    let factor = length_factor(normalized.chars().count());

    let availability = MediaAvailability {
        has_audio: sum % 5 > 1 && factor > 0.7,
        has_image: sum % 7 > 2 && factor > 0.6,
    };
    log::debug!(
        "mock media availability for {word:?}: audio={}, image={}",
        availability.has_audio,
        availability.has_image
    );
    availability
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(MediaAvailability);

    #[async_trait]
    impl MediaSource for FixedSource {
        async fn query(
            &self,
            _word: &str,
            _language: Language,
        ) -> Result<MediaAvailability, ServiceError> {
            Ok(self.0)
        }
    }

    struct FailingSource;

    #[async_trait]
    impl MediaSource for FailingSource {
        async fn query(
            &self,
            _word: &str,
            _language: Language,
        ) -> Result<MediaAvailability, ServiceError> {
            Err(ServiceError::Timeout)
        }
    }

    #[test]
    fn katze_matches_formula() {
        // "katze": 107 + 97 + 116 + 122 + 101 = 543; length 5 → factor 0.8.
        assert_eq!(length_factor(5), 0.8);
        assert_eq!(543 % 5, 3);
        assert_eq!(543 % 7, 4);
        assert_eq!(
            mock_availability("Katze"),
            MediaAvailability {
                has_audio: true,
                has_image: true
            }
        );
    }

    #[test]
    fn length_factor_steps() {
        assert_eq!(length_factor(6), 0.8);
        assert_eq!(length_factor(7), 0.9);
        assert_eq!(length_factor(9), 0.7);
        assert_eq!(length_factor(15), 0.1);
        assert_eq!(length_factor(40), 0.1);
    }

    #[test]
    fn long_words_have_no_audio() {
        // Length 9 → factor 0.7, which is not above the audio threshold.
        for word in ["Schublade", "Schmetterling", "Donaudampfschifffahrt"] {
            assert!(!mock_availability(word).has_audio, "{word}");
        }
    }

    #[test]
    fn mock_is_deterministic() {
        for word in ["Haus", "Hund", "Sonne", "Mond"] {
            assert_eq!(mock_availability(word), mock_availability(word));
            assert_eq!(mock_availability(word), mock_availability(&word.to_uppercase()));
        }
    }

    #[tokio::test]
    async fn offline_estimator_uses_mock() {
        let estimator = MediaEstimator::offline();
        assert_eq!(
            estimator.estimate("Haus", Language::German).await.unwrap(),
            mock_availability("Haus")
        );
    }

    #[tokio::test]
    async fn service_result_is_used() {
        let fixed = MediaAvailability {
            has_audio: false,
            has_image: true,
        };
        let estimator = MediaEstimator::with_source(Arc::new(FixedSource(fixed)));
        assert_eq!(estimator.estimate("Haus", Language::German).await.unwrap(), fixed);
    }

    #[tokio::test]
    async fn service_failure_is_propagated() {
        let estimator = MediaEstimator::with_source(Arc::new(FailingSource));
        let result = estimator.estimate("Haus", Language::German).await;
        assert!(matches!(result, Err(ServiceError::Timeout)));
    }

    #[test]
    fn missing_fields_read_as_false() {
        let report: MediaReport = serde_json::from_str(r#"{"audio": true}"#).unwrap();
        assert_eq!(report.audio, Some(true));
        assert_eq!(report.image, None);
    }
}
