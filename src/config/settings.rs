//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.
//! Credentials may also come from the environment, see
//! [`AppConfig::apply_env_overrides`].

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::model::Language;

// ---------------------------------------------------------------------------
// LlmConfig
// ---------------------------------------------------------------------------

/// Settings for the LLM-backed word-type / gender / syllable annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Whether the LLM is consulted at all.  When disabled every word goes
    /// through the language fallback heuristics.
    pub enabled: bool,
    /// Base URL of an OpenAI-compatible API (e.g. `https://api.openai.com`).
    /// `/v1/chat/completions` is appended to it.
    pub base_url: String,
    /// Full chat-completions URL.  When set it is used as-is and
    /// `base_url` is ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// API key.  `None` or empty means the LLM is unavailable.
    pub api_key: Option<String>,
    /// Model identifier sent to the API.
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Maximum seconds to wait for an LLM response before timing out.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.openai.com".into(),
            endpoint: None,
            api_key: None,
            model: "gpt-4o-mini".into(),
            temperature: 0.2,
            max_tokens: 100,
            timeout_secs: 10,
        }
    }
}

impl LlmConfig {
    /// `true` when enabled with a URL to call and a non-empty credential.
    ///
    /// A missing credential routes straight to the fallback heuristics
    /// without sending a request.
    pub fn is_available(&self) -> bool {
        self.enabled
            && (non_empty(&self.endpoint) || !self.base_url.trim().is_empty())
            && non_empty(&self.api_key)
    }

    /// URL the completion request is POSTed to.
    pub fn completions_url(&self) -> String {
        match self.endpoint.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!(
                "{}/v1/chat/completions",
                self.base_url.trim().trim_end_matches('/')
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// FrequencyConfig
// ---------------------------------------------------------------------------

/// Settings for the external word-frequency service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    /// Full endpoint URL; queried as `GET {endpoint}?word=…&lang=…`.
    pub endpoint: Option<String>,
    /// Bearer token for the service.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            timeout_secs: 5,
        }
    }
}

impl FrequencyConfig {
    /// The service is used only when both endpoint and key are set.
    pub fn is_available(&self) -> bool {
        non_empty(&self.endpoint) && non_empty(&self.api_key)
    }
}

// ---------------------------------------------------------------------------
// MediaConfig
// ---------------------------------------------------------------------------

/// Settings for the external media-availability service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Full endpoint URL; queried as `GET {endpoint}?word=…&lang=…`.
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 5,
        }
    }
}

impl MediaConfig {
    pub fn is_available(&self) -> bool {
        non_empty(&self.endpoint)
    }
}

// ---------------------------------------------------------------------------
// StoreConfig
// ---------------------------------------------------------------------------

/// Location of the JSON record store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// `None` means the platform data directory (`AppPaths::store_file`).
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| AppPaths::new().store_file)
    }
}

// ---------------------------------------------------------------------------
// BatchConfig
// ---------------------------------------------------------------------------

/// Limits applied to batch annotation requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Maximum number of words accepted in one request.
    pub max_words: usize,
    /// Upper bound in seconds on annotating a single word.
    pub annotation_timeout_secs: u64,
    /// Language code used for requests that do not name one.
    pub default_language: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_words: 50,
            annotation_timeout_secs: 30,
            default_language: Language::default().code().into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use word_annotator::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub frequency: FrequencyConfig,
    pub media: MediaConfig,
    pub store: StoreConfig,
    pub batch: BatchConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Overlay credentials and endpoints from the process environment.
    ///
    /// | Variable            | Field                |
    /// |---------------------|----------------------|
    /// | `LLM_API_KEY`       | `llm.api_key`        |
    /// | `LLM_ENDPOINT`      | `llm.endpoint`       |
    /// | `WORDFREQ_API_KEY`  | `frequency.api_key`  |
    /// | `WORDFREQ_ENDPOINT` | `frequency.endpoint` |
    /// | `MEDIA_API_ENDPOINT`| `media.endpoint`     |
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Same as [`apply_env_overrides`](Self::apply_env_overrides) with an
    /// explicit lookup.  Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("LLM_API_KEY") {
            self.llm.api_key = Some(key);
        }
        if let Some(url) = get("LLM_ENDPOINT") {
            self.llm.endpoint = Some(url);
        }
        if let Some(key) = get("WORDFREQ_API_KEY") {
            self.frequency.api_key = Some(key);
        }
        if let Some(url) = get("WORDFREQ_ENDPOINT") {
            self.frequency.endpoint = Some(url);
        }
        if let Some(url) = get("MEDIA_API_ENDPOINT") {
            self.media.endpoint = Some(url);
        }
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
