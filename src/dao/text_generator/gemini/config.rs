use std::time::Duration;

use thiserror::Error;

const DEFAULT_MODEL: &str = "gemini-1.5-pro";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failures while reading the Gemini configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeminiConfigError {
    /// Required environment variable is missing.
    #[error("missing Gemini environment variable `{var}`")]
    MissingEnvVar {
        /// Name of the missing variable.
        var: &'static str,
    },
    /// The timeout variable is not a positive whole number of seconds.
    #[error("invalid `GEMINI_TIMEOUT_SECS` value `{value}`")]
    InvalidTimeout {
        /// Raw value read from the environment.
        value: String,
    },
}

/// Runtime configuration describing how to reach the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Key sent in the `x-goog-api-key` header.
    pub api_key: String,
    /// Model name inserted in the endpoint path.
    pub model: String,
    /// API root, without the `/v1beta` suffix.
    pub base_url: String,
    /// Whole-request timeout applied by the HTTP client.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Construct a configuration for `api_key` using the default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Target a different API root (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a configuration by reading the expected environment variables.
    pub fn from_env() -> Result<Self, GeminiConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Blank values count as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GeminiConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = var("GEMINI_API_KEY").ok_or(GeminiConfigError::MissingEnvVar {
            var: "GEMINI_API_KEY",
        })?;

        let mut config = Self::new(api_key);

        if let Some(model) = var("GEMINI_MODEL") {
            config.model = model.trim().to_string();
        }
        if let Some(base_url) = var("GEMINI_BASE_URL") {
            config = config.with_base_url(base_url.trim());
        }
        if let Some(value) = var("GEMINI_TIMEOUT_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(GeminiConfigError::InvalidTimeout { value })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
