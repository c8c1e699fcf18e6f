//! Explainer configuration.
//!
//! Read once from the environment at startup, then passed around by value.

use std::env;
use std::time::Duration;

/// Environment variable holding the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Optional comma-separated override of the model list
pub const MODELS_ENV: &str = "COMMON_GROUND_MODELS";

/// Models tried in order of preference
pub const DEFAULT_MODELS: [&str; 2] = ["gemini-flash-latest", "gemini-1.5-flash"];

/// Per-model request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which models to ask, with which key, for how long
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainerConfig {
    pub api_key: Option<String>,
    pub models: Vec<String>,
    pub timeout: Duration,
}

impl ExplainerConfig {
    /// Configuration without a key; explanations always fall back
    pub fn new() -> Self {
        Self {
            api_key: None,
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read `GEMINI_API_KEY` and `COMMON_GROUND_MODELS`
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.api_key = env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        if let Ok(models) = env::var(MODELS_ENV) {
            let models = parse_model_list(&models);
            if !models.is_empty() {
                config.models = models;
            }
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ExplainerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a comma list, dropping blanks
fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}
