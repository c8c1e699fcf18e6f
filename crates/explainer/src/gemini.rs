//! # Gemini Backend
//!
//! Calls the Generative Language `generateContent` endpoint for one model.
//! One backend is created per model so the explainer can fall through the
//! model list in order.
//!
//! Only plain text generation is used: a single user turn in, the first
//! text part of the first candidate out.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::backend::ExplanationBackend;
use crate::error::{ExplainerError, Result};

/// Base URL for the Gemini API
pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Marker the API puts in the body when the key is bad
const INVALID_KEY_MARKER: &str = "API_KEY_INVALID";

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<ResponseCandidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    #[serde(default)]
    details: Vec<serde_json::Value>,
}

// ============================================================================
// Backend Implementation
// ============================================================================

/// One Gemini model reached over HTTP
pub struct GeminiBackend {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: API_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Point the backend at another host (tests, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Share one HTTP connection pool between several models
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn build_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![TextPart {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }

    /// First non-empty text part of the first candidate
    fn extract_text(response: &GeminiResponse) -> Result<String> {
        if let Some(error) = &response.error {
            return Err(ExplainerError::InvalidResponse(error.message.clone()));
        }

        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.iter().find_map(|p| p.text.as_deref()))
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ExplainerError::InvalidResponse("no text in response".to_string()))
    }

    fn map_api_error(&self, status: u16, body: &str) -> ExplainerError {
        let parsed = serde_json::from_str::<GeminiResponse>(body)
            .ok()
            .and_then(|r| r.error);
        let message = parsed
            .as_ref()
            .map_or_else(|| body.to_string(), |e| e.message.clone());
        let invalid_key = body.contains(INVALID_KEY_MARKER)
            || parsed.as_ref().is_some_and(|e| {
                e.details
                    .iter()
                    .any(|d| d.to_string().contains(INVALID_KEY_MARKER))
            });

        match status {
            400 | 401 | 403 if invalid_key => ExplainerError::InvalidCredential {
                backend: self.model.clone(),
                message,
            },
            _ => ExplainerError::Http {
                backend: self.model.clone(),
                status,
                message,
            },
        }
    }
}

#[async_trait]
impl ExplanationBackend for GeminiBackend {
    fn name(&self) -> &str {
        &self.model
    }

    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!("Sending explanation request to Gemini");

        let response = self
            .client
            .post(self.build_url())
            .json(&Self::build_request(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = %status, "Gemini API error");
            return Err(self.map_api_error(status.as_u16(), &body));
        }

        let parsed: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| ExplainerError::InvalidResponse(format!("undecodable body: {e}")))?;
        Self::extract_text(&parsed)
    }
}
