//! # Explainer
//!
//! Attaches a short natural-language explanation to an Outcome.
//!
//! Backends are tried in order. The first usable answer wins; a rejected
//! API key stops the loop early since every model shares the key. When
//! nothing works the outcome gets a fixed explanation and
//! `is_ai_generated = false`, so this step never fails.

use std::time::Duration;

use tracing::{debug, error, info, instrument, warn};

use engine::Outcome;
use slots::Candidate;

use crate::backend::ExplanationBackend;
use crate::config::ExplainerConfig;
use crate::error::ExplainerError;
use crate::gemini::GeminiBackend;

/// Explanation used when no backend produced one
pub const FALLBACK_EXPLANATION: &str = "This option was recommended based on the highest overlap of participant availability and location preferences. It aims to maximize attendance while keeping travel distance reasonable for the majority of the group.";

/// Text plus where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub text: String,
    pub is_ai_generated: bool,
    /// Backend that produced the text, if any
    pub backend: Option<String>,
}

impl Explanation {
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_EXPLANATION.to_string(),
            is_ai_generated: false,
            backend: None,
        }
    }
}

/// Ordered list of backends with a per-call timeout
pub struct Explainer {
    backends: Vec<Box<dyn ExplanationBackend>>,
    timeout: Duration,
}

impl Explainer {
    /// An explainer with no backends; it always falls back
    pub fn new(timeout: Duration) -> Self {
        Self {
            backends: Vec::new(),
            timeout,
        }
    }

    /// One Gemini backend per configured model, or none without a key
    pub fn from_config(config: &ExplainerConfig) -> Self {
        let mut explainer = Self::new(config.timeout);
        match &config.api_key {
            Some(key) => {
                let client = reqwest::Client::new();
                for model in &config.models {
                    explainer = explainer.with_backend(
                        GeminiBackend::new(key.clone(), model.clone()).with_client(client.clone()),
                    );
                }
            }
            None => warn!("{}", ExplainerError::MissingApiKey),
        }
        explainer
    }

    /// Append a backend to the end of the list
    pub fn with_backend(mut self, backend: impl ExplanationBackend + 'static) -> Self {
        self.backends.push(Box::new(backend));
        self
    }

    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Produce an explanation for an outcome
    #[instrument(skip_all, fields(backends = self.backends.len()))]
    pub async fn explain(&self, outcome: &Outcome) -> Explanation {
        if self.backends.is_empty() {
            debug!("No explanation backends configured, using fallback");
            return Explanation::fallback();
        }

        let prompt = build_prompt(outcome);
        let mut last_error: Option<ExplainerError> = None;

        for backend in &self.backends {
            debug!("Attempting explanation with {}", backend.name());
            let result = match tokio::time::timeout(self.timeout, backend.generate(&prompt)).await
            {
                Ok(result) => result,
                Err(_) => Err(ExplainerError::Timeout(self.timeout)),
            };

            match result {
                Ok(text) if !text.trim().is_empty() => {
                    info!("Explanation generated using {}", backend.name());
                    return Explanation {
                        text: text.trim().to_string(),
                        is_ai_generated: true,
                        backend: Some(backend.name().to_string()),
                    };
                }
                Ok(_) => {
                    warn!("{} returned an empty explanation", backend.name());
                    last_error = Some(ExplainerError::InvalidResponse(
                        "empty explanation".to_string(),
                    ));
                }
                Err(e) => {
                    warn!("{} failed: {}", backend.name(), e);
                    let stop = e.is_invalid_credential();
                    last_error = Some(e);
                    if stop {
                        break;
                    }
                }
            }
        }

        match &last_error {
            Some(e) if e.is_invalid_credential() => {
                error!("API key was rejected; check GEMINI_API_KEY. Using fallback explanation")
            }
            Some(e) if e.is_model_not_found() => warn!(
                "Configured models are not available for this key; is the Generative Language API enabled? Using fallback explanation"
            ),
            _ => error!("All explanation backends failed, using fallback"),
        }
        Explanation::fallback()
    }

    /// Return a copy of the outcome with the explanation attached
    pub async fn annotate(&self, outcome: Outcome) -> Outcome {
        let explanation = self.explain(&outcome).await;
        outcome.with_explanation(explanation.text, explanation.is_ai_generated)
    }
}

impl Default for Explainer {
    fn default() -> Self {
        Self::from_config(&ExplainerConfig::default())
    }
}

/// Prompt describing the best option and its alternatives
pub fn build_prompt(outcome: &Outcome) -> String {
    let best = &outcome.best_option;
    let pros = if best.pros.is_empty() {
        "N/A".to_string()
    } else {
        best.pros.join(", ")
    };
    let alternatives = if outcome.alternatives.is_empty() {
        "None".to_string()
    } else {
        outcome
            .alternatives
            .iter()
            .map(describe_alternative)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "You are an assistant for a group decision support app called 'Common Ground Finder'.
Explain why this specific option was recommended to the group.

Data:
- Title: {title}
- Date/Time: {day}, {start}-{end}
- Venue: {venue}
- Fairness: {fairness}%
- Group Size: {size}
- Pros: {pros}
- Alternatives: {alternatives}

Instructions:
- Clear, neutral, transparent language.
- Mention trade-offs if some people can't make it.
- Strictly under 3 sentences.
- Start with \"This option was recommended because...\"",
        title = best.title,
        day = best.day.name(),
        start = best.window.start,
        end = best.window.end,
        venue = best.location,
        fairness = outcome.fairness_score,
        size = best.attendees.len(),
    )
}

fn describe_alternative(alt: &Candidate) -> String {
    match alt.fairness_score {
        Some(score) => format!("{} ({score}% fairness)", alt.title),
        None => alt.title.clone(),
    }
}
