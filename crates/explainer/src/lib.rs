//! Natural-language explanations for recommendations.
//!
//! The engine itself is deterministic and offline. This crate is the
//! optional step after it: given an Outcome, ask a text-generation service
//! why the best option won, and fall back to a fixed sentence when the
//! service is unavailable.
//!
//! ```ignore
//! use explainer::{Explainer, ExplainerConfig};
//!
//! let explainer = Explainer::from_config(&ExplainerConfig::from_env());
//! let outcome = explainer.annotate(outcome).await;
//! println!("{}", outcome.explanation.unwrap_or_default());
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod explainer;
pub mod gemini;

pub use backend::ExplanationBackend;
pub use config::{DEFAULT_MODELS, DEFAULT_TIMEOUT, ExplainerConfig};
pub use error::{ExplainerError, Result};
pub use explainer::{Explainer, Explanation, FALLBACK_EXPLANATION, build_prompt};
pub use gemini::GeminiBackend;
