//! The seam between the explainer and a text-generation service.

use async_trait::async_trait;

use crate::error::Result;

/// A service that turns a prompt into a short explanation.
///
/// Implementations must be shareable across tasks; the explainer may be
/// called from many requests at once.
#[async_trait]
pub trait ExplanationBackend: Send + Sync {
    /// Human-readable name used in logs (e.g. the model name)
    fn name(&self) -> &str;

    /// Generate text for the prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}
