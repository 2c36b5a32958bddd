//! Reasoning service trait for abstracting LLM backends
//!
//! The orchestration core only ever sees this boundary; Ollama is the
//! default implementation, and tests substitute scripted stubs.

use async_trait::async_trait;

use crate::core::{Message, Result};

/// Options for a completion request
#[derive(Debug, Clone, Default)]
pub struct CompleteOptions {
    /// Temperature for sampling (near-zero for scoring, higher for
    /// generative strategy text)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl CompleteOptions {
    /// Options tuned for near-deterministic scoring/classification calls
    pub fn scoring() -> Self {
        Self {
            temperature: Some(0.1),
            max_tokens: None,
        }
    }

    /// Options with an explicit temperature
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature: Some(temperature),
            max_tokens: None,
        }
    }
}

/// Trait for reasoning service backends
///
/// The service is opaque, fallible, and latency-bearing. Transport-level
/// failures propagate as errors; a malformed-but-delivered response is the
/// caller's problem (see the parse fallbacks in the role agents).
#[async_trait]
pub trait ReasoningService: Send + Sync {
    /// Submit a conversation and return the raw text response
    async fn complete(
        &self,
        model: &str,
        messages: &[Message],
        options: CompleteOptions,
    ) -> Result<String>;

    /// Check if a model is available
    async fn is_model_available(&self, model: &str) -> Result<bool>;

    /// List available models
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Get the provider name
    fn name(&self) -> &str;
}
