//! LLM module - reasoning service integrations
//!
//! Provides the reasoning service abstraction with Ollama as the primary
//! backend.

pub mod ollama;
pub mod traits;

pub use ollama::OllamaClient;
pub use traits::{CompleteOptions, ReasoningService};
