//! jobpilot - Multi-Agent Job Search Orchestration
//!
//! Coordinates specialized AI agents that collaborate on a job-search
//! workflow: scoring and ranking opportunities against a candidate profile,
//! then optimizing the resume for the top matches. Reasoning is delegated to
//! a local LLM backend (Ollama by default) behind a narrow service trait.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **LLM**: Reasoning service abstraction with an Ollama implementation
//! - **Agent**: Shared memory, the agent execution contract, and the role
//!   specializations (job hunter, resume expert)
//! - **Workflow**: The orchestrator state machine and summary aggregation
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use jobpilot::llm::OllamaClient;
//! use jobpilot::workflow::{Orchestrator, WorkflowTask};
//!
//! #[tokio::main]
//! async fn main() {
//!     let orchestrator = Orchestrator::new(Arc::new(OllamaClient::new()));
//!
//!     # let (user_profile, job_opportunities) = unimplemented!();
//!     let outcome = orchestrator
//!         .execute_workflow("workflow_001", WorkflowTask { user_profile, job_opportunities })
//!         .await;
//!     println!("{}", outcome.status);
//! }
//! ```

pub mod agent;
pub mod core;
pub mod llm;
pub mod workflow;

// Re-export commonly used items
pub use core::{Config, PilotError, Result};
pub use workflow::{Orchestrator, WorkflowTask};
