//! Workflow module - orchestration and result aggregation
//!
//! Sequences the agents, tracks workflow records, and summarizes results.

pub mod orchestrator;
pub mod summary;

pub use orchestrator::{Orchestrator, WorkflowTask};
pub use summary::summarize;
