//! Agent module - roles, shared memory, and the execution contract
//!
//! Contains the base pipeline every agent runs plus the two role
//! specializations.

pub mod base;
pub mod job_hunter;
pub mod memory;
pub mod resume_expert;
pub mod role;

pub use base::{AgentContext, RoleAgent};
pub use job_hunter::JobHunterAgent;
pub use memory::{AgentMemory, InteractionRecord, RoleContext};
pub use resume_expert::{analyze_keywords, ResumeExpertAgent};
pub use role::{AgentOutcome, AgentRole, AgentTask};
