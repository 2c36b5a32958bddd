//! Agent base contract
//!
//! Every role runs the same four-step pipeline: retrieve memory context,
//! reason over the task, run role-specific logic, write the interaction
//! back to memory. Specialization lives entirely in the system prompt and
//! in `execute_specific`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::agent::memory::AgentMemory;
use crate::agent::role::{AgentOutcome, AgentRole, AgentTask};
use crate::core::{Message, Result};
use crate::llm::{CompleteOptions, ReasoningService};

/// Shared handles every agent needs: the reasoning backend, the memory it
/// reads and writes, and the model identifier for service calls
#[derive(Clone)]
pub struct AgentContext {
    pub service: Arc<dyn ReasoningService>,
    pub memory: Arc<AgentMemory>,
    pub model: String,
}

impl AgentContext {
    /// Create a new agent context
    pub fn new(
        service: Arc<dyn ReasoningService>,
        memory: Arc<AgentMemory>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            service,
            memory,
            model: model.into(),
        }
    }
}

/// Capability trait for the closed set of agent roles
///
/// `execute` and `think` are provided methods; implementors supply the role
/// identity, the system prompt, and the role-specific task logic.
#[async_trait]
pub trait RoleAgent: Send + Sync {
    /// Which role this agent plays
    fn role(&self) -> AgentRole;

    /// System directive describing the agent's persona and goals
    fn system_prompt(&self) -> &str;

    /// Shared execution handles
    fn context(&self) -> &AgentContext;

    /// Role-specific task logic, given the chain-of-thought reasoning trace
    async fn execute_specific(&self, task: &AgentTask, reasoning: &str) -> Result<AgentOutcome>;

    /// Chain-of-thought reasoning over a task plus memory context
    ///
    /// Reasoning-service failures are not caught here; they propagate to the
    /// orchestrator's failure boundary and fail the whole workflow step.
    async fn think(&self, context: &serde_json::Value) -> Result<String> {
        let reasoning_prompt = format!(
            "As a {} agent, analyze the following context and provide your reasoning:\n\n\
             Context: {}\n\n\
             Think through this step by step:\n\
             1. What is the main objective?\n\
             2. What information is most relevant?\n\
             3. What are the potential approaches?\n\
             4. What would be the best strategy?\n\
             5. What are the expected outcomes?\n\n\
             Provide your reasoning in a structured format.",
            self.role(),
            serde_json::to_string_pretty(context)?
        );

        let ctx = self.context();
        ctx.service
            .complete(
                &ctx.model,
                &[
                    Message::system(self.system_prompt()),
                    Message::user(reasoning_prompt),
                ],
                CompleteOptions::scoring(),
            )
            .await
    }

    /// Run the full execution pipeline for one task
    async fn execute(&self, task: AgentTask) -> Result<AgentOutcome> {
        let ctx = self.context();

        let task_snapshot = serde_json::to_value(&task)?;

        // 1. Retrieve relevant context from memory
        let memory_context = ctx
            .memory
            .relevant_context(self.role(), &task_snapshot.to_string());

        // 2. Reason over the task and what memory knows
        let think_input = json!({
            "task": task_snapshot,
            "memory": memory_context,
        });
        let reasoning = self.think(&think_input).await?;

        // 3. Role-specific logic
        let outcome = self.execute_specific(&task, &reasoning).await?;

        // 4. Write the interaction back for later runs
        ctx.memory
            .store_interaction(self.role(), task_snapshot, serde_json::to_value(&outcome)?);

        Ok(outcome)
    }
}

/// Truncate a string to at most `max` characters, respecting char boundaries
pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // Multi-byte safe
        assert_eq!(truncate_chars("héllo", 2), "hé");
    }
}
