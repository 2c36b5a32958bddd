//! Shared agent memory
//!
//! Append-only interaction log plus derived per-role context views. This is
//! the sole mechanism by which one agent's past outcomes become visible to
//! another (or to itself on a later run). Appends and reads are serialized
//! behind a mutex so concurrently fanned-out agent calls can share one
//! instance.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::agent::role::AgentRole;

/// One recorded agent interaction
///
/// Records are appended, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub timestamp: SystemTime,
    pub role: AgentRole,
    /// Snapshot of the task the agent was given
    pub context: serde_json::Value,
    /// Snapshot of the result the agent produced
    pub outcome: serde_json::Value,
}

/// Derived read projection for one role
///
/// A value snapshot, not a live view: safe to hold across awaits while other
/// agents keep appending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleContext {
    pub recent_interactions: Vec<InteractionRecord>,
    /// Reserved for future preference learning; empty object until then
    pub preferences: serde_json::Value,
    /// Reserved for future success-pattern learning; empty object until then
    pub success_patterns: serde_json::Value,
}

struct MemoryInner {
    log: VecDeque<InteractionRecord>,
    preferences: HashMap<AgentRole, serde_json::Value>,
    success_patterns: HashMap<AgentRole, serde_json::Value>,
}

/// Process-lifetime memory shared by all agents of one orchestrator
pub struct AgentMemory {
    inner: Mutex<MemoryInner>,
    /// Retention bound on the log; oldest records are evicted past this
    max_history: usize,
    /// How many of the most recent records a context view scans
    context_recall: usize,
}

impl AgentMemory {
    /// Create a memory with the given retention and recall bounds
    pub fn new(max_history: usize, context_recall: usize) -> Self {
        Self {
            inner: Mutex::new(MemoryInner {
                log: VecDeque::new(),
                preferences: HashMap::new(),
                success_patterns: HashMap::new(),
            }),
            max_history,
            context_recall,
        }
    }

    /// Append an interaction record
    pub fn store_interaction(
        &self,
        role: AgentRole,
        context: serde_json::Value,
        outcome: serde_json::Value,
    ) {
        let mut inner = self.inner.lock().expect("memory mutex poisoned");

        inner.log.push_back(InteractionRecord {
            timestamp: SystemTime::now(),
            role,
            context,
            outcome,
        });

        while inner.log.len() > self.max_history {
            inner.log.pop_front();
        }
    }

    /// Build the context view for a role
    ///
    /// Scans the most recent `context_recall` records overall and keeps the
    /// ones matching `role`. `query` is accepted for future relevance
    /// filtering but does not affect the result yet.
    pub fn relevant_context(&self, role: AgentRole, _query: &str) -> RoleContext {
        let inner = self.inner.lock().expect("memory mutex poisoned");

        let start = inner.log.len().saturating_sub(self.context_recall);
        let recent_interactions = inner
            .log
            .iter()
            .skip(start)
            .filter(|record| record.role == role)
            .cloned()
            .collect();

        RoleContext {
            recent_interactions,
            preferences: inner
                .preferences
                .get(&role)
                .cloned()
                .unwrap_or_else(empty_object),
            success_patterns: inner
                .success_patterns
                .get(&role)
                .cloned()
                .unwrap_or_else(empty_object),
        }
    }

    /// Associate preference data with a role (reserved for future learning)
    pub fn set_preferences(&self, role: AgentRole, preferences: serde_json::Value) {
        let mut inner = self.inner.lock().expect("memory mutex poisoned");
        inner.preferences.insert(role, preferences);
    }

    /// Associate success-pattern data with a role (reserved for future learning)
    pub fn set_success_patterns(&self, role: AgentRole, patterns: serde_json::Value) {
        let mut inner = self.inner.lock().expect("memory mutex poisoned");
        inner.success_patterns.insert(role, patterns);
    }

    /// Total records currently retained
    pub fn len(&self) -> usize {
        self.inner.lock().expect("memory mutex poisoned").log.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Default for AgentMemory {
    fn default() -> Self {
        Self::new(500, 50)
    }
}
