//! Agent roles and the tasks/outcomes that flow between them
//!
//! Roles are a closed set: adding one is a compile-time exhaustiveness
//! concern, not an open-ended inheritance hierarchy.

use serde::{Deserialize, Serialize};

use crate::core::{
    JobAnalysis, JobOpportunity, PilotError, Result, ResumeOptimization, UserProfile,
};

/// The fixed set of agent roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    JobHunter,
    ResumeExpert,
}

impl AgentRole {
    /// Stable string identifier used in memory records and prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::JobHunter => "job_hunter",
            AgentRole::ResumeExpert => "resume_expert",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unit of work handed to an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentTask {
    /// Score and rank a batch of job opportunities against a profile
    JobSearch {
        user_profile: UserProfile,
        job_opportunities: Vec<JobOpportunity>,
    },
    /// Optimize a resume for one specific job
    ResumeOptimization {
        job: JobOpportunity,
        current_resume: String,
        user_profile: UserProfile,
    },
}

/// The result an agent produces for a task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AgentOutcome {
    JobAnalysis(JobAnalysis),
    ResumeOptimized(ResumeOptimization),
}

impl AgentOutcome {
    /// Extract a job analysis, failing on a role/outcome mismatch
    pub fn into_job_analysis(self) -> Result<JobAnalysis> {
        match self {
            AgentOutcome::JobAnalysis(analysis) => Ok(analysis),
            other => Err(PilotError::contract(format!(
                "expected job analysis outcome, got {:?}",
                outcome_kind(&other)
            ))),
        }
    }

    /// Extract a resume optimization, failing on a role/outcome mismatch
    pub fn into_resume_optimization(self) -> Result<ResumeOptimization> {
        match self {
            AgentOutcome::ResumeOptimized(optimization) => Ok(optimization),
            other => Err(PilotError::contract(format!(
                "expected resume optimization outcome, got {:?}",
                outcome_kind(&other)
            ))),
        }
    }
}

fn outcome_kind(outcome: &AgentOutcome) -> &'static str {
    match outcome {
        AgentOutcome::JobAnalysis(_) => "job_analysis",
        AgentOutcome::ResumeOptimized(_) => "resume_optimized",
    }
}
