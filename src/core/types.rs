//! Shared types used across jobpilot modules
//!
//! Contains chat message structures, the job-search data model, and the
//! workflow records produced by the orchestrator.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A message in a reasoning-service conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender (user, assistant, system)
    pub role: String,
    /// Content of the message
    pub content: String,
}

impl Message {
    /// Create a new user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create a new assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    /// Create a new system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// A job opening sourced from an external feed
///
/// Read-only within the core; `fit_score` is assigned once during scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOpportunity {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary_range: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_score: Option<f64>,
}

/// Candidate profile driving a workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub experience: String,
    pub education: String,
    #[serde(default)]
    pub preferences: HashMap<String, serde_json::Value>,
    pub current_resume: String,
}

/// Application priority derived from the fit score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Classify a fit score against the fixed thresholds
    pub fn from_fit_score(score: f64) -> Self {
        if score > 0.8 {
            Priority::High
        } else if score > 0.6 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Per-job application strategy generated by the job hunter
///
/// Field defaults double as the fallback when the reasoning service returns
/// something that does not parse as the requested JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStrategy {
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default = "ApplicationStrategy::default_timing")]
    pub timing: String,
    #[serde(default = "ApplicationStrategy::default_followup")]
    pub followup: String,
    #[serde(default)]
    pub networking: Vec<String>,
}

impl ApplicationStrategy {
    fn default_timing() -> String {
        "immediate".to_string()
    }

    fn default_followup() -> String {
        "1 week".to_string()
    }
}

impl Default for ApplicationStrategy {
    fn default() -> Self {
        Self {
            highlights: Vec::new(),
            timing: Self::default_timing(),
            followup: Self::default_followup(),
            networking: Vec::new(),
        }
    }
}

/// A job opportunity after scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredOpportunity {
    pub job: JobOpportunity,
    pub fit_score: f64,
    pub application_strategy: ApplicationStrategy,
    pub priority: Priority,
}

/// Output of the job-hunter stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAnalysis {
    /// Sorted descending by fit score
    pub scored_opportunities: Vec<ScoredOpportunity>,
    pub recommendations: Vec<String>,
    pub reasoning: String,
}

/// Keyword coverage of an optimized resume against a job posting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub matched_count: usize,
    pub missing_count: usize,
    pub match_percentage: f64,
    /// First 10 missing keywords, in order of first appearance in the
    /// job requirements then the job description
    pub top_missing: Vec<String>,
}

/// Output of one resume-expert run against a single job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeOptimization {
    pub optimized_resume: String,
    pub ats_score: f64,
    pub improvements: Vec<String>,
    pub keyword_optimization: KeywordAnalysis,
    pub reasoning: String,
}

/// A resume optimization paired with the job it targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeResult {
    pub job: JobOpportunity,
    pub optimization: ResumeOptimization,
}

/// Lifecycle state of a workflow
///
/// Transitions are monotonic: running → completed or running → failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Running,
    Completed,
    Failed,
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowStatus::Running => write!(f, "running"),
            WorkflowStatus::Completed => write!(f, "completed"),
            WorkflowStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Tracked state of one workflow run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRecord {
    pub id: String,
    pub status: WorkflowStatus,
    /// 0 = not started, 1 = job analysis done, 2 = resume optimization done
    pub current_step: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_analysis: Option<JobAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_optimizations: Option<Vec<ResumeResult>>,
}

impl WorkflowRecord {
    /// Create a fresh record in the running state
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: WorkflowStatus::Running,
            current_step: 0,
            error: None,
            job_analysis: None,
            resume_optimizations: None,
        }
    }
}

/// Answer to a workflow status query
#[derive(Debug, Clone)]
pub enum WorkflowStatusReport {
    /// Snapshot of a known workflow record
    Known(WorkflowRecord),
    /// The id was never registered with this orchestrator
    NotFound,
}

/// The single best opportunity surfaced in a summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopOpportunity {
    pub title: String,
    pub company: String,
    pub fit_score: f64,
}

/// Aggregated view over a completed workflow's results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub total_jobs_analyzed: usize,
    pub high_fit_jobs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_opportunity: Option<TopOpportunity>,
    pub resumes_optimized: usize,
    pub avg_ats_score: f64,
    pub recommendations: Vec<String>,
}

/// Final payload returned by `execute_workflow`
///
/// Callers must check `status`: a failed workflow is reported here rather
/// than raised through the entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowOutcome {
    pub workflow_id: String,
    pub status: WorkflowStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_analysis: Option<JobAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_optimizations: Option<Vec<ResumeResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<WorkflowSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
