//! End-to-end workflow tests
//!
//! Runs the full orchestrator pipeline against scripted reasoning-service
//! stubs: the happy path, the parse-fallback path, and a mid-workflow
//! service failure.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use jobpilot::agent::AgentRole;
use jobpilot::core::{
    JobOpportunity, Message, PilotError, Result, UserProfile, WorkflowStatus, WorkflowStatusReport,
};
use jobpilot::llm::{CompleteOptions, ReasoningService};
use jobpilot::workflow::{Orchestrator, WorkflowTask};
use jobpilot::Config;

/// Scripted backend: answers every prompt kind deterministically, with a
/// switch to fail the resume-optimization stage.
struct ScriptedService {
    fit_scores: HashMap<String, String>,
    fail_on_optimize: bool,
}

impl ScriptedService {
    fn new(fit_scores: &[(&str, &str)]) -> Self {
        Self {
            fit_scores: fit_scores
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            fail_on_optimize: false,
        }
    }

    fn failing_on_optimize() -> Self {
        Self {
            fit_scores: HashMap::new(),
            fail_on_optimize: true,
        }
    }
}

#[async_trait]
impl ReasoningService for ScriptedService {
    async fn complete(
        &self,
        _model: &str,
        messages: &[Message],
        _options: CompleteOptions,
    ) -> Result<String> {
        let prompt = &messages.last().unwrap().content;

        if prompt.contains("Think through this step by step") {
            return Ok("1. Objective: help the candidate. 2. ...".to_string());
        }
        if prompt.contains("Analyze the job fit") {
            for (title, score) in &self.fit_scores {
                if prompt.contains(title.as_str()) {
                    return Ok(score.clone());
                }
            }
            return Ok("0.75".to_string());
        }
        if prompt.contains("application strategy") {
            return Ok(
                r#"{"highlights":["ML projects"],"timing":"immediate","followup":"1 week","networking":["conference"]}"#
                    .to_string(),
            );
        }
        if prompt.contains("Return the complete optimized resume") {
            if self.fail_on_optimize {
                return Err(PilotError::reasoning("connection reset by peer"));
            }
            return Ok("Jane Doe\nEngineer with Python, Machine Learning, SQL".to_string());
        }
        if prompt.contains("ATS (Applicant Tracking System) compatibility") {
            return Ok("0.8".to_string());
        }
        if prompt.contains("suggest 3-5 additional improvements") {
            return Ok(r#"["Add metrics to achievements", "Shorten the summary"]"#.to_string());
        }

        Ok(String::new())
    }

    async fn is_model_available(&self, _model: &str) -> Result<bool> {
        Ok(true)
    }

    async fn list_models(&self) -> Result<Vec<String>> {
        Ok(vec!["test-model".to_string()])
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

fn profile() -> UserProfile {
    UserProfile {
        skills: vec![
            "Python".to_string(),
            "Machine Learning".to_string(),
            "SQL".to_string(),
        ],
        experience: "5 years software development".to_string(),
        education: "BS Computer Science".to_string(),
        preferences: HashMap::new(),
        current_resume: "Jane Doe\nSoftware Engineer".to_string(),
    }
}

fn job(id: &str, title: &str, requirements: &[&str]) -> JobOpportunity {
    JobOpportunity {
        id: id.to_string(),
        title: title.to_string(),
        company: "TechCorp".to_string(),
        description: "An exciting role".to_string(),
        requirements: requirements.iter().map(|s| s.to_string()).collect(),
        salary_range: Some("120k-150k".to_string()),
        location: "Remote".to_string(),
        fit_score: None,
    }
}

fn sample_task() -> WorkflowTask {
    WorkflowTask {
        user_profile: profile(),
        job_opportunities: vec![
            job("1", "Senior ML Engineer", &["Python", "Machine Learning"]),
            job("2", "Full Stack Developer", &["Python", "React"]),
        ],
    }
}

#[tokio::test]
async fn test_workflow_completes_end_to_end() {
    let service = ScriptedService::new(&[
        ("Senior ML Engineer", "0.9"),
        ("Full Stack Developer", "0.65"),
    ]);
    let orchestrator = Orchestrator::with_config(Arc::new(service), Config::default());

    let outcome = orchestrator.execute_workflow("wf_1", sample_task()).await;

    assert_eq!(outcome.status, WorkflowStatus::Completed);
    assert!(outcome.error.is_none());

    let analysis = outcome.job_analysis.unwrap();
    assert_eq!(analysis.scored_opportunities.len(), 2);
    // Sorted descending by fit score
    assert_eq!(analysis.scored_opportunities[0].fit_score, 0.9);
    assert_eq!(
        analysis.scored_opportunities[0].job.title,
        "Senior ML Engineer"
    );

    // Only 2 jobs exist, so at most 2 optimizations despite the top-3 bound
    let optimizations = outcome.resume_optimizations.unwrap();
    assert_eq!(optimizations.len(), 2);
    // Joined in scored order
    assert_eq!(optimizations[0].job.title, "Senior ML Engineer");

    let summary = outcome.summary.unwrap();
    assert_eq!(summary.total_jobs_analyzed, 2);
    assert_eq!(summary.high_fit_jobs, 1);
    assert_eq!(summary.resumes_optimized, 2);
    assert!((summary.avg_ats_score - 0.8).abs() < 1e-9);
    assert_eq!(summary.top_opportunity.unwrap().title, "Senior ML Engineer");

    // The record reflects the completed run
    match orchestrator.get_workflow_status("wf_1") {
        WorkflowStatusReport::Known(record) => {
            assert_eq!(record.status, WorkflowStatus::Completed);
            assert_eq!(record.current_step, 2);
            assert!(record.error.is_none());
        }
        WorkflowStatusReport::NotFound => panic!("workflow should be registered"),
    }
}

#[tokio::test]
async fn test_service_failure_marks_workflow_failed() {
    let service = ScriptedService::failing_on_optimize();
    let orchestrator = Orchestrator::with_config(Arc::new(service), Config::default());

    let outcome = orchestrator.execute_workflow("wf_fail", sample_task()).await;

    assert_eq!(outcome.status, WorkflowStatus::Failed);
    let error = outcome.error.expect("failed workflow carries an error");
    assert!(!error.is_empty());
    assert!(outcome.job_analysis.is_none());
    assert!(outcome.summary.is_none());

    // The status query reports the failure afterwards
    match orchestrator.get_workflow_status("wf_fail") {
        WorkflowStatusReport::Known(record) => {
            assert_eq!(record.status, WorkflowStatus::Failed);
            assert!(record.error.is_some());
            // Job analysis succeeded before the failing stage
            assert_eq!(record.current_step, 1);
        }
        WorkflowStatusReport::NotFound => panic!("workflow should be registered"),
    }
}

#[tokio::test]
async fn test_workflow_populates_shared_memory() {
    let service = ScriptedService::new(&[]);
    let orchestrator = Orchestrator::with_config(Arc::new(service), Config::default());

    orchestrator.execute_workflow("wf_mem", sample_task()).await;

    let memory = orchestrator.memory();
    // One job-hunter interaction plus one per optimized resume
    let hunter = memory.relevant_context(AgentRole::JobHunter, "");
    assert_eq!(hunter.recent_interactions.len(), 1);
    let expert = memory.relevant_context(AgentRole::ResumeExpert, "");
    assert_eq!(expert.recent_interactions.len(), 2);
}

#[tokio::test]
async fn test_workflows_are_isolated_by_id() {
    let service = ScriptedService::new(&[]);
    let orchestrator = Orchestrator::with_config(Arc::new(service), Config::default());

    orchestrator.execute_workflow("wf_a", sample_task()).await;
    orchestrator.execute_workflow("wf_b", sample_task()).await;

    assert!(matches!(
        orchestrator.get_workflow_status("wf_a"),
        WorkflowStatusReport::Known(_)
    ));
    assert!(matches!(
        orchestrator.get_workflow_status("wf_b"),
        WorkflowStatusReport::Known(_)
    ));
    assert!(matches!(
        orchestrator.get_workflow_status("wf_c"),
        WorkflowStatusReport::NotFound
    ));
}
