//! Workflow orchestrator
//!
//! Owns the shared agent memory and the workflow-record table, and runs the
//! fixed two-stage pipeline: score the job market, then optimize the resume
//! for the top matches. The single failure boundary lives here; any error
//! raised by a stage marks the workflow failed instead of propagating out.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::future::try_join_all;

use crate::agent::{
    AgentContext, AgentMemory, AgentTask, JobHunterAgent, ResumeExpertAgent, RoleAgent,
};
use crate::core::{
    Config, JobAnalysis, JobOpportunity, PilotError, Result, ResumeResult, UserProfile,
    WorkflowOutcome, WorkflowRecord, WorkflowStatus, WorkflowStatusReport,
};
use crate::llm::ReasoningService;
use crate::workflow::summary::summarize;

/// Input to a workflow run
#[derive(Debug, Clone)]
pub struct WorkflowTask {
    pub user_profile: UserProfile,
    pub job_opportunities: Vec<JobOpportunity>,
}

/// Central coordinator for the agents and their workflows
///
/// All state (the memory log and the workflow table) lives inside this
/// instance; independent orchestrators do not share anything.
pub struct Orchestrator {
    config: Config,
    memory: Arc<AgentMemory>,
    job_hunter: JobHunterAgent,
    resume_expert: ResumeExpertAgent,
    workflows: Mutex<HashMap<String, WorkflowRecord>>,
}

impl Orchestrator {
    /// Create an orchestrator with configuration from file/env defaults
    pub fn new(service: Arc<dyn ReasoningService>) -> Self {
        Self::with_config(service, Config::load())
    }

    /// Create an orchestrator with explicit configuration
    pub fn with_config(service: Arc<dyn ReasoningService>, config: Config) -> Self {
        let memory = Arc::new(AgentMemory::new(
            config.agent.max_history,
            config.agent.context_recall,
        ));

        let job_hunter = JobHunterAgent::new(
            AgentContext::new(
                service.clone(),
                memory.clone(),
                config.models.reasoning.clone(),
            ),
            config.workflow.recommendation_pool,
        );
        let resume_expert = ResumeExpertAgent::new(AgentContext::new(
            service,
            memory.clone(),
            config.models.reasoning.clone(),
        ));

        Self {
            config,
            memory,
            job_hunter,
            resume_expert,
            workflows: Mutex::new(HashMap::new()),
        }
    }

    /// Shared agent memory (mainly useful for inspection in tests)
    pub fn memory(&self) -> &Arc<AgentMemory> {
        &self.memory
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the two-stage workflow under the given id
    ///
    /// Never returns an error: a failed stage is reported through the
    /// outcome's `status` and `error` fields, and the registered record is
    /// marked failed.
    pub async fn execute_workflow(&self, workflow_id: &str, task: WorkflowTask) -> WorkflowOutcome {
        self.register_workflow(workflow_id);

        match self.run_stages(workflow_id, task).await {
            Ok((job_analysis, resume_optimizations)) => {
                let summary = summarize(&job_analysis, &resume_optimizations);

                WorkflowOutcome {
                    workflow_id: workflow_id.to_string(),
                    status: WorkflowStatus::Completed,
                    job_analysis: Some(job_analysis),
                    resume_optimizations: Some(resume_optimizations),
                    summary: Some(summary),
                    error: None,
                }
            }
            Err(e) => {
                let message = e.to_string();
                self.update_record(workflow_id, |record| {
                    record.status = WorkflowStatus::Failed;
                    record.error = Some(message.clone());
                });

                WorkflowOutcome {
                    workflow_id: workflow_id.to_string(),
                    status: WorkflowStatus::Failed,
                    job_analysis: None,
                    resume_optimizations: None,
                    summary: None,
                    error: Some(message),
                }
            }
        }
    }

    /// Snapshot of a workflow record, or the not-found sentinel
    pub fn get_workflow_status(&self, workflow_id: &str) -> WorkflowStatusReport {
        self.workflows
            .lock()
            .expect("workflow table mutex poisoned")
            .get(workflow_id)
            .cloned()
            .map(WorkflowStatusReport::Known)
            .unwrap_or(WorkflowStatusReport::NotFound)
    }

    async fn run_stages(
        &self,
        workflow_id: &str,
        task: WorkflowTask,
    ) -> Result<(JobAnalysis, Vec<ResumeResult>)> {
        let WorkflowTask {
            user_profile,
            job_opportunities,
        } = task;

        // Stage 1: score and rank the job market
        let job_analysis = self
            .job_hunter
            .execute(AgentTask::JobSearch {
                user_profile: user_profile.clone(),
                job_opportunities,
            })
            .await?
            .into_job_analysis()?;

        self.update_record(workflow_id, |record| {
            record.job_analysis = Some(job_analysis.clone());
            record.current_step = 1;
        });

        // Stage 2: optimize the resume for the top matches. The per-job
        // optimizations are independent; fan out and re-join in input order.
        let top_jobs: Vec<JobOpportunity> = job_analysis
            .scored_opportunities
            .iter()
            .take(self.config.workflow.top_opportunities)
            .map(|scored| scored.job.clone())
            .collect();

        let resume_optimizations = try_join_all(top_jobs.into_iter().map(|job| {
            let task = AgentTask::ResumeOptimization {
                job: job.clone(),
                current_resume: user_profile.current_resume.clone(),
                user_profile: user_profile.clone(),
            };
            async move {
                let optimization = self
                    .resume_expert
                    .execute(task)
                    .await?
                    .into_resume_optimization()?;
                Ok::<_, PilotError>(ResumeResult { job, optimization })
            }
        }))
        .await?;

        self.update_record(workflow_id, |record| {
            record.resume_optimizations = Some(resume_optimizations.clone());
            record.current_step = 2;
            record.status = WorkflowStatus::Completed;
        });

        Ok((job_analysis, resume_optimizations))
    }

    fn register_workflow(&self, workflow_id: &str) {
        self.workflows
            .lock()
            .expect("workflow table mutex poisoned")
            .insert(workflow_id.to_string(), WorkflowRecord::new(workflow_id));
    }

    fn update_record(&self, workflow_id: &str, update: impl FnOnce(&mut WorkflowRecord)) {
        let mut workflows = self
            .workflows
            .lock()
            .expect("workflow table mutex poisoned");
        if let Some(record) = workflows.get_mut(workflow_id) {
            update(record);
        }
    }
}
