//! Resume expert agent
//!
//! Rewrites a resume for one specific job, scores the result for ATS
//! compatibility, suggests further improvements, and reports keyword
//! coverage. Keyword analysis is computed locally without a service call.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::agent::base::{truncate_chars, AgentContext, RoleAgent};
use crate::agent::role::{AgentOutcome, AgentRole, AgentTask};
use crate::core::{
    JobOpportunity, KeywordAnalysis, Message, PilotError, Result, ResumeOptimization,
};
use crate::llm::CompleteOptions;

/// Fallback ATS score when the service response does not parse as a number
const DEFAULT_ATS_SCORE: f64 = 0.7;

/// How much of a description / resume feeds the optimization prompts
const DESCRIPTION_EXCERPT_CHARS: usize = 1000;
const RESUME_EXCERPT_CHARS: usize = 1000;
const COMPARISON_EXCERPT_CHARS: usize = 500;

/// How many missing keywords are surfaced
const TOP_MISSING_LIMIT: usize = 10;

const SYSTEM_PROMPT: &str = "\
You are an expert Resume Optimization AI agent. Your role is to:
1. Analyze job requirements and match them to candidate experience
2. Optimize resume content for ATS systems
3. Improve keyword density and relevance
4. Enhance formatting and presentation

You understand hiring manager psychology and ATS algorithms.
Always prioritize truthful representation while maximizing impact.";

/// Agent specialized in resume optimization
pub struct ResumeExpertAgent {
    ctx: AgentContext,
}

impl ResumeExpertAgent {
    /// Create a new resume expert agent
    pub fn new(ctx: AgentContext) -> Self {
        Self { ctx }
    }

    /// Request a complete rewritten resume targeting one job
    async fn optimize_resume(&self, job: &JobOpportunity, current_resume: &str) -> Result<String> {
        let prompt = format!(
            "Optimize this resume for the following job opportunity:\n\n\
             Job Title: {}\n\
             Company: {}\n\
             Key Requirements: {}\n\
             Job Description: {}...\n\n\
             Current Resume:\n{}\n\n\
             Optimize by:\n\
             1. Reordering sections for maximum impact\n\
             2. Enhancing relevant experience descriptions\n\
             3. Adding relevant keywords naturally\n\
             4. Improving action verbs and quantified achievements\n\
             5. Ensuring ATS compatibility\n\n\
             Return the complete optimized resume.",
            job.title,
            job.company,
            job.requirements.join(", "),
            truncate_chars(&job.description, DESCRIPTION_EXCERPT_CHARS),
            current_resume,
        );

        self.ctx
            .service
            .complete(
                &self.ctx.model,
                &[Message::user(prompt)],
                CompleteOptions::with_temperature(0.2),
            )
            .await
    }

    /// Score the optimized resume for ATS compatibility
    ///
    /// A non-numeric response falls back to [`DEFAULT_ATS_SCORE`].
    async fn calculate_ats_score(&self, resume: &str, job: &JobOpportunity) -> Result<f64> {
        let prompt = format!(
            "Analyze this resume for ATS (Applicant Tracking System) compatibility:\n\n\
             Resume: {}...\n\
             Job Requirements: {}\n\n\
             Rate ATS compatibility (0.0-1.0) based on:\n\
             1. Keyword matching\n\
             2. Format compatibility\n\
             3. Section organization\n\
             4. Skill alignment\n\n\
             Respond with only a number between 0.0 and 1.0.",
            truncate_chars(resume, RESUME_EXCERPT_CHARS),
            job.requirements.join(", "),
        );

        let response = self
            .ctx
            .service
            .complete(
                &self.ctx.model,
                &[Message::user(prompt)],
                CompleteOptions::scoring(),
            )
            .await?;

        Ok(response
            .trim()
            .parse::<f64>()
            .map(|score| score.clamp(0.0, 1.0))
            .unwrap_or(DEFAULT_ATS_SCORE))
    }

    /// Compare original and optimized text and request further suggestions
    async fn suggest_improvements(&self, original: &str, optimized: &str) -> Result<Vec<String>> {
        let prompt = format!(
            "Compare the original and optimized resume and suggest 3-5 additional improvements:\n\n\
             Original Resume (first 500 chars): {}...\n\
             Optimized Resume (first 500 chars): {}...\n\n\
             Suggest specific, actionable improvements as a JSON array of strings.",
            truncate_chars(original, COMPARISON_EXCERPT_CHARS),
            truncate_chars(optimized, COMPARISON_EXCERPT_CHARS),
        );

        let response = self
            .ctx
            .service
            .complete(
                &self.ctx.model,
                &[Message::user(prompt)],
                CompleteOptions::with_temperature(0.3),
            )
            .await?;

        Ok(serde_json::from_str(&response).unwrap_or_else(|_| {
            vec![
                "Consider adding more quantified achievements".to_string(),
                "Improve action verb variety".to_string(),
            ]
        }))
    }
}

/// Keyword coverage of a resume against a job posting
///
/// Case-insensitive word split over requirements and description. Missing
/// keywords keep the order of their first appearance (requirements first,
/// then description) so the report is stable run to run.
pub fn analyze_keywords(job: &JobOpportunity, resume: &str) -> KeywordAnalysis {
    let mut seen = HashSet::new();
    let mut job_keywords = Vec::new();

    let requirement_words = job
        .requirements
        .iter()
        .flat_map(|r| r.split_whitespace())
        .map(str::to_lowercase);
    let description_words = job.description.split_whitespace().map(str::to_lowercase);

    for word in requirement_words.chain(description_words) {
        if seen.insert(word.clone()) {
            job_keywords.push(word);
        }
    }

    let resume_words: HashSet<String> = resume
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    let (matched, missing): (Vec<&String>, Vec<&String>) = job_keywords
        .iter()
        .partition(|word| resume_words.contains(*word));

    let match_percentage = if job_keywords.is_empty() {
        0.0
    } else {
        matched.len() as f64 / job_keywords.len() as f64
    };

    KeywordAnalysis {
        matched_count: matched.len(),
        missing_count: missing.len(),
        match_percentage,
        top_missing: missing
            .into_iter()
            .take(TOP_MISSING_LIMIT)
            .cloned()
            .collect(),
    }
}

#[async_trait]
impl RoleAgent for ResumeExpertAgent {
    fn role(&self) -> AgentRole {
        AgentRole::ResumeExpert
    }

    fn system_prompt(&self) -> &str {
        SYSTEM_PROMPT
    }

    fn context(&self) -> &AgentContext {
        &self.ctx
    }

    async fn execute_specific(&self, task: &AgentTask, reasoning: &str) -> Result<AgentOutcome> {
        let (job, current_resume) = match task {
            AgentTask::ResumeOptimization {
                job,
                current_resume,
                ..
            } => (job, current_resume),
            other => {
                return Err(PilotError::contract(format!(
                    "resume expert cannot handle task {:?}",
                    std::mem::discriminant(other)
                )))
            }
        };

        let optimized_resume = self.optimize_resume(job, current_resume).await?;

        let (ats_score, improvements) = futures::try_join!(
            self.calculate_ats_score(&optimized_resume, job),
            self.suggest_improvements(current_resume, &optimized_resume),
        )?;

        let keyword_optimization = analyze_keywords(job, &optimized_resume);

        Ok(AgentOutcome::ResumeOptimized(ResumeOptimization {
            optimized_resume,
            ats_score,
            improvements,
            keyword_optimization,
            reasoning: reasoning.to_string(),
        }))
    }
}
