//! Job hunter agent
//!
//! Scores job opportunities against a candidate profile and produces an
//! application strategy for each. Per-job scoring calls are independent, so
//! they fan out concurrently and re-join in input order before sorting.

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::agent::base::{truncate_chars, AgentContext, RoleAgent};
use crate::agent::role::{AgentOutcome, AgentRole, AgentTask};
use crate::core::{
    ApplicationStrategy, JobAnalysis, JobOpportunity, Message, PilotError, Priority, Result,
    ScoredOpportunity, UserProfile,
};
use crate::llm::CompleteOptions;

/// Fallback fit score when the service response does not parse as a number
const DEFAULT_FIT_SCORE: f64 = 0.5;

/// How much of a job description feeds the fit-score prompt
const DESCRIPTION_EXCERPT_CHARS: usize = 500;

const SYSTEM_PROMPT: &str = "\
You are an expert Job Hunter AI agent. Your role is to:
1. Search for relevant job opportunities
2. Analyze job descriptions for fit
3. Score opportunities based on user profile
4. Identify the best application strategies

You have deep knowledge of job markets, hiring trends, and what makes candidates successful.
Always consider the user's career goals, preferences, and growth potential.";

/// Agent specialized in finding and evaluating job opportunities
pub struct JobHunterAgent {
    ctx: AgentContext,
    /// How many top-scored jobs feed the recommendation average
    recommendation_pool: usize,
}

impl JobHunterAgent {
    /// Create a new job hunter agent
    pub fn new(ctx: AgentContext, recommendation_pool: usize) -> Self {
        Self {
            ctx,
            recommendation_pool,
        }
    }

    /// Score one job: fit score and application strategy, each via its own
    /// service call
    async fn score_job(
        &self,
        job: &JobOpportunity,
        profile: &UserProfile,
    ) -> Result<ScoredOpportunity> {
        let (fit_score, application_strategy) = futures::try_join!(
            self.calculate_fit_score(job, profile),
            self.generate_application_strategy(job, profile),
        )?;

        let mut job = job.clone();
        job.fit_score = Some(fit_score);

        Ok(ScoredOpportunity {
            job,
            fit_score,
            application_strategy,
            priority: Priority::from_fit_score(fit_score),
        })
    }

    /// Ask the reasoning service for a bare numeric fit score
    ///
    /// A non-numeric response falls back to [`DEFAULT_FIT_SCORE`] rather than
    /// failing the workflow.
    async fn calculate_fit_score(
        &self,
        job: &JobOpportunity,
        profile: &UserProfile,
    ) -> Result<f64> {
        let prompt = format!(
            "Analyze the job fit between this candidate and job opportunity.\n\
             Return a score between 0.0 and 1.0 where 1.0 is a perfect match.\n\n\
             Candidate Profile:\n\
             - Skills: {}\n\
             - Experience: {}\n\
             - Education: {}\n\n\
             Job Opportunity:\n\
             - Title: {}\n\
             - Company: {}\n\
             - Requirements: {}\n\
             - Description: {}...\n\n\
             Consider: skill alignment, experience level, career progression, company culture fit.\n\
             Respond with only a number between 0.0 and 1.0.",
            profile.skills.join(", "),
            profile.experience,
            profile.education,
            job.title,
            job.company,
            job.requirements.join(", "),
            truncate_chars(&job.description, DESCRIPTION_EXCERPT_CHARS),
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
            .unwrap_or(DEFAULT_FIT_SCORE))
    }

    /// Ask for a structured application strategy; malformed JSON falls back
    /// to the default structure
    async fn generate_application_strategy(
        &self,
        job: &JobOpportunity,
        profile: &UserProfile,
    ) -> Result<ApplicationStrategy> {
        let strengths: Vec<&str> = profile.skills.iter().take(5).map(String::as_str).collect();

        let prompt = format!(
            "Create an application strategy for this job opportunity:\n\n\
             Job: {} at {}\n\
             Requirements: {}\n\n\
             Candidate strengths: {}\n\n\
             Provide strategy for:\n\
             1. Key points to highlight\n\
             2. Application timing\n\
             3. Follow-up approach\n\
             4. Networking opportunities\n\n\
             Return as JSON with keys: highlights, timing, followup, networking",
            job.title,
            job.company,
            job.requirements.join(", "),
            strengths.join(", "),
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

        Ok(serde_json::from_str(&response).unwrap_or_default())
    }

    /// Strategic recommendations from the top-scored opportunities
    ///
    /// Local computation; an empty job set yields no recommendations.
    fn generate_recommendations(&self, scored: &[ScoredOpportunity]) -> Vec<String> {
        let top: Vec<&ScoredOpportunity> = scored.iter().take(self.recommendation_pool).collect();
        if top.is_empty() {
            return Vec::new();
        }

        let avg_score: f64 = top.iter().map(|s| s.fit_score).sum::<f64>() / top.len() as f64;

        let recommendation = if avg_score > 0.8 {
            "Excellent job market alignment! Focus on top 3 opportunities."
        } else if avg_score > 0.6 {
            "Good opportunities available. Consider skill enhancement for better fit."
        } else {
            "Limited high-fit opportunities. Recommend expanding search criteria."
        };

        vec![recommendation.to_string()]
    }
}

#[async_trait]
impl RoleAgent for JobHunterAgent {
    fn role(&self) -> AgentRole {
        AgentRole::JobHunter
    }

    fn system_prompt(&self) -> &str {
        SYSTEM_PROMPT
    }

    fn context(&self) -> &AgentContext {
        &self.ctx
    }

    async fn execute_specific(&self, task: &AgentTask, reasoning: &str) -> Result<AgentOutcome> {
        let (user_profile, job_opportunities) = match task {
            AgentTask::JobSearch {
                user_profile,
                job_opportunities,
            } => (user_profile, job_opportunities),
            other => {
                return Err(PilotError::contract(format!(
                    "job hunter cannot handle task {:?}",
                    std::mem::discriminant(other)
                )))
            }
        };

        // Fan out per-job scoring; try_join_all preserves input order
        let mut scored = try_join_all(
            job_opportunities
                .iter()
                .map(|job| self.score_job(job, user_profile)),
        )
        .await?;

        // Stable sort: ties keep the order the scoring calls returned
        scored.sort_by(|a, b| b.fit_score.total_cmp(&a.fit_score));

        let recommendations = self.generate_recommendations(&scored);

        Ok(AgentOutcome::JobAnalysis(JobAnalysis {
            scored_opportunities: scored,
            recommendations,
            reasoning: reasoning.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use super::*;
    use crate::agent::memory::AgentMemory;
    use crate::llm::ReasoningService;

    /// Scripted service: fit scores keyed by job title, canned strategy JSON
    struct StubService {
        fit_scores: HashMap<String, String>,
        strategy_json: String,
    }

    impl StubService {
        fn new(fit_scores: &[(&str, &str)]) -> Self {
            Self {
                fit_scores: fit_scores
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                strategy_json: r#"{"highlights":["Rust"],"timing":"this week","followup":"3 days","networking":["meetup"]}"#.to_string(),
            }
        }
    }

    #[async_trait]
    impl ReasoningService for StubService {
        async fn complete(
            &self,
            _model: &str,
            messages: &[Message],
            _options: CompleteOptions,
        ) -> Result<String> {
            let prompt = &messages.last().unwrap().content;

            if prompt.contains("Think through this step by step") {
                return Ok("structured reasoning".to_string());
            }
            if prompt.contains("Respond with only a number") {
                for (title, score) in &self.fit_scores {
                    if prompt.contains(title.as_str()) {
                        return Ok(score.clone());
                    }
                }
                return Ok("0.5".to_string());
            }
            if prompt.contains("application strategy") {
                return Ok(self.strategy_json.clone());
            }
            Ok(String::new())
        }

        async fn is_model_available(&self, _model: &str) -> Result<bool> {
            Ok(true)
        }

        async fn list_models(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn agent(service: StubService) -> JobHunterAgent {
        let ctx = AgentContext::new(
            Arc::new(service),
            Arc::new(AgentMemory::default()),
            "test-model",
        );
        JobHunterAgent::new(ctx, 5)
    }

    fn job(id: &str, title: &str) -> JobOpportunity {
        JobOpportunity {
            id: id.to_string(),
            title: title.to_string(),
            company: "TechCorp".to_string(),
            description: "We are looking for an engineer".to_string(),
            requirements: vec!["Rust".to_string()],
            salary_range: None,
            location: "Remote".to_string(),
            fit_score: None,
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            experience: "5 years software development".to_string(),
            education: "BS Computer Science".to_string(),
            preferences: HashMap::new(),
            current_resume: "resume text".to_string(),
        }
    }

    #[tokio::test]
    async fn test_scored_opportunities_sorted_descending() {
        let agent = agent(StubService::new(&[
            ("Backend Engineer", "0.4"),
            ("ML Engineer", "0.9"),
            ("Data Analyst", "0.7"),
        ]));

        let task = AgentTask::JobSearch {
            user_profile: profile(),
            job_opportunities: vec![
                job("1", "Backend Engineer"),
                job("2", "ML Engineer"),
                job("3", "Data Analyst"),
            ],
        };

        let analysis = agent.execute(task).await.unwrap().into_job_analysis().unwrap();
        let scores: Vec<f64> = analysis
            .scored_opportunities
            .iter()
            .map(|s| s.fit_score)
            .collect();
        assert_eq!(scores, vec![0.9, 0.7, 0.4]);
        assert_eq!(analysis.scored_opportunities[0].priority, Priority::High);
        assert_eq!(analysis.scored_opportunities[1].priority, Priority::Medium);
        assert_eq!(analysis.scored_opportunities[2].priority, Priority::Low);
    }

    #[tokio::test]
    async fn test_non_numeric_score_falls_back() {
        let agent = agent(StubService::new(&[(
            "ML Engineer",
            "I'd rate this a strong match",
        )]));

        let task = AgentTask::JobSearch {
            user_profile: profile(),
            job_opportunities: vec![job("1", "ML Engineer")],
        };

        let analysis = agent.execute(task).await.unwrap().into_job_analysis().unwrap();
        assert_eq!(analysis.scored_opportunities[0].fit_score, 0.5);
    }

    #[tokio::test]
    async fn test_empty_job_list() {
        let agent = agent(StubService::new(&[]));

        let task = AgentTask::JobSearch {
            user_profile: profile(),
            job_opportunities: Vec::new(),
        };

        let analysis = agent.execute(task).await.unwrap().into_job_analysis().unwrap();
        assert!(analysis.scored_opportunities.is_empty());
        assert!(analysis.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_strategy_falls_back_to_default() {
        let mut service = StubService::new(&[("ML Engineer", "0.9")]);
        service.strategy_json = "sure! here's a plan:".to_string();
        let agent = agent(service);

        let task = AgentTask::JobSearch {
            user_profile: profile(),
            job_opportunities: vec![job("1", "ML Engineer")],
        };

        let analysis = agent.execute(task).await.unwrap().into_job_analysis().unwrap();
        let strategy = &analysis.scored_opportunities[0].application_strategy;
        assert!(strategy.highlights.is_empty());
        assert_eq!(strategy.timing, "immediate");
        assert_eq!(strategy.followup, "1 week");
    }

    #[tokio::test]
    async fn test_execution_stores_interaction() {
        let agent = agent(StubService::new(&[("ML Engineer", "0.9")]));

        let task = AgentTask::JobSearch {
            user_profile: profile(),
            job_opportunities: vec![job("1", "ML Engineer")],
        };
        agent.execute(task).await.unwrap();

        let context = agent
            .context()
            .memory
            .relevant_context(AgentRole::JobHunter, "");
        assert_eq!(context.recent_interactions.len(), 1);
    }
}
