//! Workflow summary aggregation
//!
//! Pure computation over already-collected stage results; no reasoning
//! service calls.

use crate::core::{JobAnalysis, ResumeResult, TopOpportunity, WorkflowSummary};

/// Threshold above which a job counts as high-fit
const HIGH_FIT_THRESHOLD: f64 = 0.8;

/// Aggregate the results of a completed workflow
pub fn summarize(job_analysis: &JobAnalysis, optimizations: &[ResumeResult]) -> WorkflowSummary {
    let scored = &job_analysis.scored_opportunities;

    let avg_ats_score = if optimizations.is_empty() {
        0.0
    } else {
        optimizations
            .iter()
            .map(|r| r.optimization.ats_score)
            .sum::<f64>()
            / optimizations.len() as f64
    };

    WorkflowSummary {
        total_jobs_analyzed: scored.len(),
        high_fit_jobs: scored
            .iter()
            .filter(|s| s.fit_score > HIGH_FIT_THRESHOLD)
            .count(),
        top_opportunity: scored.first().map(|top| TopOpportunity {
            title: top.job.title.clone(),
            company: top.job.company.clone(),
            fit_score: top.fit_score,
        }),
        resumes_optimized: optimizations.len(),
        avg_ats_score,
        recommendations: job_analysis.recommendations.clone(),
    }
}
