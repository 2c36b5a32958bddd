//! jobpilot - Multi-Agent Job Search Orchestration
//!
//! Demo entry point: runs one workflow over sample data against Ollama.

use std::collections::HashMap;
use std::sync::Arc;

use clap::Parser;
use jobpilot::core::{JobOpportunity, UserProfile};
use jobpilot::llm::{OllamaClient, ReasoningService};
use jobpilot::workflow::{Orchestrator, WorkflowTask};
use jobpilot::Config;

/// jobpilot - Multi-Agent Job Search Orchestration
#[derive(Parser, Debug)]
#[command(name = "jobpilot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reasoning model to use
    #[arg(long, short = 'm')]
    model: Option<String>,

    /// Workflow id to register the run under
    #[arg(long, default_value = "workflow_001")]
    workflow_id: String,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration with CLI overrides
    let mut config = Config::load();
    if let Some(ref model) = args.model {
        config.models.reasoning = model.clone();
    }
    if args.debug {
        config.agent.debug = true;
    }

    let client = OllamaClient::from_config(&config);

    // Preflight: make sure the model is actually pulled
    if !client.is_model_available(&config.models.reasoning).await? {
        anyhow::bail!(
            "Model '{}' not available in Ollama. Run: ollama pull {}",
            config.models.reasoning,
            config.models.reasoning
        );
    }

    let user_profile = UserProfile {
        skills: vec![
            "Python".to_string(),
            "Machine Learning".to_string(),
            "REST APIs".to_string(),
            "SQL".to_string(),
            "Docker".to_string(),
        ],
        experience: "5 years software development".to_string(),
        education: "BS Computer Science".to_string(),
        preferences: HashMap::from([
            ("location".to_string(), "Remote".into()),
            ("salary_min".to_string(), 100_000.into()),
        ]),
        current_resume: "John Doe\nSoftware Engineer\n5 years experience in Python and ML..."
            .to_string(),
    };

    let job_opportunities = vec![
        JobOpportunity {
            id: "1".to_string(),
            title: "Senior ML Engineer".to_string(),
            company: "TechCorp".to_string(),
            description: "We are looking for an experienced ML engineer...".to_string(),
            requirements: vec![
                "Python".to_string(),
                "Machine Learning".to_string(),
                "TensorFlow".to_string(),
                "AWS".to_string(),
            ],
            salary_range: Some("120k-150k".to_string()),
            location: "Remote".to_string(),
            fit_score: None,
        },
        JobOpportunity {
            id: "2".to_string(),
            title: "Full Stack Developer".to_string(),
            company: "StartupXYZ".to_string(),
            description: "Join our fast-growing startup...".to_string(),
            requirements: vec![
                "Python".to_string(),
                "React".to_string(),
                "REST APIs".to_string(),
                "PostgreSQL".to_string(),
            ],
            salary_range: Some("90k-120k".to_string()),
            location: "San Francisco".to_string(),
            fit_score: None,
        },
    ];

    let orchestrator = Orchestrator::with_config(Arc::new(client), config);

    let outcome = orchestrator
        .execute_workflow(
            &args.workflow_id,
            WorkflowTask {
                user_profile,
                job_opportunities,
            },
        )
        .await;

    println!("Workflow Results:");
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
