//! Configuration management for jobpilot
//!
//! Supports environment variables, config files, and runtime overrides.
//!
//! Config file location: ~/.config/jobpilot/config.toml

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::core::error::{PilotError, Result};

/// Main configuration for jobpilot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ollama configuration
    pub ollama: OllamaConfig,
    /// Model configuration
    pub models: ModelConfig,
    /// Agent configuration
    pub agent: AgentConfig,
    /// Workflow configuration
    #[serde(default)]
    pub workflow: WorkflowConfig,
}

/// Ollama server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Host address (default: localhost)
    pub host: String,
    /// Port number (default: 11434)
    pub port: u16,
    /// Per-request timeout in seconds; a timed-out call surfaces as a
    /// reasoning-service failure and fails the workflow
    pub timeout_secs: u64,
}

/// Model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model used for all agent reasoning and scoring calls
    /// Default: qwen3:8b
    pub reasoning: String,
    /// Alternative models that can be switched to
    #[serde(default)]
    pub alternatives: Vec<String>,
}

/// Agent behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Maximum interaction records retained in agent memory (storage limit)
    /// Default: 500
    pub max_history: usize,
    /// Number of recent interactions scanned when building role context
    /// Default: 50
    pub context_recall: usize,
    /// Whether to show debug output
    pub debug: bool,
}

/// Workflow behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// How many top-scored jobs get a resume optimization pass
    /// Default: 3
    pub top_opportunities: usize,
    /// How many top-scored jobs feed the recommendation average
    /// Default: 5
    pub recommendation_pool: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ollama: OllamaConfig::default(),
            models: ModelConfig::default(),
            agent: AgentConfig::default(),
            workflow: WorkflowConfig::default(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: env::var("OLLAMA_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env::var("OLLAMA_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(11434),
            timeout_secs: 120,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            reasoning: env::var("JOBPILOT_MODEL").unwrap_or_else(|_| "qwen3:8b".to_string()),
            alternatives: vec![
                "gemma3:4b".to_string(),
                "mistral:7b".to_string(),
                "llama3.1:8b".to_string(),
            ],
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_history: 500,
            context_recall: 50,
            debug: env::var("JOBPILOT_DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            top_opportunities: 3,
            recommendation_pool: 5,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jobpilot")
    }

    /// Get the config file path
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load configuration from file, environment, and defaults
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load() -> Self {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        if let Ok(config) = Self::load_from_file() {
            return config;
        }

        // Fall back to defaults (which respect env vars)
        Self::default()
    }

    /// Load configuration from file only
    pub fn load_from_file() -> Result<Self> {
        let config_path = Self::config_file();

        if !config_path.exists() {
            return Err(PilotError::config("Config file not found"));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| PilotError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| PilotError::config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_file();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .map_err(|e| PilotError::config(format!("Failed to create config dir: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PilotError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, content)
            .map_err(|e| PilotError::config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Get the full Ollama API URL
    pub fn ollama_url(&self) -> String {
        format!("http://{}:{}", self.ollama.host, self.ollama.port)
    }

    /// Update the reasoning model
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.models.reasoning = model.into();
    }

    /// Check if a model is in the known alternatives
    pub fn is_known_model(&self, model: &str) -> bool {
        self.models.alternatives.iter().any(|m| m == model) || model == self.models.reasoning
    }
}
