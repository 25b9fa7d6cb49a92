use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "llama3";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full URL of the external text-generation endpoint.
    pub generator_url: String,
    pub generator_model: String,
    /// Transport timeout for generator calls. Enrichment adds none of its own.
    pub generator_timeout_secs: u64,
    /// Optional JSON file with extra fallback career entries.
    pub career_knowledge_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            generator_url: require_env("GENERATOR_URL")?,
            generator_model: std::env::var("GENERATOR_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            generator_timeout_secs: match std::env::var("GENERATOR_TIMEOUT_SECS") {
                Ok(raw) => raw
                    .parse::<u64>()
                    .context("GENERATOR_TIMEOUT_SECS must be a whole number of seconds")?,
                Err(_) => DEFAULT_TIMEOUT_SECS,
            },
            career_knowledge_path: std::env::var("CAREER_KNOWLEDGE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
