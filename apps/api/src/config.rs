use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";
const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub llm_model: String,
    pub llm_api_url: String,
    pub llm_timeout_secs: u64,
    /// Optional JSON roster file. When unset the built-in roster is used.
    pub roster_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_timeout_secs = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".to_string())
            .parse::<u64>()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;
        if llm_timeout_secs == 0 {
            bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            llm_timeout_secs,
            roster_path: std::env::var("ROSTER_PATH").ok().map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

// Hand-written so the API key never lands in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("groq_api_key", &"<redacted>")
            .field("llm_model", &self.llm_model)
            .field("llm_api_url", &self.llm_api_url)
            .field("llm_timeout_secs", &self.llm_timeout_secs)
            .field("roster_path", &self.roster_path)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        groq_api_key: "test-key".to_string(),
        llm_model: DEFAULT_MODEL.to_string(),
        llm_api_url: DEFAULT_API_URL.to_string(),
        llm_timeout_secs: 5,
        roster_path: None,
        port: 0,
        rust_log: "debug".to_string(),
    }
}
