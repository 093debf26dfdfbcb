//! Environment configuration for the server.

use crate::server::error::config::ConfigError;

/// Model used when `GEMINI_MODEL` is not set.
pub static DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
/// Provider base URL used when `GEMINI_API_URL` is not set.
pub static DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Server configuration read from the environment.
pub struct Config {
    /// Connection string for the database
    pub database_url: String,
    /// Credential for the AI provider, never sent to the browser
    pub gemini_api_key: String,
    /// Model name used for every diagnosis
    pub gemini_model: String,
    /// Base URL of the AI provider API
    pub gemini_api_url: String,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` falls back to `VITE_GEMINI_API_KEY` for deployments that still carry
    /// the old variable name.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL"))?;
        let gemini_api_key = var("GEMINI_API_KEY")
            .or_else(|| var("VITE_GEMINI_API_KEY"))
            .ok_or_else(|| ConfigError::MissingEnvVar("GEMINI_API_KEY"))?;
        let gemini_api_url = var("GEMINI_API_URL")
            .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !gemini_api_url.starts_with("http://") && !gemini_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvValue {
                var: "GEMINI_API_URL",
                reason: "must be an http or https URL".to_string(),
            });
        }

        Ok(Self {
            database_url,
            gemini_api_key,
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_url,
        })
    }
}
