use thiserror::Error;

/// Startup configuration problem, reported before the server binds.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} is required but was not set")]
    MissingEnvVar(&'static str),
    #[error("Environment variable {var} is invalid: {reason}")]
    InvalidEnvValue { var: &'static str, reason: String },
}
