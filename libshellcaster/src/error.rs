//! Error types for Shellcaster

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShellcasterError>;

#[derive(Error, Debug)]
pub enum ShellcasterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ShellcasterError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellcasterError::InvalidInput(_) => 3,
            ShellcasterError::Platform(PlatformError::Authentication(_)) => 2,
            ShellcasterError::Platform(_) => 1,
            ShellcasterError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),
}

#[derive(Error, Debug, Clone)]
pub enum PlatformError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Content validation failed: {0}")]
    Validation(String),

    #[error("Posting failed: {0}")]
    Posting(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),
}
