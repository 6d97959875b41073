use crate::config::error::ConfigError;
use crate::services::notifications::NotifyError;
use thiserror::Error;

/// Application-wide error type.
///
/// Wraps notification, configuration and validation failures so the CLI
/// layer can report them uniformly.
#[derive(Error, Debug)]
pub enum AppError {
    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Notification rejected or failed to deliver
    #[error(transparent)]
    Notification(#[from] NotifyError),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::Invalid { field, .. } => field.clone(),
            ConfigError::MissingFile(path) => path.display().to_string(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: anyhow::Error::new(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
