//! Errors raised while loading or checking settings

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// `--config` / `NOTIFY_CONFIG_FILE` points at a file that is not there
    #[error("configuration file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// A loaded setting holds a value the application cannot use
    #[error("invalid setting {field}: {message}")]
    Invalid { field: String, message: String },

    #[error("NOTIFY_CONFIG_DIR and NOTIFY_CONFIG_FILE cannot both be set")]
    ConflictingSources,

    /// Reading, merging or deserializing the sources failed
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn invalid<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Dotted settings key the error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Invalid { field, .. } => Some(field),
            _ => None,
        }
    }
}
