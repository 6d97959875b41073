//! Configuration validation logic
//!
//! Validation methods for the configuration structures. Only the shape of
//! the values is checked here; channel-specific rules (e.g. an email sender
//! must contain `@`) live with the messenger implementations.

use crate::config::error::ConfigError;
use crate::config::settings::{ChannelsConfig, LoggerSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// # Validation Rules
    /// - Level must be one of trace, debug, info, warn, error
    /// - Format must be one of full, compact, json
    /// - Console output must be enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::invalid(
                "logger.level".to_string(),
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::invalid(
                "logger.format".to_string(),
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        if !self.console.enabled {
            return Err(ConfigError::invalid(
                "logger.console.enabled",
                "Console output must be enabled",
            ));
        }

        Ok(())
    }
}

impl ChannelsConfig {
    /// Validate channel configuration
    ///
    /// Every channel needs a non-blank origin identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let origins = [
            ("channels.email.from_address", &self.email.from_address),
            ("channels.whatsapp.from_number", &self.whatsapp.from_number),
            ("channels.instagram.user_handle", &self.instagram.user_handle),
        ];

        for (field, value) in origins {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(
                    field.to_string(),
                    format!("{} cannot be empty", field),
                ));
            }
        }

        Ok(())
    }
}

impl Settings {
    /// Validate the full configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logger.validate()?;
        self.channels.validate()?;
        Ok(())
    }
}
