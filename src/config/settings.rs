//! Configuration settings structures for notify-dip
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "notify-dip".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

fn default_email_from() -> String {
    "soporte@miempresa.cl".to_string()
}

fn default_whatsapp_from() -> String {
    "+56912345678".to_string()
}

fn default_instagram_handle() -> String {
    "@miempresa".to_string()
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Channel Configuration
// ============================================================================

/// Email channel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailChannelConfig {
    /// Sender address used on every email
    #[serde(default = "default_email_from")]
    pub from_address: String,
}

impl Default for EmailChannelConfig {
    fn default() -> Self {
        Self {
            from_address: default_email_from(),
        }
    }
}

/// WhatsApp channel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatsAppChannelConfig {
    /// Sender phone number
    #[serde(default = "default_whatsapp_from")]
    pub from_number: String,
}

impl Default for WhatsAppChannelConfig {
    fn default() -> Self {
        Self {
            from_number: default_whatsapp_from(),
        }
    }
}

/// Instagram channel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstagramChannelConfig {
    /// Sender account handle
    #[serde(default = "default_instagram_handle")]
    pub user_handle: String,
}

impl Default for InstagramChannelConfig {
    fn default() -> Self {
        Self {
            user_handle: default_instagram_handle(),
        }
    }
}

/// Origin identifiers for every delivery channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChannelsConfig {
    #[serde(default)]
    pub email: EmailChannelConfig,

    #[serde(default)]
    pub whatsapp: WhatsAppChannelConfig,

    #[serde(default)]
    pub instagram: InstagramChannelConfig,
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether console output is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            colored: default_true(),
        }
    }
}

/// Logger configuration as it appears in configuration files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: full, compact, json
    #[serde(default = "default_log_format")]
    pub format: String,

    #[serde(default)]
    pub console: ConsoleSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: ConsoleSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings into the logger's runtime configuration
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::invalid("logger.format".to_string(), e.to_string()))?;
        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);

        LoggerConfig::new(console, format, self.level)
            .map_err(|e| ConfigError::invalid("logger".to_string(), e.to_string()))
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub logger: LoggerSettings,

    #[serde(default)]
    pub channels: ChannelsConfig,
}
