//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use super::validation;
use crate::config::Environment;
use crate::services::notifications::ChannelKind;

/// Send notifications through pluggable delivery channels
#[derive(Parser, Debug)]
#[command(name = "notify-dip")]
#[command(about = "Send notifications through pluggable delivery channels")]
#[command(long_about = "
notify-dip sends a message to a destination through one of several delivery
channels (email, WhatsApp, Instagram). The notification service validates the
destination and message before handing them to the selected channel.

EXAMPLES:
    # Run the built-in demonstration (default)
    notify-dip demo

    # Send an email
    notify-dip send --channel email --to cliente@correo.com --message \"Hola\"

    # Send a WhatsApp message from a specific number
    notify-dip send -c whatsapp --from +56900000000 --to +56998765432 -m \"Hola\"

    # Use a custom configuration file with debug logging
    notify-dip --config ./notify.toml --verbose send -c ig --to @cliente -m \"Hola\"
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this TOML file instead of the layered `config/` directory.
    /// The file must exist and be readable.
    #[arg(long, value_name = "FILE", value_parser = validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `config/{environment}.toml` layer is loaded.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a single notification
    ///
    /// Examples:
    ///   notify-dip send -c email --to user@example.com -m "Hello"
    ///   notify-dip send -c whatsapp --to +56998765432 -m "Hello"
    Send {
        /// Delivery channel
        #[arg(short, long, value_name = "CHANNEL", value_enum, ignore_case = true)]
        channel: ChannelKind,

        /// Recipient identifier (address, phone number or handle)
        #[arg(short, long, value_name = "DESTINATION")]
        to: String,

        /// Message body
        #[arg(short, long, value_name = "TEXT")]
        message: String,

        /// Override the channel's configured origin identifier
        #[arg(long, value_name = "ORIGIN", value_parser = validation::validate_origin)]
        from: Option<String>,

        /// Log level override for this command
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,
    },
    /// Run the demonstration wiring (default)
    ///
    /// Notifies once through email and once through WhatsApp, then shows the
    /// validation errors for an empty destination and an empty message.
    Demo,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}
