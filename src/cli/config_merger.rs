//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override values loaded from configuration files.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};
use crate::services::notifications::ChannelKind;

/// Applies CLI overrides on top of file-based configuration
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration selected by the CLI
    ///
    /// `--config` selects a single file; otherwise the layered loader is
    /// driven by `NOTIFY_*` environment variables. `--env` overrides the
    /// environment layer in both cases.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = match cli.config {
            Some(ref path) => ConfigLoader::from_file(path, crate::config::Environment::from_env()),
            None => ConfigLoader::new()?,
        };

        if let Some(env) = cli.env {
            loader = loader.with_environment(env);
        }

        Ok(Self::new(loader.load()?))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// Command-specific overrides take precedence over global flags.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        Self::apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            Self::apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    fn apply_command_overrides(config: &mut Settings, command: &Commands) {
        match command {
            Commands::Send {
                channel,
                from,
                log_level,
                ..
            } => {
                if let Some(origin) = from {
                    let channels = &mut config.channels;
                    match channel {
                        ChannelKind::Email => channels.email.from_address = origin.clone(),
                        ChannelKind::WhatsApp => channels.whatsapp.from_number = origin.clone(),
                        ChannelKind::Instagram => {
                            channels.instagram.user_handle = origin.clone()
                        }
                    }
                }

                if let Some(level) = log_level {
                    config.logger.level = (*level).into();
                }
            }
            Commands::Demo => {}
        }
    }
}
