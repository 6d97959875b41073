//! Command executor for dispatching CLI commands
//!
//! Entry point for running a parsed command once configuration is loaded.

use super::handlers::{DemoCommandHandler, SendCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings
///
/// Runs the demo when no subcommand is given.
///
/// # Errors
/// Returns errors from the command handlers
pub fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Send {
            channel,
            to,
            message,
            ..
        }) => SendCommandHandler::new(settings).execute(*channel, to, message),
        Some(Commands::Demo) | None => {
            DemoCommandHandler::new(settings).execute()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::notifications::NotifyError;
    use clap::Parser;

    #[test]
    fn test_execute_default_runs_demo() {
        let cli = Cli::try_parse_from(["notify-dip"]).unwrap();
        assert!(execute_command(&cli, Settings::default()).is_ok());
    }

    #[test]
    fn test_execute_send() {
        let cli = Cli::try_parse_from([
            "notify-dip", "send", "-c", "email", "--to", "user@test.com", "-m", "hi",
        ])
        .unwrap();
        assert!(execute_command(&cli, Settings::default()).is_ok());
    }

    #[test]
    fn test_execute_send_reports_validation_error() {
        let cli =
            Cli::try_parse_from(["notify-dip", "send", "-c", "email", "--to", "", "-m", ""]).unwrap();
        let result = execute_command(&cli, Settings::default());
        assert!(matches!(
            result,
            Err(AppError::Notification(NotifyError::EmptyDestination))
        ));
    }
}
