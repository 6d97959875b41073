//! Demo command handler
//!
//! Wires an email and a WhatsApp notification service, sends one message
//! through each and then shows how the service rejects an empty destination
//! and an empty message.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::services::notifications::{
    ChannelKind, NotificationService, NotifyError, build_messenger,
};

/// Outcome of one notification attempted by the demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    pub channel: ChannelKind,
    pub destination: String,
    pub message: String,
    pub result: Result<(), NotifyError>,
}

/// Handler for the demo command
pub struct DemoCommandHandler {
    config: Settings,
}

impl DemoCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Run the demonstration and return every attempted notification
    ///
    /// Validation failures are part of the demonstration and are reported in
    /// the outcomes, not as an error. Only channel construction can fail.
    pub fn execute(&self) -> AppResult<Vec<DemoOutcome>> {
        let email_service =
            NotificationService::new(build_messenger(ChannelKind::Email, &self.config.channels)?);
        let whatsapp_service = NotificationService::new(build_messenger(
            ChannelKind::WhatsApp,
            &self.config.channels,
        )?);

        println!("=== Dependency Inversion demo ===");

        let mut outcomes = vec![
            Self::attempt(&email_service, ChannelKind::Email, "cliente@correo.com", "Message via EMAIL"),
            Self::attempt(&whatsapp_service, ChannelKind::WhatsApp, "+56998765432", "Message via WHATSAPP"),
        ];

        println!("\nValidations:");
        for (destination, message) in [("", "empty destination"), ("x@x.com", "")] {
            let outcome = Self::attempt(&email_service, ChannelKind::Email, destination, message);
            match &outcome.result {
                Ok(()) => println!("ok"),
                Err(e) => println!("{}", e),
            }
            outcomes.push(outcome);
        }

        tracing::debug!(attempts = outcomes.len(), "Demo finished");
        Ok(outcomes)
    }

    fn attempt(
        service: &NotificationService,
        channel: ChannelKind,
        destination: &str,
        message: &str,
    ) -> DemoOutcome {
        DemoOutcome {
            channel,
            destination: destination.to_string(),
            message: message.to_string(),
            result: service.notify(destination, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_outcomes() {
        let outcomes = DemoCommandHandler::new(Settings::default()).execute().unwrap();

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].channel, ChannelKind::Email);
        assert!(outcomes[0].result.is_ok());
        assert_eq!(outcomes[1].channel, ChannelKind::WhatsApp);
        assert!(outcomes[1].result.is_ok());
        assert_eq!(outcomes[2].result, Err(NotifyError::EmptyDestination));
        assert_eq!(outcomes[3].result, Err(NotifyError::EmptyMessage));
    }

    #[test]
    fn test_demo_fails_on_invalid_channel_config() {
        let mut settings = Settings::default();
        settings.channels.whatsapp.from_number = "not a number".to_string();

        assert!(DemoCommandHandler::new(settings).execute().is_err());
    }
}
