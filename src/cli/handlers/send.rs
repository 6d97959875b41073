//! Send command handler
//!
//! Builds the selected channel from configuration and delivers one
//! notification through it.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::services::notifications::{ChannelKind, NotificationService, build_messenger};

/// Handler for the send command
pub struct SendCommandHandler {
    config: Settings,
}

impl SendCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Send `message` to `destination` through `channel`
    ///
    /// # Errors
    /// - Channel configuration errors
    /// - Validation or delivery errors from the notification service
    pub fn execute(&self, channel: ChannelKind, destination: &str, message: &str) -> AppResult<()> {
        let messenger = build_messenger(channel, &self.config.channels)?;
        let service = NotificationService::new(messenger);

        tracing::info!(channel = %channel, destination, "Sending notification");

        match service.notify(destination, message) {
            Ok(()) => {
                tracing::info!(channel = %channel, "Notification delivered");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(channel = %channel, error = %e, "Notification failed");
                Err(e.into())
            }
        }
    }
}
