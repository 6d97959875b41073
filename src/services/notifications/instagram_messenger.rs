//! Instagram direct message messenger.

use super::messenger::{DeliveryError, Messenger};
use crate::error::{AppError, AppResult};

/// Instagram messenger sending from a fixed account handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstagramMessenger {
    user_handle: String,
}

impl InstagramMessenger {
    pub fn new<S: Into<String>>(user_handle: S) -> Self {
        Self {
            user_handle: user_handle.into(),
        }
    }

    pub fn user_handle(&self) -> &str {
        &self.user_handle
    }

    pub fn render(&self, destination: &str, message: &str) -> String {
        format!(
            "[INSTAGRAM] From: {} -> To: {} | Message: {}",
            self.user_handle, destination, message
        )
    }
}

impl Messenger for InstagramMessenger {
    fn send(&self, destination: &str, message: &str) -> Result<(), DeliveryError> {
        tracing::debug!(channel = "instagram", from = %self.user_handle, to = destination, "Delivering Instagram message");
        println!("{}", self.render(destination, message));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "instagram"
    }

    fn validate_config(&self) -> AppResult<()> {
        if self.user_handle.trim().is_empty() {
            return Err(AppError::Validation {
                field: "user_handle".to_string(),
                reason: "Account handle cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
