//! Email messenger implementation.
//!
//! Prints the outgoing mail to stdout instead of talking to an SMTP relay.

use super::messenger::{DeliveryError, Messenger};
use crate::error::{AppError, AppResult};

/// Email messenger
///
/// Every message is sent from the fixed `from_address` given at construction.
///
/// # Example
/// ```ignore
/// let messenger = EmailMessenger::new("soporte@miempresa.cl");
/// messenger.send("cliente@correo.com", "Mensaje por EMAIL")?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessenger {
    from_address: String,
}

impl EmailMessenger {
    /// Creates a new email messenger
    ///
    /// # Arguments
    /// * `from_address` - Sender address used on every message
    pub fn new<S: Into<String>>(from_address: S) -> Self {
        Self {
            from_address: from_address.into(),
        }
    }

    /// Sender address
    pub fn from_address(&self) -> &str {
        &self.from_address
    }

    /// Builds the line written for a delivery
    pub fn render(&self, destination: &str, message: &str) -> String {
        format!(
            "[EMAIL] From: {} -> To: {} | Message: {}",
            self.from_address, destination, message
        )
    }
}

impl Messenger for EmailMessenger {
    fn send(&self, destination: &str, message: &str) -> Result<(), DeliveryError> {
        tracing::debug!(channel = "email", from = %self.from_address, to = destination, "Delivering email");
        println!("{}", self.render(destination, message));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "email"
    }

    /// Checks that the sender address is non-empty and looks like an address
    fn validate_config(&self) -> AppResult<()> {
        if self.from_address.trim().is_empty() {
            return Err(AppError::Validation {
                field: "from_address".to_string(),
                reason: "Sender address cannot be empty".to_string(),
            });
        }

        if !self.from_address.contains('@') {
            return Err(AppError::Validation {
                field: "from_address".to_string(),
                reason: format!("Invalid sender address: {}", self.from_address),
            });
        }

        Ok(())
    }
}
