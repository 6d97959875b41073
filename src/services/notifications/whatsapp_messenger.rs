//! WhatsApp messenger implementation.

use super::messenger::{DeliveryError, Messenger};
use crate::error::{AppError, AppResult};

/// WhatsApp messenger
///
/// Sends from a fixed phone number. Delivery is simulated by printing the
/// message to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppMessenger {
    from_number: String,
}

impl WhatsAppMessenger {
    /// Creates a new WhatsApp messenger
    ///
    /// # Arguments
    /// * `from_number` - Sender phone number, e.g. `+56912345678`
    pub fn new<S: Into<String>>(from_number: S) -> Self {
        Self {
            from_number: from_number.into(),
        }
    }

    /// Sender phone number
    pub fn from_number(&self) -> &str {
        &self.from_number
    }

    /// Builds the line written for a delivery
    pub fn render(&self, destination: &str, message: &str) -> String {
        format!(
            "[WHATSAPP] From: {} -> To: {} | Message: {}",
            self.from_number, destination, message
        )
    }
}

impl Messenger for WhatsAppMessenger {
    fn send(&self, destination: &str, message: &str) -> Result<(), DeliveryError> {
        tracing::debug!(channel = "whatsapp", from = %self.from_number, to = destination, "Delivering WhatsApp message");
        println!("{}", self.render(destination, message));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "whatsapp"
    }

    /// Checks that the sender number is an optional `+` followed by digits
    fn validate_config(&self) -> AppResult<()> {
        let digits = self
            .from_number
            .strip_prefix('+')
            .unwrap_or(&self.from_number);

        if digits.is_empty() {
            return Err(AppError::Validation {
                field: "from_number".to_string(),
                reason: "Sender number cannot be empty".to_string(),
            });
        }

        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::Validation {
                field: "from_number".to_string(),
                reason: format!("Invalid sender number: {}", self.from_number),
            });
        }

        Ok(())
    }
}
