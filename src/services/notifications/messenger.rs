//! Core messenger trait and delivery failure type.
//!
//! `Messenger` is the only thing the notification service knows about a
//! channel. Concrete channels (email, WhatsApp, Instagram, ...) implement it
//! and are injected into the service at construction time.

use crate::error::AppResult;
use thiserror::Error;

/// Failure reported by a channel while delivering a message.
///
/// The notification service never inspects this value; it is handed back to
/// the caller exactly as the channel produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{channel} delivery failed: {reason}")]
pub struct DeliveryError {
    /// Name of the channel that failed (see [`Messenger::name`])
    pub channel: String,
    /// Channel-defined description of the failure
    pub reason: String,
}

impl DeliveryError {
    /// Creates a new delivery error for the given channel
    pub fn new<C: Into<String>, R: Into<String>>(channel: C, reason: R) -> Self {
        Self {
            channel: channel.into(),
            reason: reason.into(),
        }
    }
}

/// Trait for delivery channels.
///
/// All messengers must be Send + Sync so a bound service can be shared
/// between threads when the channel allows it.
///
/// # Example Implementation
/// ```ignore
/// pub struct SmsMessenger {
///     from_number: String,
/// }
///
/// impl Messenger for SmsMessenger {
///     fn send(&self, destination: &str, message: &str) -> Result<(), DeliveryError> {
///         // Implementation here
///     }
///
///     fn name(&self) -> &'static str {
///         "sms"
///     }
/// }
/// ```
pub trait Messenger: Send + Sync {
    /// Delivers `message` to `destination`.
    ///
    /// No constraints are enforced on the arguments at this layer; callers
    /// (the notification service) are responsible for validation.
    fn send(&self, destination: &str, message: &str) -> Result<(), DeliveryError>;

    /// Returns the channel name for logging/debugging
    fn name(&self) -> &'static str;

    /// Validates the channel's own configuration (optional, default no-op)
    fn validate_config(&self) -> AppResult<()> {
        Ok(())
    }
}
