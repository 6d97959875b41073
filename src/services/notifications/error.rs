//! Notification error types

use super::messenger::DeliveryError;
use thiserror::Error;

/// Errors returned by [`NotificationService::notify`](super::NotificationService::notify)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// Destination argument was the empty string
    #[error("destination cannot be empty")]
    EmptyDestination,

    /// Message argument was the empty string
    #[error("message cannot be empty")]
    EmptyMessage,

    /// Failure reported by the bound messenger, passed through untouched
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

impl NotifyError {
    /// Whether the error was raised before any delivery attempt
    pub fn is_validation(&self) -> bool {
        matches!(self, NotifyError::EmptyDestination | NotifyError::EmptyMessage)
    }
}
