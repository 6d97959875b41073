//! Notification service.
//!
//! Validates the destination and message, then hands delivery to the
//! messenger it was bound to at construction.

use super::error::NotifyError;
use super::messenger::Messenger;
use std::sync::Arc;

/// Notification service bound to exactly one messenger
///
/// The messenger is fixed for the lifetime of the service; to send through a
/// different channel, construct another service.
#[derive(Clone)]
pub struct NotificationService {
    messenger: Arc<dyn Messenger>,
}

impl NotificationService {
    /// Creates a new NotificationService
    ///
    /// # Arguments
    /// * `messenger` - The channel every notification is delivered through
    pub fn new(messenger: Arc<dyn Messenger>) -> Self {
        Self { messenger }
    }

    /// Creates a service that takes sole ownership of `messenger`
    pub fn with_messenger<M: Messenger + 'static>(messenger: M) -> Self {
        Self::new(Arc::new(messenger))
    }

    /// Name of the bound channel
    pub fn channel(&self) -> &'static str {
        self.messenger.name()
    }

    /// Sends `message` to `destination` through the bound messenger
    ///
    /// The destination is checked before the message, so a call with both
    /// empty reports `EmptyDestination`. The messenger is only called once
    /// both are non-empty, and its result is returned unchanged.
    ///
    /// # Errors
    /// - `EmptyDestination` if `destination` is empty
    /// - `EmptyMessage` if `message` is empty
    /// - `Delivery` carrying the messenger's own failure
    pub fn notify(&self, destination: &str, message: &str) -> Result<(), NotifyError> {
        if destination.is_empty() {
            return Err(NotifyError::EmptyDestination);
        }

        if message.is_empty() {
            return Err(NotifyError::EmptyMessage);
        }

        self.messenger.send(destination, message)?;
        Ok(())
    }
}

impl std::fmt::Debug for NotificationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationService")
            .field("channel", &self.messenger.name())
            .finish()
    }
}
