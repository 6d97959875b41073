//! Notification system with pluggable messengers.
//!
//! `NotificationService` depends only on the `Messenger` trait. Concrete
//! channels (email, WhatsApp, Instagram) implement that trait and are
//! injected at construction, so new channels can be added without touching
//! the service.

mod channel;
mod email_messenger;
mod error;
mod instagram_messenger;
mod messenger;
mod whatsapp_messenger;

pub mod notification_service;

pub use channel::{ChannelKind, build_messenger};
pub use email_messenger::EmailMessenger;
pub use error::NotifyError;
pub use instagram_messenger::InstagramMessenger;
pub use messenger::{DeliveryError, Messenger};
pub use notification_service::NotificationService;
pub use whatsapp_messenger::WhatsAppMessenger;
