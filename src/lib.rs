//! notify-dip
//!
//! A notification service that depends only on the `Messenger` trait, with
//! email, WhatsApp and Instagram channels plugged in at construction.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod services;

pub use services::notifications::{
    DeliveryError, EmailMessenger, InstagramMessenger, Messenger, NotificationService,
    NotifyError, WhatsAppMessenger,
};

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
