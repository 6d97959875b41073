//! Channel selection and messenger construction from configuration.

use super::email_messenger::EmailMessenger;
use super::instagram_messenger::InstagramMessenger;
use super::messenger::Messenger;
use super::whatsapp_messenger::WhatsAppMessenger;
use crate::config::ChannelsConfig;
use crate::error::AppResult;
use clap::ValueEnum;
use std::sync::Arc;

/// Supported delivery channels
///
/// Parsed from `--channel`; `wa` and `ig` are accepted as short names.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Email,
    #[value(name = "whatsapp", alias = "wa")]
    WhatsApp,
    #[value(alias = "ig")]
    Instagram,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Email => "email",
            ChannelKind::WhatsApp => "whatsapp",
            ChannelKind::Instagram => "instagram",
        }
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Creates a messenger for `kind` using the origin configured in `channels`
///
/// Returns `Arc<dyn Messenger>` for dynamic dispatch. The messenger's own
/// configuration is validated before it is handed out.
pub fn build_messenger(
    kind: ChannelKind,
    channels: &ChannelsConfig,
) -> AppResult<Arc<dyn Messenger>> {
    let messenger: Arc<dyn Messenger> = match kind {
        ChannelKind::Email => Arc::new(EmailMessenger::new(channels.email.from_address.clone())),
        ChannelKind::WhatsApp => {
            Arc::new(WhatsAppMessenger::new(channels.whatsapp.from_number.clone()))
        }
        ChannelKind::Instagram => Arc::new(InstagramMessenger::new(
            channels.instagram.user_handle.clone(),
        )),
    };

    messenger.validate_config()?;
    Ok(messenger)
}
