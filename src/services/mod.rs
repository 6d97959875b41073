pub mod notifications;

pub use notifications::{Messenger, NotificationService, NotifyError};
