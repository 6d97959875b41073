//! End-to-end tests for the notification service through the public API

use std::sync::{Arc, Mutex};
use std::thread;

use clap::ValueEnum;

use notify_dip::config::ChannelsConfig;
use notify_dip::services::notifications::{ChannelKind, build_messenger};
use notify_dip::{
    DeliveryError, EmailMessenger, Messenger, NotificationService, NotifyError, WhatsAppMessenger,
};

/// Records every delivery and answers with a fixed result
struct RecordingMessenger {
    calls: Mutex<Vec<(String, String)>>,
    response: Result<(), DeliveryError>,
}

impl RecordingMessenger {
    fn new(response: Result<(), DeliveryError>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response,
        })
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Messenger for RecordingMessenger {
    fn send(&self, destination: &str, message: &str) -> Result<(), DeliveryError> {
        self.calls
            .lock()
            .unwrap()
            .push((destination.to_owned(), message.to_owned()));
        self.response.clone()
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[test]
fn notify_records_exact_arguments() {
    let mock = RecordingMessenger::new(Ok(()));
    let service = NotificationService::new(mock.clone());

    assert_eq!(service.notify("user@test.com", "hi"), Ok(()));
    assert_eq!(
        mock.calls(),
        vec![("user@test.com".to_owned(), "hi".to_owned())]
    );
}

#[test]
fn validation_short_circuits_before_delivery() {
    let mock = RecordingMessenger::new(Ok(()));
    let service = NotificationService::new(mock.clone());

    assert_eq!(service.notify("", "anything"), Err(NotifyError::EmptyDestination));
    assert_eq!(service.notify("anything", ""), Err(NotifyError::EmptyMessage));
    assert_eq!(service.notify("", ""), Err(NotifyError::EmptyDestination));
    assert!(mock.calls().is_empty());
}

#[test]
fn delivery_failure_is_returned_verbatim() {
    let failure = DeliveryError::new("recording", "quota exceeded");
    let mock = RecordingMessenger::new(Err(failure.clone()));
    let service = NotificationService::new(mock.clone());

    match service.notify("user@test.com", "hi") {
        Err(NotifyError::Delivery(inner)) => assert_eq!(inner, failure),
        other => panic!("expected delivery failure, got {:?}", other),
    }
    assert_eq!(mock.calls().len(), 1);
}

#[test]
fn services_bound_to_different_messengers_are_independent() {
    let email = RecordingMessenger::new(Ok(()));
    let chat = RecordingMessenger::new(Err(DeliveryError::new("recording", "offline")));
    let email_service = NotificationService::new(email.clone());
    let chat_service = NotificationService::new(chat.clone());

    assert!(email_service.notify("a@b.cl", "one").is_ok());
    assert!(email_service.notify("c@d.cl", "two").is_ok());
    assert!(chat_service.notify("+56911111111", "three").is_err());

    assert_eq!(email.calls().len(), 2);
    assert_eq!(
        chat.calls(),
        vec![("+56911111111".to_owned(), "three".to_owned())]
    );
}

#[test]
fn service_is_shareable_across_threads() {
    let mock = RecordingMessenger::new(Ok(()));
    let service = NotificationService::new(mock.clone());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let service = service.clone();
            thread::spawn(move || service.notify(&format!("user{}@test.com", i), "hi"))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
    assert_eq!(mock.calls().len(), 4);
}

#[test]
fn concrete_channels_are_substitutable() {
    let services = [
        NotificationService::with_messenger(EmailMessenger::new("soporte@miempresa.cl")),
        NotificationService::with_messenger(WhatsAppMessenger::new("+56912345678")),
    ];

    for service in &services {
        assert!(service.notify("someone", "hello").is_ok());
        assert_eq!(service.notify("", "hello"), Err(NotifyError::EmptyDestination));
    }
    assert_eq!(services[0].channel(), "email");
    assert_eq!(services[1].channel(), "whatsapp");
}

#[test]
fn factory_builds_every_channel_from_config() {
    let channels = ChannelsConfig::default();

    for kind in ChannelKind::value_variants() {
        let service = NotificationService::new(build_messenger(*kind, &channels).unwrap());
        assert_eq!(service.channel(), kind.as_str());
        assert!(service.notify("dest", "msg").is_ok());
    }
}
