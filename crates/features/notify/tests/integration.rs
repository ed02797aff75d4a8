use wichtel_domain::config::{MailConfig, MailMode};
use wichtel_notify::{Notify, NotifyError, templates, transport_for};

fn capture_config() -> MailConfig {
    MailConfig { mode: MailMode::Capture, sender: "santa@example.com".to_owned() }
}

#[test]
fn capture_transport_keeps_sent_mail() {
    let notify = Notify::new(&capture_config());

    notify.send_confirmation("admin@x.com", "http://localhost/confirm/abc").unwrap();
    notify.send_assignment("a@x.com", "Alice", "Bob").unwrap();

    let outbox = notify.outbox().expect("capture transport has an outbox");
    assert_eq!(outbox.len(), 2);
    assert_eq!(outbox[0].recipient, "admin@x.com");
    assert_eq!(outbox[0].sender.as_deref(), Some("santa@example.com"));
    assert_eq!(outbox[1].recipient, "a@x.com");
}

#[test]
fn log_transport_has_no_outbox() {
    let cfg = MailConfig { mode: MailMode::Log, sender: "santa@example.com".to_owned() };
    let notify = Notify::new(&cfg);

    notify.send_assignment("a@x.com", "Alice", "Bob").unwrap();

    assert!(notify.outbox().is_none());
    assert_eq!(notify.status().service, "log");
}

#[test]
fn factory_selects_by_mode() {
    let capture = transport_for(&capture_config());
    assert_eq!(capture.status().service, "capture");
    assert_eq!(capture.status().mode, "development");

    let log = transport_for(&MailConfig { mode: MailMode::Log, sender: String::new() });
    assert_eq!(log.status().service, "log");
}

#[test]
fn unusable_recipients_are_rejected() {
    let notify = Notify::new(&capture_config());

    let err = notify.send_assignment("", "Alice", "Bob").unwrap_err();
    assert_eq!(err, NotifyError::MissingRecipient);

    let err = notify.send_assignment("not-an-address", "Alice", "Bob").unwrap_err();
    assert_eq!(err, NotifyError::InvalidRecipient("not-an-address".to_owned()));

    assert!(notify.outbox().expect("outbox present").is_empty());
}

#[test]
fn template_wording_is_stable() {
    let confirmation = templates::confirmation_email("admin@x.com", "http://x/confirm/t");
    assert_eq!(confirmation.subject, "Confirm Secret Santa Assignments");
    assert!(confirmation.body.contains("http://x/confirm/t"));
    assert!(confirmation.body.contains("expire after one use"));

    let assignment = templates::assignment_email("a@x.com", "Alice", "Bob");
    assert_eq!(assignment.subject, "Your Secret Santa Assignment!");
    assert!(assignment.body.contains("Hello Alice"));
    assert!(assignment.body.contains("You are the Secret Santa for: Bob!"));
}
