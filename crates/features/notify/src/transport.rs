use crate::error::NotifyError;
use crate::message::EmailMessage;
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info};
use wichtel_domain::config::{MailConfig, MailMode};

/// Status report a transport exposes for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportStatus {
    /// Implementation name.
    pub service: &'static str,
    /// `development` or `production`.
    pub mode: &'static str,
    /// Whether the transport can accept mail right now.
    pub available: bool,
}

/// The seam between notification logic and actual mail delivery.
///
/// Implementations must be cheap to call and must not block on external
/// services from request handlers. An SMTP-backed implementation would plug
/// in here; within this workspace delivery is either captured in memory or
/// emitted to the log.
pub trait MailTransport: Debug + Send + Sync {
    /// Hands a message to the transport.
    ///
    /// # Errors
    /// Returns [`NotifyError`] if the recipient address is empty or malformed.
    fn send(&self, message: EmailMessage) -> Result<(), NotifyError>;

    /// Reports the transport's identity and availability.
    fn status(&self) -> TransportStatus;

    /// Messages retained by the transport, when it captures them.
    fn outbox(&self) -> Option<Vec<EmailMessage>> {
        None
    }
}

/// Shared sanity check so no transport accepts an unroutable message.
fn validate_recipient(message: &EmailMessage) -> Result<(), NotifyError> {
    if message.recipient.is_empty() {
        return Err(NotifyError::MissingRecipient);
    }
    if !message.recipient.contains('@') {
        return Err(NotifyError::InvalidRecipient(message.recipient.clone()));
    }
    Ok(())
}

/// Development transport: keeps every accepted message in an in-process
/// outbox, inspectable over the dev route and in tests.
#[derive(Debug, Default)]
pub struct CaptureTransport {
    outbox: RwLock<Vec<EmailMessage>>,
}

impl CaptureTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MailTransport for CaptureTransport {
    fn send(&self, message: EmailMessage) -> Result<(), NotifyError> {
        validate_recipient(&message)?;
        debug!(recipient = %message.recipient, subject = %message.subject, "Captured outgoing mail");
        self.outbox.write().push(message);
        Ok(())
    }

    fn status(&self) -> TransportStatus {
        TransportStatus { service: "capture", mode: "development", available: true }
    }

    fn outbox(&self) -> Option<Vec<EmailMessage>> {
        Some(self.outbox.read().clone())
    }
}

/// Fallback transport that only records deliveries in the log.
#[derive(Debug, Default)]
pub struct LogTransport;

impl MailTransport for LogTransport {
    fn send(&self, message: EmailMessage) -> Result<(), NotifyError> {
        validate_recipient(&message)?;
        info!(
            recipient = %message.recipient,
            subject = %message.subject,
            "Outgoing mail (log transport, not delivered)"
        );
        Ok(())
    }

    fn status(&self) -> TransportStatus {
        TransportStatus { service: "log", mode: "production", available: true }
    }
}

/// Selects the transport implementation for the configured mail mode.
#[must_use]
pub fn transport_for(cfg: &MailConfig) -> Box<dyn MailTransport> {
    match cfg.mode {
        MailMode::Capture => {
            info!("Using capture transport for email (development mode)");
            Box::new(CaptureTransport::new())
        },
        MailMode::Log => {
            info!("Using log transport for email");
            Box::new(LogTransport)
        },
    }
}
