//! # Notify Feature Slice
//!
//! Everything this application sends by email: the message type, the two
//! templates (organizer confirmation and per-giver assignment), and the
//! [`MailTransport`] seam with its capture/log implementations.

mod error;
mod message;
pub mod templates;
mod transport;

pub use crate::error::NotifyError;
pub use crate::message::EmailMessage;
pub use crate::transport::{CaptureTransport, LogTransport, MailTransport, TransportStatus, transport_for};

use std::any::Any;
use wichtel_domain::config::MailConfig;
use wichtel_domain::registry::{FeatureSlice, InitializedSlice};

/// Notify feature state: the selected transport plus the default sender.
#[derive(Debug)]
pub struct Notify {
    transport: Box<dyn MailTransport>,
    sender: String,
}

impl Notify {
    /// Builds the slice from the mail configuration.
    #[must_use]
    pub fn new(cfg: &MailConfig) -> Self {
        Self { transport: transport_for(cfg), sender: cfg.sender.clone() }
    }

    /// Sends the organizer the confirmation link for a computed mapping.
    ///
    /// # Errors
    /// Returns [`NotifyError`] if the recipient address is unusable.
    pub fn send_confirmation(&self, recipient: &str, link: &str) -> Result<(), NotifyError> {
        let mut message = templates::confirmation_email(recipient, link);
        message.sender = Some(self.sender.clone());
        self.transport.send(message)
    }

    /// Tells one giver who they are gifting.
    ///
    /// # Errors
    /// Returns [`NotifyError`] if the recipient address is unusable.
    pub fn send_assignment(
        &self,
        recipient: &str,
        giver_name: &str,
        receiver_name: &str,
    ) -> Result<(), NotifyError> {
        let mut message = templates::assignment_email(recipient, giver_name, receiver_name);
        message.sender = Some(self.sender.clone());
        self.transport.send(message)
    }

    /// The active transport's status report.
    #[must_use]
    pub fn status(&self) -> TransportStatus {
        self.transport.status()
    }

    /// Captured messages, when the active transport keeps an outbox.
    #[must_use]
    pub fn outbox(&self) -> Option<Vec<EmailMessage>> {
        self.transport.outbox()
    }
}

impl FeatureSlice for Notify {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the notify feature.
///
/// # Errors
///
/// Infallible today; the signature leaves room for config-dependent setup.
pub fn init(cfg: &MailConfig) -> Result<InitializedSlice, NotifyError> {
    tracing::info!(mode = ?cfg.mode, "Notify slice initialized");

    Ok(InitializedSlice::new(Notify::new(cfg)))
}
