use serde::Serialize;

/// An outgoing email, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Sender override; the transport's default sender applies when `None`.
    pub sender: Option<String>,
}

impl EmailMessage {
    /// Creates a message using the transport's default sender.
    #[must_use]
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self { recipient: recipient.into(), subject: subject.into(), body: body.into(), sender: None }
    }
}
