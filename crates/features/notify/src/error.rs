use thiserror::Error;

/// Failures while preparing or handing off an email.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// No recipient address was supplied.
    #[error("Email address is required.")]
    MissingRecipient,
    /// The recipient address does not look like an email address.
    #[error("Invalid email format: '{0}'.")]
    InvalidRecipient(String),
}
