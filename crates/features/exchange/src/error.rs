use thiserror::Error;
use wichtel_domain::constants::MIN_PARTICIPANTS;

/// Recoverable failures of registry and assignment operations.
///
/// Every variant renders to the user-facing message the web layer surfaces;
/// none of these is fatal and none crosses the crate boundary as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// An add or remove was attempted with an empty field.
    #[error("Name and email are required.")]
    MissingField,
    /// A participant with this name is already registered.
    #[error("A participant with the name '{0}' was already added.")]
    DuplicateName(String),
    /// A participant with this email is already registered.
    #[error("A participant with the email '{0}' was already added.")]
    DuplicateEmail(String),
    /// Removal was attempted for an unknown participant.
    #[error("Participant '{0}' not found.")]
    NotFound(String),
    /// Assignment was requested with too few participants.
    #[error("Need at least {MIN_PARTICIPANTS} participants to assign Secret Santas.")]
    InsufficientParticipants,
}
