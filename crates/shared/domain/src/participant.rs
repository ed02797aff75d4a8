use serde::{Deserialize, Serialize};

/// A single registered participant of the gift exchange.
///
/// The `name` is the identity key within one exchange lifetime; the first
/// participant registered after a fresh start is the administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, unique within the exchange.
    pub name: String,
    /// Contact address, unique within the exchange.
    pub email: String,
    /// Set at creation time for the first participant; never reassigned.
    pub is_admin: bool,
}

impl Participant {
    /// Creates a participant record.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, is_admin: bool) -> Self {
        Self { name: name.into(), email: email.into(), is_admin }
    }
}
