use crate::error::AccessError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use wichtel_domain::constants::TOKEN_LENGTH;
use wichtel_kernel::{SAFE_ALPHABET, safe_nanoid};

/// A giver→receiver mapping awaiting confirmation.
pub type Assignments = FxHashMap<String, String>;

/// In-memory store of assignment mappings keyed by single-use tokens.
///
/// A mapping is parked here between "assignments computed" and "organizer
/// clicked the confirmation link". Redemption removes the entry, so every
/// link works exactly once; a reset clears all outstanding links.
#[derive(Debug, Default)]
pub struct PendingAssignments {
    store: RwLock<FxHashMap<String, Assignments>>,
}

impl PendingAssignments {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks a mapping and returns the token that redeems it.
    pub fn issue(&self, assignments: Assignments) -> String {
        let token = safe_nanoid!(TOKEN_LENGTH);
        self.store.write().insert(token.clone(), assignments);
        token
    }

    /// Redeems a token, removing and returning its mapping.
    ///
    /// # Errors
    /// * [`AccessError::MalformedToken`] if the token fails the shape check.
    /// * [`AccessError::UnknownToken`] if it was never issued or already used.
    pub fn redeem(&self, token: &str) -> Result<Assignments, AccessError> {
        if !Self::is_well_formed(token) {
            return Err(AccessError::MalformedToken);
        }
        self.store.write().remove(token).ok_or(AccessError::UnknownToken)
    }

    /// Whether a token is currently outstanding.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.store.read().contains_key(token)
    }

    /// Number of outstanding confirmation links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Whether no confirmation links are outstanding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// Drops every outstanding link (used by the reset flow).
    pub fn clear(&self) {
        self.store.write().clear();
    }

    /// Cheap shape check run before any store lookup: issued tokens always
    /// have the expected length and draw from the safe alphabet.
    #[must_use]
    pub fn is_well_formed(token: &str) -> bool {
        token.len() == TOKEN_LENGTH && token.chars().all(|ch| SAFE_ALPHABET.contains(&ch))
    }
}
