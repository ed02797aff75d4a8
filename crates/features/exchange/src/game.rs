//! # Participant Registry
//!
//! [`SecretSanta`] owns the authoritative participant set of one running
//! exchange, the name→email index derived from it, and the last computed
//! assignment mapping. All operations are synchronous in-memory mutations;
//! callers that share an instance across threads wrap it themselves (see the
//! [`Exchange`](crate::Exchange) slice).

use crate::assign;
use crate::error::ExchangeError;
use fxhash::FxHashMap;
use wichtel_domain::Participant;

/// In-memory state of one Secret Santa exchange.
///
/// Invariants maintained across every operation:
/// * participant names and emails are unique,
/// * the name→email index mirrors the participant sequence exactly,
/// * at most one participant carries the admin flag, assigned at creation
///   of the first participant since the last [`reset`](Self::reset),
/// * removing a participant drops any computed mapping (it was produced for
///   a different participant set).
#[derive(Debug, Clone, Default)]
pub struct SecretSanta {
    participants: Vec<Participant>,
    emails: FxHashMap<String, String>,
    assignments: FxHashMap<String, String>,
}

impl SecretSanta {
    /// Creates an empty exchange.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a participant.
    ///
    /// The first participant of a fresh exchange becomes the administrator.
    /// On success the returned message says who was added (and whether as
    /// administrator); on failure the registry is left untouched.
    ///
    /// # Errors
    /// * [`ExchangeError::MissingField`] if `name` or `email` is empty.
    /// * [`ExchangeError::DuplicateName`] if the name is already registered.
    /// * [`ExchangeError::DuplicateEmail`] if the email is already registered.
    pub fn add_participant(&mut self, name: &str, email: &str) -> Result<String, ExchangeError> {
        if name.is_empty() || email.is_empty() {
            return Err(ExchangeError::MissingField);
        }
        if self.emails.contains_key(name) {
            return Err(ExchangeError::DuplicateName(name.to_owned()));
        }
        // The email check runs against the index values, not its keys.
        if self.emails.values().any(|registered| registered == email) {
            return Err(ExchangeError::DuplicateEmail(email.to_owned()));
        }

        let is_admin = self.participants.is_empty();
        self.participants.push(Participant::new(name, email, is_admin));
        self.emails.insert(name.to_owned(), email.to_owned());

        let admin_suffix = if is_admin { " (Administrator)" } else { "" };
        Ok(format!("Successfully added {name}{admin_suffix}!"))
    }

    /// Removes a participant by name.
    ///
    /// Dropping a participant invalidates any previously computed mapping,
    /// so the stored assignments are cleared as well. Admin-removal policy
    /// is deliberately not enforced here; the registry only guards identity
    /// invariants and leaves authorization to its caller.
    ///
    /// # Errors
    /// * [`ExchangeError::MissingField`] if `name` is empty.
    /// * [`ExchangeError::NotFound`] if no such participant exists.
    pub fn remove_participant(&mut self, name: &str) -> Result<String, ExchangeError> {
        if name.is_empty() {
            return Err(ExchangeError::MissingField);
        }
        if !self.emails.contains_key(name) {
            return Err(ExchangeError::NotFound(name.to_owned()));
        }

        self.participants.retain(|p| p.name != name);
        self.emails.remove(name);
        self.assignments.clear();

        Ok(format!("Successfully removed {name}!"))
    }

    /// Computes and stores a fresh giver→receiver mapping.
    ///
    /// With fewer than two participants this is a no-op that leaves any
    /// previously stored mapping in place. That behavior is intentional and
    /// relied upon: a speculative call must not erase a valid mapping.
    pub fn assign_santas(&mut self) {
        let names: Vec<String> = self.participants.iter().map(|p| p.name.clone()).collect();
        if let Some(mapping) = assign::assign(&names) {
            self.assignments = mapping;
        }
    }

    /// Replaces the stored mapping with one produced earlier by the engine.
    ///
    /// Used by the confirmation flow when a previously issued mapping is
    /// finalized: the confirmed mapping wins over whatever was recomputed in
    /// the meantime.
    pub fn store_assignments(&mut self, assignments: FxHashMap<String, String>) {
        self.assignments = assignments;
    }

    /// Erases participant identities while keeping the computed mapping.
    ///
    /// This implements the disclosure flow: once every giver has been told
    /// their receiver, the identity records are dropped so the mapping can
    /// no longer be correlated with live participant data.
    pub fn clear_participants(&mut self) {
        self.participants.clear();
        self.emails.clear();
    }

    /// Returns the exchange to its initial state: no participants, no index,
    /// no mapping. The next participant added becomes administrator again.
    pub fn reset(&mut self) {
        self.participants.clear();
        self.emails.clear();
        self.assignments.clear();
    }

    /// Registered participants in insertion order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Name→email index.
    #[must_use]
    pub const fn emails(&self) -> &FxHashMap<String, String> {
        &self.emails
    }

    /// The current giver→receiver mapping; empty before the first successful
    /// assignment and after invalidation.
    #[must_use]
    pub const fn assignments(&self) -> &FxHashMap<String, String> {
        &self.assignments
    }

    /// The administrator participant, if one is currently registered.
    #[must_use]
    pub fn admin(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_admin)
    }

    /// Number of registered participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether no participants are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
