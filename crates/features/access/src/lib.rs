//! # Access Feature Slice
//!
//! Confirmation-token management for the assignment workflow: a computed
//! mapping is parked behind a single-use token, mailed to the organizer as a
//! link, and only acted upon once the link is visited.

mod error;
mod tokens;

pub use crate::error::AccessError;
pub use crate::tokens::{Assignments, PendingAssignments};

use std::any::Any;
use wichtel_domain::registry::{FeatureSlice, InitializedSlice};

/// Access feature state.
#[derive(Debug, Default)]
pub struct Access {
    pending: PendingAssignments,
}

impl Access {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending-assignment token store.
    #[must_use]
    pub const fn pending(&self) -> &PendingAssignments {
        &self.pending
    }
}

impl FeatureSlice for Access {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the access feature.
///
/// # Errors
///
/// Infallible today; the signature leaves room for config-dependent setup.
pub fn init() -> Result<InitializedSlice, AccessError> {
    tracing::info!("Access slice initialized");

    Ok(InitializedSlice::new(Access::new()))
}
