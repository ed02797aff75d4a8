//! # Exchange Feature Slice
//!
//! The core of the application: a participant registry with identity
//! invariants ([`SecretSanta`]) and the assignment engine that derives a
//! giver→receiver derangement from it ([`assign::assign`]).
//!
//! The registry itself is a plain single-threaded structure; the [`Exchange`]
//! slice wraps it in a lock so the multi-threaded web layer can serialize
//! access. Nothing in this crate performs I/O or logging beyond the slice
//! initialization notice.

pub mod assign;
mod error;
mod game;

pub use crate::error::ExchangeError;
pub use crate::game::SecretSanta;

use parking_lot::RwLock;
use std::any::Any;
use wichtel_domain::registry::{FeatureSlice, InitializedSlice};

/// Exchange feature state: one registry instance behind a lock.
#[derive(Debug, Default)]
pub struct Exchange {
    game: RwLock<SecretSanta>,
}

impl Exchange {
    /// Creates a slice with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with shared access to the registry.
    pub fn read<R>(&self, f: impl FnOnce(&SecretSanta) -> R) -> R {
        f(&self.game.read())
    }

    /// Runs `f` with exclusive access to the registry.
    ///
    /// Multi-step operations (policy check plus mutation) stay atomic with
    /// respect to other requests as long as they happen inside one closure.
    pub fn write<R>(&self, f: impl FnOnce(&mut SecretSanta) -> R) -> R {
        f(&mut self.game.write())
    }
}

impl FeatureSlice for Exchange {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the exchange feature.
///
/// # Errors
///
/// Infallible today; the signature leaves room for config-dependent setup.
pub fn init() -> Result<InitializedSlice, ExchangeError> {
    tracing::info!("Exchange slice initialized");

    Ok(InitializedSlice::new(Exchange::new()))
}
