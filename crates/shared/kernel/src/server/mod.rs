//! Shared server plumbing: application state and the system router.

mod health;
pub mod router;
mod state;

pub use state::{AppState, AppStateBuilder, StateError};
