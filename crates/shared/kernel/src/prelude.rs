//! Convenience re-exports for downstream crates.

pub use crate::config::load_config;
pub use crate::server::{AppState, AppStateBuilder, StateError};
pub use wichtel_domain::config::AppConfig;
pub use wichtel_domain::registry::{FeatureSlice, InitializedSlice};
