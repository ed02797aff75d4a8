//! Facade crate for the Secret Santa features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register feature slices; extend as new slices appear.

pub use wichtel_domain as domain;
use wichtel_domain::config::AppConfig;
pub use wichtel_kernel as kernel;

pub mod server {
    pub mod router {
        pub use wichtel_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use wichtel_access as access;
    pub use wichtel_exchange as exchange;
    pub use wichtel_notify as notify;

    /// Features compiled into this build.
    pub const ENABLED: &[&str] = &["exchange", "access", "notify"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &AppConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Exchange (participants and assignments)
    slices.push(features::exchange::init()?);

    // Access (confirmation tokens)
    slices.push(features::access::init()?);

    // Notify (outgoing mail)
    slices.push(features::notify::init(&config.mail)?);

    Ok(slices)
}
