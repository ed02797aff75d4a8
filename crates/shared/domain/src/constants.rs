//! Shared constants used across slices.

/// OpenAPI tag for system endpoints (health etc.).
pub const SYSTEM_TAG: &str = "system";
/// OpenAPI tag for exchange endpoints.
pub const EXCHANGE_TAG: &str = "exchange";

/// Minimum number of participants required before assignment.
pub const MIN_PARTICIPANTS: usize = 2;

/// Length of confirmation tokens issued for pending assignments.
pub const TOKEN_LENGTH: usize = 24;
