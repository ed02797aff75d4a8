use thiserror::Error;

/// Failures while validating or redeeming confirmation tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The token does not look like one we ever issued.
    #[error("Invalid confirmation token format.")]
    MalformedToken,
    /// The token was never issued, already redeemed, or cleared by a reset.
    #[error("Invalid or expired confirmation link.")]
    UnknownToken,
}
