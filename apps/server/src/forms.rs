//! Syntactic validation of registration input.
//!
//! The registry enforces identity invariants (uniqueness, admin assignment);
//! this module rejects input that is malformed before it gets there: oddly
//! shaped names, unroutable email addresses, and throwaway mail domains.

use thiserror::Error;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;

/// Domains of well-known throwaway mail providers.
const DISPOSABLE_DOMAINS: &[&str] = &["10minutemail.com", "tempmail.org", "guerrillamail.com"];

/// Rejections produced by input validation, rendered as user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum FormError {
    #[error("Name and email are required.")]
    Missing,
    #[error("Name must be between {NAME_MIN} and {NAME_MAX} characters.")]
    NameLength,
    #[error("Name may only contain letters, digits, spaces, hyphens and apostrophes.")]
    NameCharset,
    #[error("Please enter a valid email address.")]
    EmailShape,
    #[error("Disposable email addresses are not allowed.")]
    DisposableEmail,
}

/// Validates and normalizes a registration form.
///
/// Returns the cleaned `(name, email)` pair: the name with collapsed
/// whitespace, the email trimmed and lowercased.
pub(crate) fn validate_registration(name: &str, email: &str) -> Result<(String, String), FormError> {
    let name = normalize_name(name);
    let email = email.trim().to_lowercase();

    if name.is_empty() || email.is_empty() {
        return Err(FormError::Missing);
    }

    validate_name(&name)?;
    validate_email(&email)?;

    Ok((name, email))
}

/// Trims and collapses internal whitespace runs to single spaces.
pub(crate) fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn validate_name(name: &str) -> Result<(), FormError> {
    let length = name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&length) {
        return Err(FormError::NameLength);
    }
    if !name.chars().all(|ch| ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'')) {
        return Err(FormError::NameCharset);
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), FormError> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err(FormError::EmailShape);
    };
    if local.is_empty()
        || domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.contains(' ')
        || email.chars().filter(|&ch| ch == '@').count() != 1
    {
        return Err(FormError::EmailShape);
    }
    if DISPOSABLE_DOMAINS.contains(&domain) {
        return Err(FormError::DisposableEmail);
    }
    Ok(())
}
