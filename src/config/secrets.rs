//! Secret handling utilities.
//!
//! Re-exports secrecy types and provides a display helper that reports
//! whether a secret is present without revealing it.

pub use secrecy::{ExposeSecret, SecretString};

/// Placeholder shown in place of a secret value that is present.
pub const REDACTED: &str = "[REDACTED]";

/// Placeholder shown when no secret was configured.
pub const UNSET: &str = "<unset>";

/// Describe an optional secret for humans.
pub fn redacted(secret: Option<&SecretString>) -> &'static str {
    match secret {
        Some(_) => REDACTED,
        None => UNSET,
    }
}
