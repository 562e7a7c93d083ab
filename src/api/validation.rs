//! Explicit input validation executed before dispatch
//!
//! Every path or body parameter that carries an email is checked here; a
//! malformed value short-circuits the request with a 400 before the service
//! is ever called.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{DomainError, UserPayload};

// Permissive on purpose: one '@', non-empty local part and domain, no whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("invalid email regex"));

/// Reject the request unless `value` looks like an email address
pub fn require_email(value: &str) -> Result<(), DomainError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "'{}' must be a well-formed email address",
            value
        )))
    }
}

/// Full constraint check for a User payload (create user, /validateBody)
pub fn validate_user_payload(payload: &UserPayload) -> Result<(), DomainError> {
    require_email(&payload.email)?;
    if payload.name.trim().is_empty() {
        return Err(DomainError::Validation(
            "name must not be blank".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(require_email("alice@example.com").is_ok());
        assert!(require_email("a@b").is_ok());
        assert!(require_email("first.last+tag@sub.domain.org").is_ok());
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert!(require_email("alice.example.com").is_err());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(require_email("").is_err());
        assert!(require_email("alice @example.com").is_err());
        assert!(require_email("@example.com").is_err());
        assert!(require_email("alice@").is_err());
    }

    #[test]
    fn payload_requires_valid_email_and_name() {
        let ok = UserPayload {
            email: "bob@example.com".to_string(),
            name: "Bob".to_string(),
        };
        assert!(validate_user_payload(&ok).is_ok());

        let bad_email = UserPayload {
            email: "bob.example.com".to_string(),
            name: "Bob".to_string(),
        };
        assert!(validate_user_payload(&bad_email).is_err());

        let blank_name = UserPayload {
            email: "bob@example.com".to_string(),
            name: "   ".to_string(),
        };
        assert!(validate_user_payload(&blank_name).is_err());
    }
}
