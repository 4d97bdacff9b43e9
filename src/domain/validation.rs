//! Registration input validation.
//!
//! Rules are applied in a fixed order and the first failure wins, so a
//! request that is both missing fields and carries a short password reports
//! the missing fields.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::MIN_PASSWORD_LENGTH;

/// Permissive email shape check: something before '@', something after,
/// and a dot in the domain part. Not full RFC validation.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Validation failures for registration input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,

    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,

    #[error("Invalid email format.")]
    InvalidEmailFormat,
}

/// Validate registration input. Pure function, no side effects.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmailFormat);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(
            validate_registration("Ann", "ann@x.com", "secret1"),
            Ok(())
        );
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            validate_registration("", "ann@x.com", "secret1"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_missing_email() {
        assert_eq!(
            validate_registration("Ann", "", "secret1"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_missing_password() {
        assert_eq!(
            validate_registration("Ann", "ann@x.com", ""),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_short_password() {
        assert_eq!(
            validate_registration("Ann", "ann@x.com", "12345"),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn test_six_char_password_passes() {
        assert_eq!(
            validate_registration("Ann", "ann@x.com", "123456"),
            Ok(())
        );
    }

    #[test]
    fn test_invalid_email_shapes() {
        for email in [
            "plainaddress",
            "no-at-sign.com",
            "two@@x.com",
            "spaces in@x.com",
            "ann@x com",
            "ann@xcom",
            "@x.com",
            "ann@.",
        ] {
            assert_eq!(
                validate_registration("Ann", email, "secret1"),
                Err(ValidationError::InvalidEmailFormat),
                "expected {email:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_permissive_emails_accepted() {
        // Deliberately loose: anything shaped X@Y.Z is fine
        for email in ["a@b.c", "weird+tag@sub.domain.org", "1@2.3"] {
            assert_eq!(
                validate_registration("Ann", email, "secret1"),
                Ok(()),
                "expected {email:?} to be accepted"
            );
        }
    }

    #[test]
    fn test_missing_fields_reported_before_short_password() {
        // Ordering: presence check wins over the length check
        assert_eq!(
            validate_registration("", "ann@x.com", "123"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_short_password_reported_before_bad_email() {
        assert_eq!(
            validate_registration("Ann", "not-an-email", "123"),
            Err(ValidationError::PasswordTooShort)
        );
    }
}
