//! User validation utilities

use std::fmt;

use thiserror::Error;

/// Minimum number of characters in a raw credential
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Call site an email was rejected at
///
/// Creation and change report the same failure with different wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailContext {
    OnCreate,
    OnChange,
}

impl fmt::Display for EmailContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnCreate => write!(f, "invalid email"),
            Self::OnChange => write!(f, "invalid email format"),
        }
    }
}

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("request cannot be nil")]
    NilRequest,

    #[error("name cannot be empty")]
    EmptyName,

    #[error("{0}")]
    InvalidEmail(EmailContext),

    #[error("password must have at least {0} characters")]
    WeakCredential(usize),

    #[error("password cannot be empty")]
    EmptyCredential,
}

/// Validate a display name
///
/// Rules:
/// - Cannot be empty after trimming surrounding whitespace
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    Ok(())
}

/// Validate an email address
///
/// Rules:
/// - Must contain an `@` separator
pub fn validate_email(email: &str, context: EmailContext) -> Result<(), UserValidationError> {
    if !email.contains('@') {
        return Err(UserValidationError::InvalidEmail(context));
    }

    Ok(())
}

/// Validate a raw password
///
/// Rules:
/// - Minimum 6 characters, counted as Unicode scalar values
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::WeakCredential(MIN_PASSWORD_LENGTH));
    }

    Ok(())
}

/// Validate that a password was supplied at all
///
/// Whitespace-only input counts as absent.
pub fn validate_password_present(password: &str) -> Result<(), UserValidationError> {
    if password.trim().is_empty() {
        return Err(UserValidationError::EmptyCredential);
    }

    Ok(())
}
