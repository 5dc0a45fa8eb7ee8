use thiserror::Error;

use super::user::UserValidationError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] UserValidationError),

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Duplicate identity: {message}")]
    DuplicateIdentity { message: String },

    #[error("Backend failure: {message}")]
    BackendFailure { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn duplicate_identity(message: impl Into<String>) -> Self {
        Self::DuplicateIdentity {
            message: message.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::BackendFailure {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    /// The validation failure wrapped by this error, if any
    pub fn as_validation(&self) -> Option<&UserValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
