//! User repository trait
//!
//! The email is the identity key. Implementations must make the uniqueness
//! check and the write of `create` and `update_email` a single atomic step, so
//! that of two racing registrations for one email exactly one fails with
//! [`DomainError::DuplicateIdentity`]. Credential replacement must be atomic
//! with respect to readers of the same record.
//!
//! Adapters never write a value they could not read back: a new email must
//! pass the change-time format check and a password hash must be non-empty.
//! Both checks run before any write, see [`ensure_writable_email`] and
//! [`ensure_writable_password_hash`].
//!
//! Every operation is an ordinary future: dropping it cancels the underlying
//! I/O. Deadlines are applied from the outside, see
//! `infrastructure::user::TimeoutUserRepository`.

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use super::validation::{validate_email, EmailContext};
use crate::domain::DomainError;

/// Reject an email that a later lookup would treat as a corrupt record
pub fn ensure_writable_email(email: &str) -> Result<(), DomainError> {
    validate_email(email, EmailContext::OnChange)?;
    Ok(())
}

/// Reject an empty password hash
pub fn ensure_writable_password_hash(password_hash: &str) -> Result<(), DomainError> {
    if password_hash.is_empty() {
        return Err(DomainError::credential("Password hash cannot be empty"));
    }
    Ok(())
}

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Persist a new user
    ///
    /// Fails with `DuplicateIdentity` when the email is already registered;
    /// never overwrites.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Exact-match lookup on the email
    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Overwrite the stored password hash of the user with this email
    ///
    /// Fails with `NotFound` when no such user exists and with `Credential`
    /// when the hash is empty.
    async fn update_password(&self, email: &str, password_hash: &str) -> Result<(), DomainError>;

    /// Move a user from `old_email` to `new_email`
    ///
    /// Fails with `NotFound` when `old_email` is unknown and with
    /// `DuplicateIdentity` when `new_email` belongs to another user. A
    /// malformed `new_email` fails with `Validation` before anything is written.
    async fn update_email(&self, old_email: &str, new_email: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Repository whose every operation fails as a backend fault
    #[derive(Debug, Default)]
    pub struct FailingUserRepository;

    fn failure() -> DomainError {
        DomainError::backend("Mock repository configured to fail")
    }

    #[async_trait]
    impl UserRepository for FailingUserRepository {
        async fn create(&self, _user: User) -> Result<User, DomainError> {
            Err(failure())
        }

        async fn get_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
            Err(failure())
        }

        async fn update_password(
            &self,
            _email: &str,
            _password_hash: &str,
        ) -> Result<(), DomainError> {
            Err(failure())
        }

        async fn update_email(&self, _old_email: &str, _new_email: &str) -> Result<(), DomainError> {
            Err(failure())
        }
    }
}
