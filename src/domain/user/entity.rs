//! User entity and related types

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::validation::{
    validate_email, validate_name, validate_password, EmailContext, UserValidationError,
};
use crate::domain::traits::PasswordHasher;
use crate::domain::DomainError;

/// A registered account
///
/// Every live instance satisfies three invariants: the name is non-empty after
/// trimming, the email contains `@`, and the raw password it was given was at
/// least six characters long. Only the hashed password is retained.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Surrogate storage identifier, stable across email changes
    id: Uuid,
    /// Display name, trimmed
    name: String,
    /// Unique identity key, compared exactly as supplied
    email: String,
    /// Hashed password - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    ///
    /// Checks name, then email, then password length, and reports the first
    /// violation. The raw password is hashed only once all checks pass.
    pub fn create<H>(
        name: &str,
        email: impl Into<String>,
        password: &str,
        hasher: &H,
    ) -> Result<Self, DomainError>
    where
        H: PasswordHasher + ?Sized,
    {
        let email = email.into();

        validate_name(name)?;
        validate_email(&email, EmailContext::OnCreate)?;
        validate_password(password)?;

        let password_hash = hasher.hash(password)?;
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a user from persisted state
    ///
    /// The raw password is long gone, so only the name and email invariants
    /// can be re-checked; a record failing them is reported as a backend fault.
    pub fn restore(
        id: Uuid,
        name: &str,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let email = email.into();
        let password_hash = password_hash.into();

        validate_name(name)
            .and_then(|_| validate_email(&email, EmailContext::OnCreate))
            .map_err(|e| DomainError::backend(format!("Corrupt user record '{}': {}", id, e)))?;

        if password_hash.is_empty() {
            return Err(DomainError::backend(format!(
                "Corrupt user record '{}': empty password hash",
                id
            )));
        }

        Ok(Self {
            id,
            name: name.trim().to_string(),
            email,
            password_hash,
            created_at,
            updated_at,
        })
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Check a raw password against the stored hash
    pub fn verify_password<H>(&self, password: &str, hasher: &H) -> bool
    where
        H: PasswordHasher + ?Sized,
    {
        hasher.verify(password, &self.password_hash)
    }

    // Mutators

    /// Replace the email after checking its format
    ///
    /// On failure the user is left untouched.
    pub fn change_email(&mut self, new_email: impl Into<String>) -> Result<(), UserValidationError> {
        let new_email = new_email.into();
        validate_email(&new_email, EmailContext::OnChange)?;

        self.email = new_email;
        self.touch();
        Ok(())
    }

    /// Replace the password after checking its length
    ///
    /// On failure, including a hashing failure, the user is left untouched.
    pub fn change_password<H>(&mut self, new_password: &str, hasher: &H) -> Result<(), DomainError>
    where
        H: PasswordHasher + ?Sized,
    {
        validate_password(new_password)?;
        let password_hash = hasher.hash(new_password)?;

        self.password_hash = password_hash;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[hidden]")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
