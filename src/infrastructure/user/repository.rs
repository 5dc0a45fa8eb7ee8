//! In-memory user repository implementation

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{
    ensure_writable_email, ensure_writable_password_hash, User, UserRepository,
};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Users are keyed by email. Each mutating operation holds the write guard
/// across its uniqueness check and its write.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn not_found(email: &str) -> DomainError {
    DomainError::not_found(format!("User '{}' not found", email))
}

fn already_registered(email: &str) -> DomainError {
    DomainError::duplicate_identity(format!("Email '{}' already registered", email))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(user.email()) {
            return Err(already_registered(user.email()));
        }

        users.insert(user.email().to_string(), user.clone());

        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn update_password(&self, email: &str, password_hash: &str) -> Result<(), DomainError> {
        ensure_writable_password_hash(password_hash)?;

        let mut users = self.users.write().await;

        let current = users.get(email).ok_or_else(|| not_found(email))?;
        let updated = User::restore(
            current.id(),
            current.name(),
            current.email(),
            password_hash,
            current.created_at(),
            Utc::now(),
        )?;

        users.insert(email.to_string(), updated);

        Ok(())
    }

    async fn update_email(&self, old_email: &str, new_email: &str) -> Result<(), DomainError> {
        ensure_writable_email(new_email)?;

        let mut users = self.users.write().await;

        let mut user = users.get(old_email).cloned().ok_or_else(|| not_found(old_email))?;

        if old_email == new_email {
            return Ok(());
        }

        if users.contains_key(new_email) {
            return Err(already_registered(new_email));
        }

        user.change_email(new_email)?;
        users.remove(old_email);
        users.insert(new_email.to_string(), user);

        Ok(())
    }
}
