//! Deadline-bounded user repository decorator

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// Wraps a repository so that no operation outlives `timeout`
///
/// An expired deadline drops the inner future, aborting its I/O, and is
/// reported as a backend failure.
#[derive(Debug, Clone)]
pub struct TimeoutUserRepository<R> {
    inner: R,
    timeout: Duration,
}

impl<R: UserRepository> TimeoutUserRepository<R> {
    pub fn new(inner: R, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn bounded<T, F>(&self, operation: &'static str, future: F) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>> + Send,
    {
        match tokio::time::timeout(self.timeout, future).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    operation,
                    timeout = ?self.timeout,
                    "User repository operation timed out"
                );
                Err(DomainError::backend(format!(
                    "{} timed out after {:?}",
                    operation, self.timeout
                )))
            }
        }
    }
}

#[async_trait]
impl<R: UserRepository> UserRepository for TimeoutUserRepository<R> {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.bounded("create", self.inner.create(user)).await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.bounded("get_by_email", self.inner.get_by_email(email)).await
    }

    async fn update_password(&self, email: &str, password_hash: &str) -> Result<(), DomainError> {
        self.bounded("update_password", self.inner.update_password(email, password_hash))
            .await
    }

    async fn update_email(&self, old_email: &str, new_email: &str) -> Result<(), DomainError> {
        self.bounded("update_email", self.inner.update_email(old_email, new_email))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::MockPasswordHasher;
    use crate::infrastructure::user::InMemoryUserRepository;

    /// Repository whose lookups and inserts never complete
    ///
    /// An insert stalls before reaching the backing store.
    #[derive(Debug, Default)]
    struct StalledRepository {
        inner: InMemoryUserRepository,
    }

    #[async_trait]
    impl UserRepository for StalledRepository {
        async fn create(&self, user: User) -> Result<User, DomainError> {
            std::future::pending::<()>().await;
            self.inner.create(user).await
        }

        async fn get_by_email(&self, _email: &str) -> Result<Option<User>, DomainError> {
            std::future::pending().await
        }

        async fn update_password(
            &self,
            email: &str,
            password_hash: &str,
        ) -> Result<(), DomainError> {
            self.inner.update_password(email, password_hash).await
        }

        async fn update_email(&self, old_email: &str, new_email: &str) -> Result<(), DomainError> {
            self.inner.update_email(old_email, new_email).await
        }
    }

    #[tokio::test]
    async fn test_passes_through_results() {
        let repo =
            TimeoutUserRepository::new(InMemoryUserRepository::new(), Duration::from_secs(1));
        let user =
            User::create("Ana", "ana@example.com", "senha123", &MockPasswordHasher::new()).unwrap();

        repo.create(user.clone()).await.unwrap();

        assert_eq!(repo.get_by_email("ana@example.com").await.unwrap(), Some(user));
        assert!(matches!(
            repo.update_email("nobody@example.com", "x@example.com").await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_stalled_operation_times_out() {
        let repo = TimeoutUserRepository::new(
            StalledRepository::default(),
            Duration::from_millis(50),
        );

        let result = repo.get_by_email("ana@example.com").await;

        match result {
            Err(DomainError::BackendFailure { message }) => {
                assert!(message.contains("get_by_email timed out"));
            }
            other => panic!("expected backend failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stalled_create_times_out_without_writing() {
        let repo = TimeoutUserRepository::new(
            StalledRepository::default(),
            Duration::from_millis(50),
        );
        let user =
            User::create("Ana", "ana@example.com", "senha123", &MockPasswordHasher::new()).unwrap();

        let result = repo.create(user).await;

        match result {
            Err(DomainError::BackendFailure { message }) => {
                assert!(message.contains("create timed out after 50ms"));
            }
            other => panic!("expected backend failure, got {:?}", other),
        }
        assert!(repo.inner().inner.is_empty().await);
    }
}
