use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a raw password into its stored representation
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a raw password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> bool;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    const PREFIX: &str = "hashed:";

    /// Reversible stand-in for tests where hashing cost is irrelevant
    #[derive(Debug, Default)]
    pub struct MockPasswordHasher {
        should_fail: bool,
    }

    impl MockPasswordHasher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self { should_fail: true }
        }
    }

    impl PasswordHasher for MockPasswordHasher {
        fn hash(&self, password: &str) -> Result<String, DomainError> {
            if self.should_fail {
                return Err(DomainError::credential("Mock hasher configured to fail"));
            }
            Ok(format!("{PREFIX}{password}"))
        }

        fn verify(&self, password: &str, hash: &str) -> bool {
            hash.strip_prefix(PREFIX) == Some(password)
        }
    }
}
