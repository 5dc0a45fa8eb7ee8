use std::fmt::Debug;

use crate::domain::user::User;
use crate::domain::DomainError;

/// Produces the opaque token handed back after registration or login
pub trait TokenIssuer: Send + Sync + Debug {
    fn issue(&self, user: &User) -> Result<String, DomainError>;
}
