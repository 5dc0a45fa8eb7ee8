//! Domain layer - Core business logic and entities

pub mod error;
pub mod traits;
pub mod user;

pub use error::DomainError;
pub use traits::{PasswordHasher, TokenIssuer};
pub use user::{EmailContext, User, UserRepository, UserValidationError};
