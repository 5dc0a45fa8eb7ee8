//! User domain
//!
//! This module provides the user entity, its validation rules, and the
//! repository trait that storage backends implement.

mod entity;
mod repository;
mod validation;

pub use entity::User;
pub use repository::{ensure_writable_email, ensure_writable_password_hash, UserRepository};
pub use validation::{
    validate_email, validate_name, validate_password, validate_password_present, EmailContext,
    UserValidationError, MIN_PASSWORD_LENGTH,
};

#[cfg(test)]
pub use repository::mock::FailingUserRepository;
