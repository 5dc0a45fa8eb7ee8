//! Auth identity core
//!
//! The user side of an authentication service:
//! - A `User` entity that keeps its name, email and password invariants
//! - Validators for registration and login requests
//! - Views that expose a user without its password
//! - A `UserRepository` contract with in-memory and PostgreSQL backends

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, User, UserRepository, UserValidationError};
