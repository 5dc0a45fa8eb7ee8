//! User infrastructure module
//!
//! This module provides implementations for user authentication and management,
//! including password hashing with Argon2, in-memory and PostgreSQL
//! repositories, a deadline-bounding repository decorator, and the user service.

mod password;
mod postgres_repository;
mod repository;
mod service;
mod timeout;

pub use password::Argon2Hasher;
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::UserService;
pub use timeout::TimeoutUserRepository;
