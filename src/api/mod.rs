//! API layer - wire-facing request and response types

pub mod types;

pub use types::{AuthView, CreateUserRequest, LoginRequest, UserView};
