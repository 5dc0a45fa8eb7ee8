//! Request and response shapes for the user core
//!
//! Requests are validated before they reach the domain; views are what the
//! outside world is allowed to see of a user.

pub mod requests;
pub mod views;

pub use requests::{
    validate_create_request, validate_login_request, CreateUserRequest, LoginRequest,
};
pub use views::{AuthView, UserView};
