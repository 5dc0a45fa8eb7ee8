//! Inbound user requests and their validators
//!
//! Validators take `Option<&T>` so an absent body is reported as
//! [`UserValidationError::NilRequest`] rather than being a type error upstream.

use serde::Deserialize;

use crate::domain::user::{
    validate_email, validate_name, validate_password, validate_password_present, EmailContext,
    UserValidationError,
};

/// Registration request
#[derive(Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(alias = "credential")]
    pub password: String,
}

impl CreateUserRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[hidden]")
            .finish()
    }
}

/// Login request
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(alias = "credential")]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[hidden]")
            .finish()
    }
}

/// Validate a registration request
///
/// Checks presence, then name, email and password length, returning the
/// first failure.
pub fn validate_create_request(
    request: Option<&CreateUserRequest>,
) -> Result<(), UserValidationError> {
    let request = request.ok_or(UserValidationError::NilRequest)?;

    validate_name(&request.name)?;
    validate_email(&request.email, EmailContext::OnCreate)?;
    validate_password(&request.password)?;

    Ok(())
}

/// Validate a login request
///
/// Only the presence of a password is checked; a short one must still reach
/// the credential comparison and fail there.
pub fn validate_login_request(request: Option<&LoginRequest>) -> Result<(), UserValidationError> {
    let request = request.ok_or(UserValidationError::NilRequest)?;

    validate_email(&request.email, EmailContext::OnCreate)?;
    validate_password_present(&request.password)?;

    Ok(())
}
