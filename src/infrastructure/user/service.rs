//! User service for registration, login and profile changes

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::types::{
    validate_create_request, validate_login_request, AuthView, CreateUserRequest, LoginRequest,
    UserView,
};
use crate::domain::user::{User, UserRepository, UserValidationError};
use crate::domain::{DomainError, PasswordHasher, TokenIssuer};

/// User service for authentication and management
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher, T: TokenIssuer> {
    repository: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<R: UserRepository, H: PasswordHasher, T: TokenIssuer> UserService<R, H, T> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    /// Register a new user and issue a token for it
    pub async fn register(
        &self,
        request: Option<&CreateUserRequest>,
    ) -> Result<AuthView, DomainError> {
        let request = request.ok_or(UserValidationError::NilRequest)?;
        validate_create_request(Some(request))?;

        let user = User::create(
            &request.name,
            request.email.as_str(),
            &request.password,
            self.hasher.as_ref(),
        )?;

        let user = self.repository.create(user).await?;
        let token = self.tokens.issue(&user)?;

        info!(id = %user.id(), email = %user.email(), "Registered user");

        Ok(AuthView::new(token, Some(UserView::from_user(&user))))
    }

    /// Authenticate with email and password
    ///
    /// An unknown email and a wrong password are indistinguishable to the
    /// caller.
    pub async fn login(&self, request: Option<&LoginRequest>) -> Result<AuthView, DomainError> {
        let request = request.ok_or(UserValidationError::NilRequest)?;
        validate_login_request(Some(request))?;

        let Some(user) = self.repository.get_by_email(&request.email).await? else {
            debug!(email = %request.email, "Login for unknown email");
            return Err(DomainError::InvalidCredentials);
        };

        if !user.verify_password(&request.password, self.hasher.as_ref()) {
            warn!(email = %request.email, "Login with wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;

        info!(id = %user.id(), email = %user.email(), "User logged in");

        Ok(AuthView::new(token, Some(UserView::from_user(&user))))
    }

    /// Get the public profile of a user
    pub async fn profile(&self, email: &str) -> Result<UserView, DomainError> {
        let user = self.get_user(email).await?;
        Ok(UserView::from_user(&user))
    }

    /// Move a user to a new email
    pub async fn change_email(
        &self,
        email: &str,
        new_email: &str,
    ) -> Result<UserView, DomainError> {
        let mut user = self.get_user(email).await?;
        user.change_email(new_email)?;

        self.repository.update_email(email, user.email()).await?;

        info!(id = %user.id(), old_email = %email, new_email = %user.email(), "Changed email");

        Ok(UserView::from_user(&user))
    }

    /// Replace a user's password after checking the current one
    pub async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        let mut user = self.get_user(email).await?;

        if !user.verify_password(current_password, self.hasher.as_ref()) {
            warn!(email = %email, "Password change with wrong current password");
            return Err(DomainError::InvalidCredentials);
        }

        user.change_password(new_password, self.hasher.as_ref())?;

        self.repository
            .update_password(email, user.password_hash())
            .await?;

        info!(id = %user.id(), email = %email, "Changed password");

        Ok(())
    }

    async fn get_user(&self, email: &str) -> Result<User, DomainError> {
        self.repository
            .get_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", email)))
    }
}
