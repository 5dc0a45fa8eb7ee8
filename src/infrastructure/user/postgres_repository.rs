//! PostgreSQL user repository implementation
//!
//! Email uniqueness is enforced by a `UNIQUE` constraint, which makes the
//! check-and-write of `create` and `update_email` a single statement.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::domain::user::{
    ensure_writable_email, ensure_writable_password_hash, User, UserRepository,
};
use crate::domain::DomainError;

const SELECT_USER: &str = r#"
    SELECT id, name, email, password_hash, created_at, updated_at
    FROM users
    WHERE email = $1
"#;

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a pool using the database configuration
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::backend(format!("Failed to connect to PostgreSQL: {}", e)))?;

        info!(max_connections = config.max_connections, "Connected to PostgreSQL");

        Ok(Self::new(pool))
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ensures the users table exists
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                CONSTRAINT users_email_key UNIQUE (email)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::backend(format!("Failed to create users table: {}", e)))?;

        debug!("Users table ready");

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id())
        .bind(user.name())
        .bind(user.email())
        .bind(user.password_hash())
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user.email(), "create user"))?;

        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(SELECT_USER)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::backend(format!("Failed to get user by email: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn update_password(&self, email: &str, password_hash: &str) -> Result<(), DomainError> {
        ensure_writable_password_hash(password_hash)?;

        let result = sqlx::query(
            "UPDATE users SET password_hash = $2, updated_at = NOW() WHERE email = $1",
        )
        .bind(email)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::backend(format!("Failed to update password: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("User '{}' not found", email)));
        }

        Ok(())
    }

    async fn update_email(&self, old_email: &str, new_email: &str) -> Result<(), DomainError> {
        ensure_writable_email(new_email)?;

        let result = sqlx::query("UPDATE users SET email = $2, updated_at = NOW() WHERE email = $1")
            .bind(old_email)
            .bind(new_email)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, new_email, "update email"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("User '{}' not found", old_email)));
        }

        Ok(())
    }
}

fn map_write_error(error: sqlx::Error, email: &str, action: &str) -> DomainError {
    let is_unique_violation = error
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    if is_unique_violation {
        DomainError::duplicate_identity(format!("Email '{}' already registered", email))
    } else {
        DomainError::backend(format!("Failed to {}: {}", action, error))
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    let read = |e: sqlx::Error| DomainError::backend(format!("Failed to read user row: {}", e));

    let id: Uuid = row.try_get("id").map_err(read)?;
    let name: String = row.try_get("name").map_err(read)?;
    let email: String = row.try_get("email").map_err(read)?;
    let password_hash: String = row.try_get("password_hash").map_err(read)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(read)?;

    User::restore(id, &name, email, password_hash, created_at, updated_at)
}
