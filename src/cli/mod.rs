//! CLI module for the identity service
//!
//! Provides operator subcommands backed by PostgreSQL:
//! - `migrate`: create the users table
//! - `register`, `login`: create an account or authenticate, printing the token
//! - `change-email`, `change-password`: profile maintenance

pub mod migrate;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::auth::{JwtConfig, JwtTokenIssuer};
use crate::infrastructure::logging;
use crate::infrastructure::user::{
    Argon2Hasher, PostgresUserRepository, TimeoutUserRepository, UserService,
};

/// User identity core - registration, login and profile maintenance
#[derive(Parser)]
#[command(name = "auth-identity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create the users table if it does not exist
    Migrate,

    /// Register a new user
    Register(user::RegisterArgs),

    /// Log in and print the issued token
    Login(user::LoginArgs),

    /// Change a user's email
    ChangeEmail(user::ChangeEmailArgs),

    /// Change a user's password
    ChangePassword(user::ChangePasswordArgs),
}

pub type PgUserService =
    UserService<TimeoutUserRepository<PostgresUserRepository>, Argon2Hasher, JwtTokenIssuer>;

/// Load configuration and install logging
pub fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}

/// Connect to PostgreSQL with every operation bounded by the configured timeout
pub async fn connect_repository(
    config: &AppConfig,
) -> anyhow::Result<TimeoutUserRepository<PostgresUserRepository>> {
    let repository = PostgresUserRepository::connect(&config.database).await?;
    Ok(TimeoutUserRepository::new(
        repository,
        config.database.operation_timeout(),
    ))
}

/// Build the user service from configuration
pub async fn build_service(config: &AppConfig) -> anyhow::Result<PgUserService> {
    let repository = connect_repository(config).await?;
    let tokens = JwtTokenIssuer::new(&JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_expiration_hours,
    ));

    Ok(UserService::new(
        Arc::new(repository),
        Arc::new(Argon2Hasher::new()),
        Arc::new(tokens),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_register() {
        let cli = Cli::try_parse_from([
            "auth-identity",
            "register",
            "--name",
            "Ana",
            "--email",
            "ana@example.com",
            "--password",
            "secret1",
        ])
        .unwrap();

        match cli.command {
            Command::Register(args) => {
                assert_eq!(args.name, "Ana");
                assert_eq!(args.email, "ana@example.com");
            }
            _ => panic!("expected register command"),
        }
    }

    #[test]
    fn test_parse_change_email() {
        let cli = Cli::try_parse_from([
            "auth-identity",
            "change-email",
            "--email",
            "old@x.com",
            "--new-email",
            "new@x.com",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::ChangeEmail(_)));
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Cli::try_parse_from(["auth-identity", "login", "--email", "a@b.com"]).is_err());
    }
}
