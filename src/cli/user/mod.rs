//! User commands - register, login and profile changes

use clap::Args;
use serde::Serialize;

use crate::api::types::{CreateUserRequest, LoginRequest};

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct ChangeEmailArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub new_email: String,
}

#[derive(Args, Debug)]
pub struct ChangePasswordArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub current_password: String,
    #[arg(long)]
    pub new_password: String,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn register(args: RegisterArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let service = super::build_service(&config).await?;

    let request = CreateUserRequest::new(args.name, args.email, args.password);
    let view = service.register(Some(&request)).await?;

    print_json(&view)
}

pub async fn login(args: LoginArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let service = super::build_service(&config).await?;

    let request = LoginRequest::new(args.email, args.password);
    let view = service.login(Some(&request)).await?;

    print_json(&view)
}

pub async fn change_email(args: ChangeEmailArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let service = super::build_service(&config).await?;

    let view = service.change_email(&args.email, &args.new_email).await?;

    print_json(&view)
}

pub async fn change_password(args: ChangePasswordArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let service = super::build_service(&config).await?;

    service
        .change_password(&args.email, &args.current_password, &args.new_password)
        .await?;

    print_json(&service.profile(&args.email).await?)
}
