use auth_identity::cli::{self, Cli, Command};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Migrate => cli::migrate::run().await,
        Command::Register(args) => cli::user::register(args).await,
        Command::Login(args) => cli::user::login(args).await,
        Command::ChangeEmail(args) => cli::user::change_email(args).await,
        Command::ChangePassword(args) => cli::user::change_password(args).await,
    }
}
