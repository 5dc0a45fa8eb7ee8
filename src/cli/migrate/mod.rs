//! Migrate command - prepares the users table

use tracing::info;

/// Create the users table if needed
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let repository = super::connect_repository(&config).await?;

    repository.inner().ensure_schema().await?;
    info!("Schema is up to date");

    Ok(())
}
