//! Database migration command.

use clap::Args;

use quickcourt_core::config::AppConfig;
use quickcourt_core::error::AppError;
use quickcourt_database::connection::DatabasePool;
use quickcourt_database::migration;

use crate::output;

/// Arguments for the migrate command.
#[derive(Debug, Args)]
pub struct MigrateArgs {}

/// Execute the migrate command.
pub async fn execute(_args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    migration::run_migrations(pool.pool()).await?;
    output::print_success("Migrations applied");
    Ok(())
}
