//! Database migration management.

use clap::Subcommand;

use common::{AppError, AppResult};
use infrastructure::Database;

use crate::config::ApiConfig;

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum MigrateAction {
    /// Apply all pending migrations
    Up,
    /// Roll back the last migration
    Down,
    /// List migrations and whether they are applied
    Status,
    /// Drop every table and apply all migrations again
    Fresh,
}

/// Execute a migrate command
pub async fn migrate(action: MigrateAction, config: &ApiConfig) -> AppResult<()> {
    tracing::info!("Running migration command...");

    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config.database)
        .await
        .map_err(|e| AppError::internal_with("Database connection failed", e))?;

    match action {
        MigrateAction::Up => {
            db.run_migrations()
                .await
                .map_err(|e| AppError::internal_with("Failed to apply migrations", e))?;
            tracing::info!("Migrations completed successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration()
                .await
                .map_err(|e| AppError::internal_with("Failed to roll back migration", e))?;
            tracing::info!("Rollback completed successfully");
        }
        MigrateAction::Status => {
            let status = db
                .migration_status()
                .await
                .map_err(|e| AppError::internal_with("Failed to read migration status", e))?;
            for (name, applied) in status {
                println!("{}: {}", name, if applied { "applied" } else { "pending" });
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations()
                .await
                .map_err(|e| AppError::internal_with("Failed to reset database", e))?;
            tracing::info!("Fresh migrations completed successfully");
        }
    }

    Ok(())
}
