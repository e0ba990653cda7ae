//! Startup sequence for the server process

use anyhow::{Context, Result};
use ds_infra::{connect_all, Databases};
use ds_shared::DatabaseSettings;
use tracing::{info, warn};

/// Connect both databases
///
/// An `Err` means the process must not continue: MongoDB is unreachable.
/// Its cause has already been logged by the bootstrap. A failed MySQL check
/// is only logged.
pub async fn start(settings: &DatabaseSettings) -> Result<Databases> {
    info!(environment = %settings.environment, "Starting DualStore server");

    let databases = connect_all(settings)
        .await
        .context("database bootstrap failed")?;

    if let Some(warning) = databases.relational_status.warning() {
        warn!(
            endpoint = %warning.endpoint,
            "Continuing without a verified MySQL connection"
        );
    }
    info!("Database bootstrap completed");

    Ok(databases)
}
