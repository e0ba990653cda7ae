//! # Infrastructure Layer
//!
//! This crate owns the connections the DualStore server opens at startup.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MongoDB client handle and the MySQL connection pool
//! - **Bootstrap**: the startup sequence that connects the document store
//!   (fatal on failure) and then validates the relational pool (warning on failure)

/// Database module - MongoDB and MySQL connection handles
pub mod database;

/// Bootstrap module - startup connection sequence
pub mod bootstrap;

/// Configuration types used by this crate
pub mod config {
    //! Re-exports of the shared connection settings

    pub use ds_shared::config::{DatabaseSettings, DocumentStoreConfig, RelationalConfig};
}

pub use bootstrap::{connect_all, BootstrapError, ConnectivityWarning, Databases, RelationalStatus};
pub use database::{DocumentStore, PoolStatistics, RelationalPool};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// MySQL driver error
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// MongoDB driver error
    #[error("{0}")]
    DocumentStore(#[from] mongodb::error::Error),

    /// An operation did not finish within its bound
    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),
}
