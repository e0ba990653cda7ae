//! Configuration module with per-concern sub-modules
//!
//! - `database` - MongoDB and MySQL connection settings
//! - `environment` - Environment detection and logging configuration

pub mod database;
pub mod environment;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigResult;

// Re-export commonly used types
pub use database::{DocumentStoreConfig, RelationalConfig};
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Everything the database bootstrap needs, read once at startup
///
/// Logging is configured separately through [`LoggingConfig::from_lookup`],
/// since it has to be up before these settings can fail to load.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseSettings {
    /// Environment configuration
    pub environment: Environment,

    /// Document store (MongoDB) configuration
    pub document: DocumentStoreConfig,

    /// Relational store (MySQL) configuration
    pub relational: RelationalConfig,
}

impl DatabaseSettings {
    /// Load configuration from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: &F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            environment: Environment::from_lookup(lookup),
            document: DocumentStoreConfig::from_lookup(lookup)?,
            relational: RelationalConfig::from_lookup(lookup)?,
        })
    }
}
