//! Shared configuration and error types for the DualStore server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types read from the process environment
//! - Configuration error types

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    DatabaseSettings, DocumentStoreConfig, Environment, LogFormat, LoggingConfig,
    RelationalConfig,
};
pub use errors::{ConfigError, ConfigResult};
