//! Database module - connection handles for both stores
//!
//! - `mongo` - MongoDB client handle
//! - `mysql` - MySQL connection pool using SQLx

pub mod mongo;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use mongo::DocumentStore;
pub use mysql::{PoolStatistics, RelationalPool};
