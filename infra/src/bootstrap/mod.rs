//! Startup bootstrap for both database connections
//!
//! The sequence is strictly ordered:
//! 1. build the MySQL pool (never fails, no network traffic)
//! 2. connect MongoDB; a failure here is fatal and stops the sequence
//! 3. check out one MySQL connection and return it; a failure here is only a warning
//!
//! Nothing in this module terminates the process. Callers decide what a
//! [`BootstrapError`] means for them.

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::{connect_all, connect_document_store, run_sequence, validate_relational, MongoConnector};
pub use traits::{DocumentConnector, RelationalProbe};
pub use types::{BootstrapError, ConnectivityWarning, Databases, RelationalStatus};
