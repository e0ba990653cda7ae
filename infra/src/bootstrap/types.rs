//! Result types of the bootstrap sequence

use std::fmt;

use crate::database::{DocumentStore, RelationalPool};
use crate::InfrastructureError;

/// Fatal bootstrap failure; the process should not continue
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The document store could not be reached
    #[error("MongoDB connection error: {0}")]
    DocumentStore(#[source] InfrastructureError),
}

/// Non-fatal relational failure, reported but not acted on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityWarning {
    /// `host:port/database` of the relational store
    pub endpoint: String,
    /// Driver message, verbatim
    pub reason: String,
}

impl fmt::Display for ConnectivityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MySQL connection error: {}", self.reason)
    }
}

/// Outcome of the relational connectivity check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationalStatus {
    /// A connection was acquired and released
    Connected,
    /// The check failed; the pool is still usable
    Degraded(ConnectivityWarning),
}

impl RelationalStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, RelationalStatus::Connected)
    }

    pub fn warning(&self) -> Option<&ConnectivityWarning> {
        match self {
            RelationalStatus::Connected => None,
            RelationalStatus::Degraded(warning) => Some(warning),
        }
    }
}

/// Handles produced by a completed bootstrap
///
/// Owned by the caller and passed by reference to whatever needs a
/// connection. Both handles live until this value is dropped.
#[derive(Debug)]
pub struct Databases<D = DocumentStore, R = RelationalPool> {
    /// Connected document store
    pub document: D,
    /// Relational pool, usable whatever `relational_status` says
    pub relational: R,
    /// Result of the startup connectivity check
    pub relational_status: RelationalStatus,
}
