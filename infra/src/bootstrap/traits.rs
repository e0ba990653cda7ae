//! Seams between the bootstrap sequence and the database drivers

use async_trait::async_trait;

use crate::InfrastructureError;

/// Opens the document store connection
#[async_trait]
pub trait DocumentConnector: Send + Sync {
    /// Handle produced by a successful connection
    type Store: Send;

    /// Make a single connection attempt
    async fn connect(&self) -> Result<Self::Store, InfrastructureError>;

    /// Where the connection goes, with credentials masked
    fn endpoint(&self) -> String;
}

/// Checks that the relational store hands out connections
#[async_trait]
pub trait RelationalProbe: Send + Sync {
    /// Acquire one connection and release it
    async fn check(&self) -> Result<(), InfrastructureError>;

    /// Where the connection goes, `host:port/database`
    fn endpoint(&self) -> String;
}
