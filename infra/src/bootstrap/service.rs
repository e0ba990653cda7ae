//! Bootstrap sequence implementation

use async_trait::async_trait;
use tracing::{error, info, warn};

use super::traits::{DocumentConnector, RelationalProbe};
use super::types::{BootstrapError, ConnectivityWarning, Databases, RelationalStatus};
use crate::config::{DatabaseSettings, DocumentStoreConfig};
use crate::database::{DocumentStore, RelationalPool};
use crate::InfrastructureError;

/// Connects the MongoDB deployment named by a [`DocumentStoreConfig`]
#[derive(Debug, Clone)]
pub struct MongoConnector {
    config: DocumentStoreConfig,
}

impl MongoConnector {
    pub fn new(config: DocumentStoreConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DocumentConnector for MongoConnector {
    type Store = DocumentStore;

    async fn connect(&self) -> Result<DocumentStore, InfrastructureError> {
        DocumentStore::connect(&self.config).await
    }

    fn endpoint(&self) -> String {
        self.config.masked_uri()
    }
}

#[async_trait]
impl RelationalProbe for RelationalPool {
    async fn check(&self) -> Result<(), InfrastructureError> {
        self.check_connectivity().await
    }

    fn endpoint(&self) -> String {
        self.config().endpoint()
    }
}

/// Connect both stores from settings
///
/// Builds the MySQL pool first (no I/O), then runs [`run_sequence`].
pub async fn connect_all(settings: &DatabaseSettings) -> Result<Databases, BootstrapError> {
    let relational = RelationalPool::new(settings.relational.clone());
    let connector = MongoConnector::new(settings.document.clone());

    run_sequence(&connector, relational).await
}

/// Document store first, then the relational check, one after the other
///
/// Returns early with the fatal error if the document store is unreachable;
/// the relational probe is not touched in that case.
pub async fn run_sequence<C, P>(
    connector: &C,
    relational: P,
) -> Result<Databases<C::Store, P>, BootstrapError>
where
    C: DocumentConnector,
    P: RelationalProbe,
{
    let document = connect_document_store(connector).await?;
    let relational_status = validate_relational(&relational).await;

    Ok(Databases {
        document,
        relational,
        relational_status,
    })
}

/// Single connection attempt against the document store
pub async fn connect_document_store<C>(connector: &C) -> Result<C::Store, BootstrapError>
where
    C: DocumentConnector,
{
    match connector.connect().await {
        Ok(store) => {
            info!(endpoint = %connector.endpoint(), "✓ MongoDB connected");
            Ok(store)
        }
        Err(e) => {
            error!(endpoint = %connector.endpoint(), "MongoDB connection error: {}", e);
            Err(BootstrapError::DocumentStore(e))
        }
    }
}

/// Best-effort relational check; failures come back as a warning
pub async fn validate_relational<P>(probe: &P) -> RelationalStatus
where
    P: RelationalProbe,
{
    match probe.check().await {
        Ok(()) => {
            info!(endpoint = %probe.endpoint(), "✓ MySQL connected");
            RelationalStatus::Connected
        }
        Err(e) => {
            let warning = ConnectivityWarning {
                endpoint: probe.endpoint(),
                reason: e.to_string(),
            };
            warn!(endpoint = %warning.endpoint, "{}", warning);
            RelationalStatus::Degraded(warning)
        }
    }
}
