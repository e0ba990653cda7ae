//! MongoDB document store client

use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use std::time::Duration;
use tracing::debug;

use crate::config::DocumentStoreConfig;
use crate::InfrastructureError;

/// Connected MongoDB client
///
/// `mongodb::Client` is internally reference counted, so clones share one
/// set of server connections for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    client: Client,
    hosts: Vec<String>,
}

impl DocumentStore {
    /// Parse the URI, build a client and prove the deployment answers a `ping`
    ///
    /// Exactly one attempt is made; the driver's server selection timeout
    /// bounds how long an unreachable deployment is waited for.
    pub async fn connect(config: &DocumentStoreConfig) -> Result<Self, InfrastructureError> {
        debug!("Connecting to MongoDB at {}", config.masked_uri());

        let mut options = ClientOptions::parse(&config.uri).await?;
        if let Some(millis) = config.server_selection_timeout_ms {
            options.server_selection_timeout = Some(Duration::from_millis(millis));
        }
        let hosts = options.hosts.iter().map(ToString::to_string).collect();

        let client = Client::with_options(options)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;

        Ok(Self { client, hosts })
    }

    /// Underlying driver client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Database named in the connection URI, if any
    pub fn default_database(&self) -> Option<Database> {
        self.client.default_database()
    }

    /// Handle to a named database
    pub fn database(&self, name: &str) -> Database {
        self.client.database(name)
    }

    /// Seed hosts from the connection URI, `host:port`
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }
}
