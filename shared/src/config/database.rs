//! Database configuration module
//!
//! Connection settings for the two stores the process talks to: the MongoDB
//! document store and the MySQL relational store.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{optional_parsed, required, ConfigResult};

/// Maximum number of simultaneously checked-out MySQL connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Default MySQL port when `SQL_PORT` is unset
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Default bound on opening a new MySQL connection, in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// MongoDB document store configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct DocumentStoreConfig {
    /// Full MongoDB connection string (`MONGO_URI`)
    #[serde(skip_serializing)]
    pub uri: String,

    /// Server selection timeout override in milliseconds; driver default when unset
    #[serde(default)]
    pub server_selection_timeout_ms: Option<u64>,
}

impl DocumentStoreConfig {
    /// Create a new document store configuration with a connection URI
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            server_selection_timeout_ms: None,
        }
    }

    /// Load from a variable lookup
    pub fn from_lookup<F>(lookup: &F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            uri: required(lookup, "MONGO_URI")?,
            server_selection_timeout_ms: optional_parsed(
                lookup,
                "MONGO_SERVER_SELECTION_TIMEOUT_MS",
            )?,
        })
    }

    /// Set the server selection timeout
    pub fn with_server_selection_timeout_ms(mut self, millis: u64) -> Self {
        self.server_selection_timeout_ms = Some(millis);
        self
    }

    /// Connection URI with any `user:password@` section replaced, safe for logs
    pub fn masked_uri(&self) -> String {
        mask_uri(&self.uri)
    }
}

impl fmt::Debug for DocumentStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStoreConfig")
            .field("uri", &self.masked_uri())
            .field("server_selection_timeout_ms", &self.server_selection_timeout_ms)
            .finish()
    }
}

/// MySQL relational store configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct RelationalConfig {
    /// Server hostname (`SQL_HOST`)
    pub host: String,

    /// Server port (`SQL_PORT`)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Username (`SQL_USER`)
    pub user: String,

    /// Password (`SQL_PASSWORD`)
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Database to select (`SQL_DATABASE`)
    pub database: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Bound on opening a new connection in seconds (`SQL_CONNECT_TIMEOUT_SECS`)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl RelationalConfig {
    /// Create a new relational configuration from connection credentials
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_MYSQL_PORT,
            user: user.into(),
            password: password.into(),
            database: database.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Load from a variable lookup
    pub fn from_lookup<F>(lookup: &F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(
            required(lookup, "SQL_HOST")?,
            required(lookup, "SQL_USER")?,
            required(lookup, "SQL_PASSWORD")?,
            required(lookup, "SQL_DATABASE")?,
        );

        if let Some(port) = optional_parsed(lookup, "SQL_PORT")? {
            config.port = port;
        }
        if let Some(secs) = optional_parsed(lookup, "SQL_CONNECT_TIMEOUT_SECS")? {
            config.connect_timeout_secs = secs;
        }

        Ok(config)
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the bound on opening a new connection
    pub fn with_connect_timeout_secs(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// `host:port/database` for log lines
    pub fn endpoint(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }
}

impl fmt::Debug for RelationalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationalConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

/// Replace the credentials section of a URI with `***`
pub fn mask_uri(uri: &str) -> String {
    let Some(scheme_end) = uri.find("://") else {
        return uri.to_string();
    };
    let rest = &uri[scheme_end + 3..];
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}***{}", &uri[..scheme_end + 3], &rest[at..]),
        None => uri.to_string(),
    }
}

fn default_port() -> u16 {
    DEFAULT_MYSQL_PORT
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}
