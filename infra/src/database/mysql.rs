//! MySQL connection pool management
//!
//! The pool is built lazily: construction never touches the network, so bad
//! credentials or an unreachable server only surface when a connection is
//! acquired.

use log::LevelFilter;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
    pool::PoolConnection,
    ConnectOptions, Connection, MySql, MySqlPool,
};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::RelationalConfig;
use crate::InfrastructureError;

/// How long an acquisition waits in the queue for a free connection.
///
/// sqlx adds this to `Instant::now()`, so it has to stay finite.
pub const QUEUE_WAIT: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Statements slower than this are logged at WARN
const SLOW_STATEMENT_THRESHOLD: Duration = Duration::from_secs(1);

/// MySQL connection pool wrapper
///
/// Cheap to clone; clones share the same underlying pool.
#[derive(Debug, Clone)]
pub struct RelationalPool {
    /// SQLx MySQL connection pool
    pool: MySqlPool,
    /// Configuration used to create this pool
    config: RelationalConfig,
}

impl RelationalPool {
    /// Build the pool without opening any connection
    ///
    /// At most `config.max_connections` connections are checked out at once;
    /// further acquisitions queue instead of failing. Must be called from
    /// within a Tokio runtime because sqlx spawns its idle reaper here.
    pub fn new(config: RelationalConfig) -> Self {
        info!(
            "Creating MySQL connection pool for {} with max_connections: {}",
            config.endpoint(),
            config.max_connections
        );

        let connect_options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database)
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, SLOW_STATEMENT_THRESHOLD);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(0)
            .acquire_timeout(QUEUE_WAIT)
            .connect_lazy_with(connect_options);

        Self { pool, config }
    }

    /// Get a reference to the underlying SQLx pool
    ///
    /// Use this for executing queries and transactions. Acquisitions made
    /// directly on it wait up to [`QUEUE_WAIT`] even while the server refuses
    /// connections; [`RelationalPool::acquire`] reports that refusal instead.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Configuration this pool was built from
    pub fn config(&self) -> &RelationalConfig {
        &self.config
    }

    /// Acquire a connection, waiting in the queue if the pool is exhausted
    ///
    /// While the pool has spare capacity the acquisition opens a connection,
    /// and that is bounded by `connect_timeout_secs`; a refusing server is
    /// reported with the driver's error. At capacity the call queues for up
    /// to [`QUEUE_WAIT`]. The connection goes back to the pool when dropped.
    pub async fn acquire(&self) -> Result<PoolConnection<MySql>, InfrastructureError> {
        if self.pool.size() >= self.config.max_connections {
            return Ok(self.pool.acquire().await?);
        }

        let limit = Duration::from_secs(self.config.connect_timeout_secs);
        match tokio::time::timeout(limit, self.pool.acquire()).await {
            Ok(connection) => Ok(connection?),
            Err(_) => Err(self.connect_error(limit).await),
        }
    }

    /// Acquire one connection and hand it straight back
    pub async fn check_connectivity(&self) -> Result<(), InfrastructureError> {
        debug!("Acquiring MySQL connection from {}", self.config.endpoint());

        let connection = self.acquire().await?;
        drop(connection);

        Ok(())
    }

    /// Error for an acquisition that ran out of time
    ///
    /// sqlx retries refused connections until the acquire deadline and
    /// never returns their error, so one attempt is made outside the pool.
    async fn connect_error(&self, limit: Duration) -> InfrastructureError {
        let options = self.pool.connect_options();
        match tokio::time::timeout(limit, options.connect()).await {
            Ok(Err(e)) => InfrastructureError::Database(e),
            Ok(Ok(connection)) => {
                // Reachable again; the pool was just slower than the bound
                let _ = connection.close().await;
                InfrastructureError::Timeout(limit)
            }
            Err(_) => InfrastructureError::Timeout(limit),
        }
    }

    /// Whether the pool has been closed
    ///
    /// Nothing in this crate closes it; exposed so callers can assert the
    /// pool survived a failed check.
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Get connection pool statistics
    pub fn statistics(&self) -> PoolStatistics {
        PoolStatistics {
            connections: self.pool.size(),
            idle_connections: self.pool.num_idle(),
            max_connections: self.pool.options().get_max_connections(),
        }
    }
}

/// Connection pool statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    /// Total number of connections in the pool
    pub connections: u32,
    /// Number of idle connections
    pub idle_connections: usize,
    /// Maximum allowed connections
    pub max_connections: u32,
}

impl PoolStatistics {
    /// Connections currently checked out by callers
    pub fn in_use(&self) -> u32 {
        self.connections
            .saturating_sub(u32::try_from(self.idle_connections).unwrap_or(u32::MAX))
    }
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pool Stats: {}/{} connections ({} idle)",
            self.connections, self.max_connections, self.idle_connections
        )
    }
}
