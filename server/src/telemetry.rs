//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the environment profile's default filter.

use anyhow::{anyhow, Result};
use ds_shared::{ConfigError, Environment, LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Logging profile for `environment` with the `LOG_FORMAT` override applied
///
/// An unusable override falls back to the plain profile and is handed back
/// so it can be logged once the subscriber is up.
pub fn logging_config<F>(environment: Environment, lookup: &F) -> (LoggingConfig, Option<ConfigError>)
where
    F: Fn(&str) -> Option<String>,
{
    match LoggingConfig::from_lookup(environment, lookup) {
        Ok(config) => (config, None),
        Err(e) => (LoggingConfig::for_environment(environment), Some(e)),
    }
}

/// Install the global subscriber described by `config`
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|err| anyhow!(err))
}
