//! Shared error types

use thiserror::Error;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// A variable is set but cannot be parsed
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        reason: String,
    },
}

/// Result alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fetch a required variable from a lookup function
pub fn required<F>(lookup: &F, name: &'static str) -> ConfigResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or(ConfigError::MissingVar(name))
}

/// Fetch and parse an optional variable, `None` when unset
pub fn optional_parsed<F, T>(lookup: &F, name: &'static str) -> ConfigResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidVar {
                name,
                reason: e.to_string(),
            }),
    }
}
