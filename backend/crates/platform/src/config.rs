//! Configuration Sources
//!
//! Typed reads over a [`ConfigSource`]. [`Env`] reads the process
//! environment; a `HashMap` works as a fixed source.

use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Required variable is unset or not valid unicode
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    /// Variable is set but cannot be interpreted
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: String, reason: String },
}

impl ConfigError {
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Source of raw configuration values
pub trait ConfigSource {
    /// Raw value, `None` when unset
    fn lookup(&self, name: &str) -> Option<String>;

    /// Read a required variable
    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.lookup(name)
            .ok_or_else(|| ConfigError::Missing(name.to_string()))
    }

    /// Read an optional variable, treating an empty value as unset
    fn optional(&self, name: &str) -> Option<String> {
        self.lookup(name).filter(|v| !v.trim().is_empty())
    }

    /// Read and parse an optional variable
    fn parse_optional<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(name)
            .map(|raw| parse_value(name, raw.trim()))
            .transpose()
    }

    /// Read an optional duration given in whole seconds
    fn duration_secs(&self, name: &str) -> Result<Option<Duration>, ConfigError> {
        match self.parse_optional::<u64>(name)? {
            Some(0) => Err(ConfigError::invalid(name, "must be greater than zero")),
            other => Ok(other.map(Duration::from_secs)),
        }
    }
}

/// Process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl ConfigSource for Env {
    fn lookup(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e: T::Err| ConfigError::invalid(name, e.to_string()))
}
