//! Process configuration from environment variables.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::PathBuf;

use tracing::{info, warn};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "memory";

/// Which record store to open at start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `memory` - records live as long as the process.
    Memory,
    /// `sqlite://<path>` - records kept in a SQLite file.
    Sqlite(PathBuf),
}

impl DatabaseUrl {
    /// Parse a store URL; `key` names the variable it came from.
    pub fn parse(key: &'static str, raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw == "memory" {
            return Ok(DatabaseUrl::Memory);
        }
        match raw.strip_prefix("sqlite://") {
            Some(path) if !path.is_empty() => Ok(DatabaseUrl::Sqlite(PathBuf::from(path))),
            _ => Err(ConfigError::Invalid {
                key,
                value: raw.to_string(),
                reason: "expected `memory` or `sqlite://<path>`".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value, reason } => {
                write!(f, "invalid {} value {:?}: {}", key, value, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database_url: DatabaseUrl,
}

impl Config {
    /// Load from the process environment.
    ///
    /// - `PORT`, falling back to `NODE_PORT`, then 3000.
    /// - `DATABASE_URL`, falling back to `MONGOLAB_URI`, then `memory`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = match first_set(vars, &["PORT", "NODE_PORT"]) {
            Some((key, raw)) => raw.trim().parse().map_err(|e| {
                warn!("Invalid {key} value: {e}");
                ConfigError::Invalid {
                    key,
                    value: raw.to_string(),
                    reason: format!("{e}"),
                }
            })?,
            None => {
                info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let database_url = match first_set(vars, &["DATABASE_URL", "MONGOLAB_URI"]) {
            Some((key, raw)) => DatabaseUrl::parse(key, raw).map_err(|e| {
                warn!("Invalid {key} value: {e}");
                e
            })?,
            None => {
                info!("DATABASE_URL not set, using default: {DEFAULT_DATABASE_URL}");
                DatabaseUrl::Memory
            }
        };

        Ok(Self { port, database_url })
    }
}

fn first_set<'a>(
    vars: &'a HashMap<String, String>,
    keys: &[&'static str],
) -> Option<(&'static str, &'a str)> {
    keys.iter()
        .find_map(|key| vars.get(*key).map(|value| (*key, value.as_str())))
}
