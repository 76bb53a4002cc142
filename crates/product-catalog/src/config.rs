//! Runtime configuration, read from `CATALOG_*` environment variables.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `CATALOG_API_KEY` .. `CATALOG_MEASUREMENT_ID` | Backend parameters | unset |
//! | `CATALOG_PERSISTENCE` | Mirror product changes to the backend | `false` |
//! | `CATALOG_STORE_BUFFER` | Store request queue capacity | `32` |
//! | `CATALOG_RETRY_ATTEMPTS` | Attempts per backend write | `3` |
//! | `CATALOG_RETRY_BACKOFF_MS` | Delay before the first retry | `200` |

use crate::gateway::RetryPolicy;
use crate::product_slice::DEFAULT_BUFFER;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
}

/// Connection parameters of the document backend. Opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
}

impl BackendConfig {
    /// The minimum needed to reach a backend: an api key and a project.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.project_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogConfig {
    pub backend: BackendConfig,
    pub persistence_enabled: bool,
    pub store_buffer: usize,
    pub retry_attempts: u32,
    pub retry_backoff_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            backend: BackendConfig::default(),
            persistence_enabled: false,
            store_buffer: DEFAULT_BUFFER,
            retry_attempts: retry.max_attempts,
            retry_backoff_ms: retry.initial_backoff.as_millis() as u64,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let config = Self {
            backend: BackendConfig {
                api_key: get("CATALOG_API_KEY"),
                auth_domain: get("CATALOG_AUTH_DOMAIN"),
                project_id: get("CATALOG_PROJECT_ID"),
                storage_bucket: get("CATALOG_STORAGE_BUCKET"),
                messaging_sender_id: get("CATALOG_MESSAGING_SENDER_ID"),
                app_id: get("CATALOG_APP_ID"),
                measurement_id: get("CATALOG_MEASUREMENT_ID"),
            },
            persistence_enabled: match get("CATALOG_PERSISTENCE") {
                Some(value) => parse_bool("CATALOG_PERSISTENCE", &value)?,
                None => defaults.persistence_enabled,
            },
            store_buffer: parse_or("CATALOG_STORE_BUFFER", get, defaults.store_buffer)?,
            retry_attempts: parse_or("CATALOG_RETRY_ATTEMPTS", get, defaults.retry_attempts)?,
            retry_backoff_ms: parse_or(
                "CATALOG_RETRY_BACKOFF_MS",
                get,
                defaults.retry_backoff_ms,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_buffer == 0 {
            return Err(invalid("CATALOG_STORE_BUFFER", "0"));
        }
        if self.retry_attempts == 0 {
            return Err(invalid("CATALOG_RETRY_ATTEMPTS", "0"));
        }
        Ok(())
    }

    /// Persistence runs only when it is switched on and the backend is configured.
    pub fn persistence_active(&self) -> bool {
        self.persistence_enabled && self.backend.is_configured()
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry_attempts,
            initial_backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn parse_or<T, G>(key: &str, get: G, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => value.trim().parse().map_err(|_| invalid(key, &value)),
        None => Ok(default),
    }
}
