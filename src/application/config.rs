use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LOGIN_ROUTE, DEFAULT_TIMEOUT_SECS};
use crate::session::SessionContext;
use crate::storage::{FileStore, MemoryStore};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is resolved against
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the API Console client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Route handed to the navigator when the session can not be refreshed
    pub login_route: String,
    /// JSON file persisting the session; `None` keeps it in memory
    pub credentials_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// A `.env` file is loaded first if present.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `API_URL` | `http://localhost:5000` |
    /// | `API_TIMEOUT` | `30` |
    /// | `LOGIN_ROUTE` | `/login` |
    /// | `CREDENTIALS_FILE` | unset (in-memory session) |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("API_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            login_route: get_env_or_default("LOGIN_ROUTE", String::from(DEFAULT_LOGIN_ROUTE)),
            credentials_file: get_env_or_none("CREDENTIALS_FILE"),
        }
    }

    /// Builds a configuration pointing at `base_url`, without reading the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            login_route: String::from(DEFAULT_LOGIN_ROUTE),
            credentials_file: None,
        }
    }

    /// Opens the session selected by this configuration
    ///
    /// A file backed store when `credentials_file` is set, in-memory otherwise.
    #[must_use]
    pub fn session(&self) -> SessionContext {
        match &self.credentials_file {
            Some(path) => {
                debug!("Using credential file {}", path.display());
                SessionContext::new(Arc::new(FileStore::new(path.clone())))
            }
            None => SessionContext::new(Arc::new(MemoryStore::new())),
        }
    }
}
