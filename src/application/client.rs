/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Client for the API Console REST API
//!
//! Bundles the authenticated [`HttpClient`] with one service per endpoint
//! group. All services share the same transport and session.
//!
//! # Example
//! ```ignore
//! use api_console_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.auth().login(&LoginRequest::new("me@example.com", "secret")).await?;
//! let keys = client.keys().get_all().await?;
//! ```

use crate::application::config::Config;
use crate::application::services::{
    ApiServiceImpl, AuthServiceImpl, KeyServiceImpl, LogServiceImpl,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::session::{Navigator, SessionContext};
use std::sync::Arc;

/// Entry point grouping the auth, API, key and log endpoints
pub struct Client {
    http_client: Arc<HttpClient>,
    auth: AuthServiceImpl,
    apis: ApiServiceImpl,
    keys: KeyServiceImpl,
    logs: LogServiceImpl,
}

impl Client {
    /// Creates a client from `config`, with the session store it selects
    pub fn new(config: Config) -> Result<Self, AppError> {
        Ok(Self::from_http_client(Arc::new(HttpClient::new(config)?)))
    }

    /// Creates a client over an explicit session and login navigator
    pub fn with_session(
        config: Config,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let http_client = HttpClient::with_session(config, session, navigator)?;
        Ok(Self::from_http_client(Arc::new(http_client)))
    }

    /// Wraps an existing transport
    pub fn from_http_client(http_client: Arc<HttpClient>) -> Self {
        Self {
            auth: AuthServiceImpl::new(http_client.clone()),
            apis: ApiServiceImpl::new(http_client.clone()),
            keys: KeyServiceImpl::new(http_client.clone()),
            logs: LogServiceImpl::new(http_client.clone()),
            http_client,
        }
    }

    /// Authentication endpoints
    #[must_use]
    pub fn auth(&self) -> &AuthServiceImpl {
        &self.auth
    }

    /// API resource endpoints
    #[must_use]
    pub fn apis(&self) -> &ApiServiceImpl {
        &self.apis
    }

    /// API key endpoints
    #[must_use]
    pub fn keys(&self) -> &KeyServiceImpl {
        &self.keys
    }

    /// Request log endpoints
    #[must_use]
    pub fn logs(&self) -> &LogServiceImpl {
        &self.logs
    }

    /// Underlying authenticated transport, for endpoints without a wrapper
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Session credentials shared by every endpoint group
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        self.http_client.session()
    }
}
