/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # API Console Client
//!
//! An asynchronous client for the API Console REST API. It takes care of:
//!
//! - Injecting `Authorization: Bearer <token>` on every outgoing request
//! - Refreshing the access token once when a request is rejected with `401`
//! - Clearing the stored session and redirecting to login when the refresh fails
//! - Grouped endpoint wrappers for auth, API resources, keys and logs
//!
//! ## Example
//!
//! ```ignore
//! use api_console_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! client.auth().login(&LoginRequest::new("me@example.com", "secret")).await?;
//! let logs = client.logs().get_all(Some(1), Some(20), None).await?;
//! ```

/// Application layer: configuration, client facade and endpoint interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP transport, request descriptors and wire models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Session context and login navigation
pub mod session;
/// Credential storage backends
pub mod storage;
/// Environment and logging helpers
pub mod utils;

/// Re-export of the configuration so callers can write `api_console_client::config::Config`
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
