/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # API Console Client Prelude
//!
//! Brings the commonly used types and the endpoint traits into scope.
//!
//! ```ignore
//! use api_console_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let stats = client.logs().get_stats().await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Configuration for the client
pub use crate::application::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// ENDPOINT SERVICES
// ============================================================================

/// Endpoint group traits
pub use crate::application::interfaces::{ApiService, AuthService, KeyService, LogService};

/// Endpoint group implementations
pub use crate::application::services::{
    ApiServiceImpl, AuthServiceImpl, KeyServiceImpl, LogServiceImpl,
};

// ============================================================================
// TRANSPORT AND SESSION
// ============================================================================

/// Authenticated HTTP client
pub use crate::model::http::HttpClient;

/// Request descriptor
pub use crate::model::request::RequestDescriptor;

/// Session context and navigation
pub use crate::session::{LogNavigator, Navigator, SessionContext};

/// Credential stores
pub use crate::storage::{CredentialStore, FileStore, MemoryStore};

// ============================================================================
// MODELS
// ============================================================================

/// Authentication payloads
pub use crate::model::auth::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshResponse, RegisterRequest,
    UserProfile,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types used in the public API
pub use reqwest::{Method, StatusCode};
