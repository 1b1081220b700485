/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error types for the API Console client

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (connection refused, timeout, TLS...)
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// I/O failure, typically from the file backed credential store
    Io(std::io::Error),
    /// The server answered with a non-success status
    Api {
        /// HTTP status returned by the server
        status: StatusCode,
        /// `error` field of the response body, or the raw body
        message: String,
    },
    /// The credential store could not be read or written
    Storage(String),
    /// A refresh was needed but no refresh token is stored
    NoRefreshToken,
    /// The token refresh failed; the session has been cleared
    RefreshFailed(Box<AppError>),
    /// Invalid caller supplied input or configuration
    InvalidInput(String),
}

impl AppError {
    /// Returns the HTTP status associated with this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            AppError::RefreshFailed(inner) => inner.status(),
            _ => None,
        }
    }

    /// Checks whether the server rejected the request as unauthenticated
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Api { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Api { status, message } => {
                if message.is_empty() {
                    write!(f, "api error {status}")
                } else {
                    write!(f, "api error {status}: {message}")
                }
            }
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
            AppError::NoRefreshToken => write!(f, "no refresh token available"),
            AppError::RefreshFailed(e) => write!(f, "token refresh failed: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::RefreshFailed(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
