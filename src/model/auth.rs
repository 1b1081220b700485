/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile of the authenticated user as returned by the auth endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserProfile {
    /// User identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Any further fields sent by the server, kept untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /api/auth/register`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Desired login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Plain text password
    pub password: String,
}

impl RegisterRequest {
    /// Builds a registration payload
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /api/auth/login`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plain text password
    pub password: String,
}

impl LoginRequest {
    /// Builds a login payload
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Response of the login and register endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Human readable status message
    #[serde(default)]
    pub message: String,
    /// The authenticated user
    pub user: UserProfile,
    /// Short-lived token authorizing API calls
    pub access_token: String,
    /// Longer-lived token used to obtain new access tokens
    pub refresh_token: String,
}

/// Response of `POST /api/auth/refresh`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    /// Newly issued access token
    pub access_token: String,
}

/// Response of `GET /api/auth/me`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentUserResponse {
    /// The user owning the access token
    pub user: UserProfile,
}

/// Error body returned by the server on failures
///
/// Application errors use `error`, token errors raised by the JWT layer use `msg`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Error description
    #[serde(alias = "msg")]
    pub error: String,
}
