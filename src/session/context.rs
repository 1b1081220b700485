/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Session context
//!
//! Wraps a [`CredentialStore`] with typed read/write/clear operations for the
//! three session keys: `access_token`, `refresh_token` and `user`.

use crate::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use crate::error::AppError;
use crate::model::auth::{AuthResponse, UserProfile};
use crate::storage::{CredentialStore, MemoryStore};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Handle to the current session credentials
///
/// Cloning is cheap; clones share the same underlying store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn CredentialStore>,
}

impl SessionContext {
    /// Creates a session context over `store`
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Creates a session context backed by a fresh in-memory store
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Current access token, if any
    pub fn access_token(&self) -> Result<Option<String>, AppError> {
        self.store.get(ACCESS_TOKEN_KEY)
    }

    /// Current refresh token, if any
    pub fn refresh_token(&self) -> Result<Option<String>, AppError> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    /// Stored user profile, if any
    pub fn user(&self) -> Result<Option<UserProfile>, AppError> {
        match self.store.get(USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Whether an access token is stored
    pub fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.access_token()?.is_some())
    }

    /// Replaces the access token
    pub fn set_access_token(&self, token: &str) -> Result<(), AppError> {
        self.store.set(ACCESS_TOKEN_KEY, token)
    }

    /// Replaces the refresh token
    pub fn set_refresh_token(&self, token: &str) -> Result<(), AppError> {
        self.store.set(REFRESH_TOKEN_KEY, token)
    }

    /// Replaces the stored user profile
    pub fn set_user(&self, user: &UserProfile) -> Result<(), AppError> {
        let raw = serde_json::to_string(user)?;
        self.store.set(USER_KEY, &raw)
    }

    /// Persists everything returned by a successful login or registration
    pub fn store_auth(&self, auth: &AuthResponse) -> Result<(), AppError> {
        self.set_access_token(&auth.access_token)?;
        self.set_refresh_token(&auth.refresh_token)?;
        self.set_user(&auth.user)?;
        debug!("Session stored for user {}", auth.user.username);
        Ok(())
    }

    /// Removes all three session keys
    ///
    /// Every key is attempted even if an earlier removal fails; the first
    /// failure is returned.
    pub fn clear(&self) -> Result<(), AppError> {
        let mut first_error = None;
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                warn!("Failed to remove {} from credential store: {}", key, e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => {
                debug!("Session cleared");
                Ok(())
            }
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}
