/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Credential storage backends
//!
//! The client never talks to a concrete store; it goes through the
//! [`CredentialStore`] capability so the session can live in memory, on disk,
//! or in any other key-value backend.

/// JSON file backed store
pub mod file;
/// In-memory store
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::AppError;

/// Minimal string key-value capability used to persist session credentials
pub trait CredentialStore: Send + Sync {
    /// Returns the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
