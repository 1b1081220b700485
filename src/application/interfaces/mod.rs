/// API resource CRUD interface
pub mod apis;
/// Authentication interface
pub mod auth;
/// API key management interface
pub mod keys;
/// Request log interface
pub mod logs;

pub use apis::ApiService;
pub use auth::AuthService;
pub use keys::KeyService;
pub use logs::LogService;
