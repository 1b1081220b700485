/// Module containing the API resource service
pub mod api_service;
/// Module containing the authentication service
pub mod auth_service;
/// Module containing the API key service
pub mod key_service;
/// Module containing the request log service
pub mod log_service;

pub use api_service::ApiServiceImpl;
pub use auth_service::AuthServiceImpl;
pub use key_service::KeyServiceImpl;
pub use log_service::LogServiceImpl;
