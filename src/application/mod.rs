/// Client facade bundling the endpoint services
pub mod client;
/// Application configuration module
pub mod config;
/// Endpoint group interfaces
pub mod interfaces;
/// Endpoint group implementations
pub mod services;
