use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the API resource endpoints
///
/// Payloads are passed through untouched.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Lists API resources (`GET /api/apis?page=&limit=`)
    ///
    /// # Arguments
    /// * `page` - Page number, defaults to 1
    /// * `limit` - Page size, defaults to 10
    async fn get_all(&self, page: Option<u32>, limit: Option<u32>) -> Result<Value, AppError>;

    /// Gets one API resource (`GET /api/apis/{id}`)
    async fn get_one(&self, id: &str) -> Result<Value, AppError>;

    /// Creates an API resource (`POST /api/apis`)
    async fn create(&self, data: &Value) -> Result<Value, AppError>;

    /// Updates an API resource (`PUT /api/apis/{id}`)
    async fn update(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes an API resource (`DELETE /api/apis/{id}`)
    async fn delete(&self, id: &str) -> Result<Value, AppError>;
}
