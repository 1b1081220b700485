use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the API key endpoints
#[async_trait]
pub trait KeyService: Send + Sync {
    /// Lists keys (`GET /api/keys`)
    async fn get_all(&self) -> Result<Value, AppError>;

    /// Creates a key (`POST /api/keys`)
    async fn create(&self, data: &Value) -> Result<Value, AppError>;

    /// Deletes a key (`DELETE /api/keys/{id}`)
    async fn delete(&self, id: &str) -> Result<Value, AppError>;

    /// Flips a key between enabled and disabled (`PATCH /api/keys/{id}/toggle`)
    async fn toggle(&self, id: &str) -> Result<Value, AppError>;
}
