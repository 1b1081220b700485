use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the request log endpoints
#[async_trait]
pub trait LogService: Send + Sync {
    /// Lists request logs (`GET /api/logs?page=&limit=[&api_id=]`)
    ///
    /// # Arguments
    /// * `page` - Page number, defaults to 1
    /// * `limit` - Page size, defaults to 20
    /// * `api_id` - Restricts the listing to one API resource; empty means no filter
    async fn get_all(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
        api_id: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Aggregate statistics over all logs (`GET /api/logs/stats`)
    async fn get_stats(&self) -> Result<Value, AppError>;
}
