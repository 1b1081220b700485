use crate::application::interfaces::ApiService;
use crate::constants::{DEFAULT_APIS_PAGE_SIZE, DEFAULT_PAGE};
use crate::error::AppError;
use crate::model::http::HttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Implementation of the API resource service
pub struct ApiServiceImpl {
    client: Arc<HttpClient>,
}

impl ApiServiceImpl {
    /// Creates a new instance of the API resource service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ApiService for ApiServiceImpl {
    async fn get_all(&self, page: Option<u32>, limit: Option<u32>) -> Result<Value, AppError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let limit = limit.unwrap_or(DEFAULT_APIS_PAGE_SIZE);
        debug!("Listing APIs, page {} limit {}", page, limit);
        self.client
            .get(&format!("/api/apis?page={page}&limit={limit}"))
            .await
    }

    async fn get_one(&self, id: &str) -> Result<Value, AppError> {
        self.client.get(&format!("/api/apis/{id}")).await
    }

    async fn create(&self, data: &Value) -> Result<Value, AppError> {
        self.client.post("/api/apis", data).await
    }

    async fn update(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        self.client.put(&format!("/api/apis/{id}"), data).await
    }

    async fn delete(&self, id: &str) -> Result<Value, AppError> {
        debug!("Deleting API {}", id);
        self.client.delete(&format!("/api/apis/{id}")).await
    }
}
