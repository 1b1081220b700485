use crate::application::interfaces::KeyService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

const KEYS_PATH: &str = "/api/keys";

/// Implementation of the API key service
pub struct KeyServiceImpl {
    client: Arc<HttpClient>,
}

impl KeyServiceImpl {
    /// Creates a new instance of the API key service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KeyService for KeyServiceImpl {
    async fn get_all(&self) -> Result<Value, AppError> {
        self.client.get(KEYS_PATH).await
    }

    async fn create(&self, data: &Value) -> Result<Value, AppError> {
        self.client.post(KEYS_PATH, data).await
    }

    async fn delete(&self, id: &str) -> Result<Value, AppError> {
        debug!("Deleting key {}", id);
        self.client.delete(&format!("{KEYS_PATH}/{id}")).await
    }

    async fn toggle(&self, id: &str) -> Result<Value, AppError> {
        debug!("Toggling key {}", id);
        self.client
            .patch::<Value, Value>(&format!("{KEYS_PATH}/{id}/toggle"), None)
            .await
    }
}
