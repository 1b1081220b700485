use crate::application::interfaces::LogService;
use crate::constants::{DEFAULT_LOGS_PAGE_SIZE, DEFAULT_PAGE};
use crate::error::AppError;
use crate::model::http::HttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Builds the log listing path; an empty `api_id` counts as no filter
pub(crate) fn logs_path(page: Option<u32>, limit: Option<u32>, api_id: Option<&str>) -> String {
    let page = page.unwrap_or(DEFAULT_PAGE);
    let limit = limit.unwrap_or(DEFAULT_LOGS_PAGE_SIZE);
    let mut path = format!("/api/logs?page={page}&limit={limit}");
    if let Some(api_id) = api_id.filter(|id| !id.is_empty()) {
        path.push_str("&api_id=");
        path.push_str(api_id);
    }
    path
}

/// Implementation of the request log service
pub struct LogServiceImpl {
    client: Arc<HttpClient>,
}

impl LogServiceImpl {
    /// Creates a new instance of the request log service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogService for LogServiceImpl {
    async fn get_all(
        &self,
        page: Option<u32>,
        limit: Option<u32>,
        api_id: Option<&str>,
    ) -> Result<Value, AppError> {
        let path = logs_path(page, limit, api_id);
        debug!("Fetching logs: {}", path);
        self.client.get(&path).await
    }

    async fn get_stats(&self) -> Result<Value, AppError> {
        self.client.get("/api/logs/stats").await
    }
}
