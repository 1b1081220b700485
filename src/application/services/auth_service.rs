use crate::application::interfaces::AuthService;
use crate::error::AppError;
use crate::model::auth::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest};
use crate::model::http::HttpClient;
use crate::model::request::RequestDescriptor;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";
const CURRENT_USER_PATH: &str = "/api/auth/me";

/// Implementation of the authentication service
pub struct AuthServiceImpl {
    client: Arc<HttpClient>,
}

impl AuthServiceImpl {
    /// Creates a new instance of the authentication service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    async fn exchange_credentials(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<AuthResponse, AppError> {
        let request = RequestDescriptor::new(Method::POST, path).with_body(body);
        let auth: AuthResponse = self.client.send(request).await?;
        self.client.session().store_auth(&auth)?;
        Ok(auth)
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, data: &RegisterRequest) -> Result<AuthResponse, AppError> {
        info!("Registering user {}", data.username);
        let auth = self
            .exchange_credentials(REGISTER_PATH, serde_json::to_value(data)?)
            .await?;
        info!("✓ Registered as {}", auth.user.username);
        Ok(auth)
    }

    async fn login(&self, data: &LoginRequest) -> Result<AuthResponse, AppError> {
        info!("Logging in as {}", data.email);
        let auth = self
            .exchange_credentials(LOGIN_PATH, serde_json::to_value(data)?)
            .await?;
        info!("✓ Login successful, user: {}", auth.user.username);
        Ok(auth)
    }

    async fn get_current_user(&self) -> Result<CurrentUserResponse, AppError> {
        let response: CurrentUserResponse = self.client.get(CURRENT_USER_PATH).await?;
        debug!("Current user: {}", response.user.username);
        Ok(response)
    }

    async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");
        self.client.session().clear()
    }
}
