use crate::error::AppError;
use crate::model::auth::{AuthResponse, CurrentUserResponse, LoginRequest, RegisterRequest};
use async_trait::async_trait;

/// Interface for the authentication endpoints
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates an account (`POST /api/auth/register`) and stores the returned session
    async fn register(&self, data: &RegisterRequest) -> Result<AuthResponse, AppError>;

    /// Logs in (`POST /api/auth/login`) and stores the returned session
    async fn login(&self, data: &LoginRequest) -> Result<AuthResponse, AppError>;

    /// Fetches the user owning the current access token (`GET /api/auth/me`)
    async fn get_current_user(&self) -> Result<CurrentUserResponse, AppError>;

    /// Drops the stored session; no request is sent
    async fn logout(&self) -> Result<(), AppError>;
}
