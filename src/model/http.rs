/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Authenticated HTTP client
//!
//! Every call goes through the same pipeline:
//!
//! 1. the stored access token, if any, is attached as `Authorization: Bearer <token>`
//! 2. a `401` on a call that was not resubmitted yet triggers one refresh
//!    through `POST /api/auth/refresh`, after which the call is sent again
//! 3. a failed refresh clears the session and sends the navigator to the
//!    login route
//!
//! Refreshes are single-flight: concurrent calls rejected with the same stale
//! token share one refresh.

use crate::application::config::Config;
use crate::constants::{REFRESH_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{ErrorBody, RefreshResponse};
use crate::model::request::RequestDescriptor;
use crate::session::{LogNavigator, Navigator, SessionContext};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpInternalClient, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// HTTP client injecting bearer credentials and refreshing them on `401`
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
    refresh_gate: Mutex<()>,
}

impl HttpClient {
    /// Creates a client using the session store selected by `config`
    ///
    /// Login redirects are only logged; use [`HttpClient::with_session`] to
    /// plug in a real navigator.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let session = config.session();
        Self::with_session(config, session, Arc::new(LogNavigator))
    }

    /// Creates a client over an explicit session and navigator
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - if the base URL can not be parsed
    /// * `AppError::Network` - if the underlying HTTP client can not be built
    pub fn with_session(
        config: Config,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        Url::parse(&config.rest_api.base_url).map_err(|e| {
            AppError::InvalidInput(format!(
                "invalid base url {:?}: {e}",
                config.rest_api.base_url
            ))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if config.rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.rest_api.timeout));
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
            session,
            navigator,
            refresh_gate: Mutex::new(()),
        })
    }

    /// Session credentials used by this client
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Client configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request::<(), T>(Method::GET, path, None).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a PATCH request, with or without a JSON body
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        self.request(Method::PATCH, path, body).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request::<(), T>(Method::DELETE, path, None).await
    }

    /// Makes a request and deserializes the JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response; an empty body decodes as JSON `null`
    /// * `Err(AppError)` - Transport failure, non-success status or refresh failure
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let mut request = RequestDescriptor::new(method, path);
        if let Some(body) = body {
            request = request.with_body(serde_json::to_value(body)?);
        }
        self.send(request).await
    }

    /// Runs a prepared descriptor and deserializes the JSON response
    pub async fn send<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<T, AppError> {
        let response = self.execute(request).await?;
        Self::parse_response(response).await
    }

    /// Runs a descriptor through the auth pipeline and returns the successful response
    pub async fn execute(&self, mut request: RequestDescriptor) -> Result<Response, AppError> {
        loop {
            let (response, token) = self.dispatch(&request).await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response);
            }

            if status != StatusCode::UNAUTHORIZED || request.is_retried() {
                return Err(Self::api_error(response).await);
            }

            request.mark_retried();
            warn!(
                "{} {} rejected with 401, refreshing access token",
                request.method(),
                request.path()
            );
            self.refresh_access_token(token.as_deref()).await?;
        }
    }

    /// Attaches the stored access token and sends the request
    ///
    /// Returns the response along with the token that was sent, so a later
    /// refresh can tell whether someone else already replaced it.
    async fn dispatch(
        &self,
        request: &RequestDescriptor,
    ) -> Result<(Response, Option<String>), AppError> {
        let token = self.session.access_token()?;
        let url = request.url(&self.config.rest_api.base_url);

        debug!("{} {}", request.method(), url);

        let mut builder = self.http_client.request(request.method().clone(), &url);
        if let Some(token) = &token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        debug!("Response status: {}", response.status());
        Ok((response, token))
    }

    /// Obtains a fresh access token after a call was rejected with `stale`
    ///
    /// Storing the new token is part of the refresh: if the store rejects it,
    /// the session is cleared and the navigator redirected like any other
    /// refresh failure.
    async fn refresh_access_token(&self, stale: Option<&str>) -> Result<String, AppError> {
        let _gate = self.refresh_gate.lock().await;

        match (self.session.access_token()?, stale) {
            (Some(current), _) if stale != Some(current.as_str()) => {
                debug!("Access token already refreshed by a concurrent request");
                return Ok(current);
            }
            (None, Some(_)) => {
                // cleared while we waited: a concurrent refresh failed or the user logged out
                debug!("Session cleared while waiting for refresh");
                return Err(AppError::RefreshFailed(Box::new(AppError::NoRefreshToken)));
            }
            _ => {}
        }

        let outcome = self
            .request_refresh()
            .await
            .and_then(|token| self.session.set_access_token(&token).map(|()| token));

        match outcome {
            Ok(token) => {
                info!("Access token refreshed");
                Ok(token)
            }
            Err(e) => {
                error!("Token refresh failed: {}", e);
                if let Err(clear_err) = self.session.clear() {
                    error!("Failed to clear session after refresh failure: {}", clear_err);
                }
                self.navigator.navigate(&self.config.login_route);
                Err(AppError::RefreshFailed(Box::new(e)))
            }
        }
    }

    /// Exchanges the stored refresh token for a new access token
    ///
    /// Sent outside the auth pipeline: the refresh token is the only credential.
    async fn request_refresh(&self) -> Result<String, AppError> {
        let refresh_token = self
            .session
            .refresh_token()?
            .ok_or(AppError::NoRefreshToken)?;

        let url = RequestDescriptor::new(Method::POST, REFRESH_PATH)
            .url(&self.config.rest_api.base_url);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&refresh_token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body: RefreshResponse = response.json().await?;
        Ok(body.access_token)
    }

    /// Builds an `AppError::Api` from a failed response
    async fn api_error(response: Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) => body,
        };
        error!("Request failed with status {}: {}", status, message);
        AppError::Api { status, message }
    }

    /// Parses a response into the desired type
    async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}
