use crate::constants::MAX_AUTH_RETRIES;
use reqwest::Method;
use serde_json::Value;

/// One logical API call as it travels through the auth pipeline
///
/// The descriptor is resubmitted as-is after a token refresh, so the body is
/// kept as an already serialized JSON value. `attempts` counts how many times
/// the call has been resubmitted because of a `401`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    body: Option<Value>,
    attempts: u8,
}

impl RequestDescriptor {
    /// Creates a descriptor without body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            attempts: 0,
        }
    }

    /// Attaches a JSON body
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// HTTP verb
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL, query string included
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// JSON body, if any
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Number of auth resubmissions so far
    #[must_use]
    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    /// Whether this call already used up its refresh-and-retry
    #[must_use]
    pub fn is_retried(&self) -> bool {
        self.attempts >= MAX_AUTH_RETRIES
    }

    /// Records a resubmission
    pub fn mark_retried(&mut self) {
        self.attempts = self.attempts.saturating_add(1);
    }

    /// Resolves the absolute URL against `base_url`
    ///
    /// Absolute paths (`http://...`, `https://...`) are used untouched.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        if self.path.starts_with("http://") || self.path.starts_with("https://") {
            return self.path.clone();
        }
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}
