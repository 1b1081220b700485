/// Base URL used when `API_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
/// Default request timeout in seconds handed to the HTTP transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Route the navigator is sent to when the session can not be recovered
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("api-console-client/", env!("CARGO_PKG_VERSION"));

/// Storage key holding the current access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key holding the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key holding the serialized user profile
pub const USER_KEY: &str = "user";

/// Endpoint used to exchange a refresh token for a new access token
pub const REFRESH_PATH: &str = "/api/auth/refresh";

/// Default page for paginated listings
pub const DEFAULT_PAGE: u32 = 1;
/// Default page size when listing API resources
pub const DEFAULT_APIS_PAGE_SIZE: u32 = 10;
/// Default page size when listing request logs
pub const DEFAULT_LOGS_PAGE_SIZE: u32 = 20;

/// Number of times a logical request may be resubmitted after a token refresh
pub const MAX_AUTH_RETRIES: u8 = 1;
