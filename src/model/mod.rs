/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Authentication payloads and user profile
pub mod auth;
/// Authenticated HTTP client with token refresh
pub mod http;
/// Request descriptors carried through the auth pipeline
pub mod request;
