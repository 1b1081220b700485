use api_console_client::model::auth::{
    AuthResponse, ErrorBody, LoginRequest, RefreshResponse, UserProfile,
};
use serde_json::json;

#[test]
fn test_user_profile_reads_mongo_id() {
    let user: UserProfile = serde_json::from_value(json!({
        "_id": "65f0c0ffee",
        "username": "alice",
        "email": "alice@example.com",
        "created_at": "2026-10-01T00:00:00"
    }))
    .unwrap();

    assert_eq!(user.id, "65f0c0ffee");
    assert_eq!(user.extra["created_at"], "2026-10-01T00:00:00");
}

#[test]
fn test_user_profile_accepts_plain_id() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": "u1",
        "username": "alice",
        "email": "alice@example.com"
    }))
    .unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.extra.is_empty());
}

#[test]
fn test_user_profile_keeps_unknown_fields_when_stored() {
    let raw = json!({
        "_id": "u1",
        "username": "alice",
        "email": "alice@example.com",
        "role": "admin"
    });
    let user: UserProfile = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(serde_json::to_value(&user).unwrap(), raw);
}

#[test]
fn test_auth_response_without_message() {
    let auth: AuthResponse = serde_json::from_value(json!({
        "user": {"_id": "u1", "username": "alice", "email": "alice@example.com"},
        "access_token": "a",
        "refresh_token": "r"
    }))
    .unwrap();
    assert!(auth.message.is_empty());
    assert_eq!(auth.access_token, "a");
}

#[test]
fn test_login_request_wire_format() {
    let body = serde_json::to_value(LoginRequest::new("alice@example.com", "secret")).unwrap();
    assert_eq!(body, json!({"email": "alice@example.com", "password": "secret"}));
}

#[test]
fn test_refresh_response() {
    let refresh: RefreshResponse =
        serde_json::from_str(r#"{"access_token":"fresh"}"#).unwrap();
    assert_eq!(refresh.access_token, "fresh");
}

#[test]
fn test_error_body_accepts_error_and_msg() {
    let app: ErrorBody = serde_json::from_str(r#"{"error":"Invalid email format"}"#).unwrap();
    assert_eq!(app.error, "Invalid email format");

    let jwt: ErrorBody = serde_json::from_str(r#"{"msg":"Token has expired"}"#).unwrap();
    assert_eq!(jwt.error, "Token has expired");
}
