use crate::common::{auth_body, client_for, seed_session};
use api_console_client::prelude::*;
use mockito::Matcher;

#[tokio::test]
async fn login_stores_the_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(
            json!({"email": "alice@example.com", "password": "secret"}),
        ))
        .with_status(200)
        .with_body(auth_body("access-1", "refresh-1"))
        .expect(1)
        .create_async()
        .await;

    let (client, session, _) = client_for(&server);

    let auth = client
        .auth()
        .login(&LoginRequest::new("alice@example.com", "secret"))
        .await
        .expect("login should succeed");

    assert_eq!(auth.message, "Login successful");
    assert_eq!(auth.user.id, "u1");
    assert_eq!(session.access_token().unwrap().as_deref(), Some("access-1"));
    assert_eq!(session.refresh_token().unwrap().as_deref(), Some("refresh-1"));

    let user = session.user().unwrap().expect("user should be stored");
    assert_eq!(user.username, "alice");
    assert_eq!(user.extra["created_at"], "2026-10-01T00:00:00");
    mock.assert_async().await;
}

#[tokio::test]
async fn bad_credentials_without_session_redirect_to_login() {
    let mut server = mockito::Server::new_async().await;
    let login = server
        .mock("POST", "/api/auth/login")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_body(r#"{"error":"Invalid email or password"}"#)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let (client, session, visits) = client_for(&server);

    let err = client
        .auth()
        .login(&LoginRequest::new("alice@example.com", "wrong"))
        .await
        .unwrap_err();

    match err {
        AppError::RefreshFailed(cause) => assert!(matches!(*cause, AppError::NoRefreshToken)),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(!session.is_authenticated().unwrap());
    assert_eq!(*visits.lock().unwrap(), vec!["/login".to_string()]);
    login.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn bad_credentials_with_session_refresh_then_fail() {
    let mut server = mockito::Server::new_async().await;
    let rejected = server
        .mock("POST", "/api/auth/login")
        .match_header("authorization", "Bearer previous")
        .with_status(401)
        .with_body(r#"{"error":"Invalid email or password"}"#)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .match_header("authorization", "Bearer previous-refresh")
        .with_status(200)
        .with_body(r#"{"access_token":"renewed"}"#)
        .expect(1)
        .create_async()
        .await;
    let resent = server
        .mock("POST", "/api/auth/login")
        .match_header("authorization", "Bearer renewed")
        .match_body(Matcher::Json(
            json!({"email": "alice@example.com", "password": "wrong"}),
        ))
        .with_status(401)
        .with_body(r#"{"error":"Invalid email or password"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, session, visits) = client_for(&server);
    seed_session(&session, "previous", "previous-refresh");

    let err = client
        .auth()
        .login(&LoginRequest::new("alice@example.com", "wrong"))
        .await
        .unwrap_err();

    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Invalid email or password");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    // the refresh succeeded, so the session survives with the renewed token
    assert_eq!(session.access_token().unwrap().as_deref(), Some("renewed"));
    assert_eq!(session.refresh_token().unwrap().as_deref(), Some("previous-refresh"));
    assert!(visits.lock().unwrap().is_empty());
    rejected.assert_async().await;
    refresh.assert_async().await;
    resent.assert_async().await;
}

#[tokio::test]
async fn register_stores_the_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::Json(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret"
        })))
        .with_status(201)
        .with_body(auth_body("access-r", "refresh-r"))
        .expect(1)
        .create_async()
        .await;

    let (client, session, _) = client_for(&server);

    client
        .auth()
        .register(&RegisterRequest::new("alice", "alice@example.com", "secret"))
        .await
        .expect("register should succeed");

    assert_eq!(session.access_token().unwrap().as_deref(), Some("access-r"));
    assert_eq!(session.refresh_token().unwrap().as_deref(), Some("refresh-r"));
    mock.assert_async().await;
}

#[tokio::test]
async fn current_user_uses_stored_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/auth/me")
        .match_header("authorization", "Bearer access-1")
        .with_status(200)
        .with_body(r#"{"user":{"_id":"u1","username":"alice","email":"alice@example.com"}}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, session, _) = client_for(&server);
    seed_session(&session, "access-1", "refresh-1");

    let me = client.auth().get_current_user().await.unwrap();
    assert_eq!(me.user.email, "alice@example.com");
    mock.assert_async().await;
}

#[tokio::test]
async fn logout_clears_without_network() {
    let server = mockito::Server::new_async().await;
    let (client, session, visits) = client_for(&server);
    seed_session(&session, "access-1", "refresh-1");

    client.auth().logout().await.unwrap();

    assert_eq!(session.access_token().unwrap(), None);
    assert_eq!(session.refresh_token().unwrap(), None);
    assert_eq!(session.user().unwrap(), None);
    assert!(visits.lock().unwrap().is_empty());
}
