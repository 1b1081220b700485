use crate::common::{client_for, seed_session};
use api_console_client::prelude::*;
use assert_json_diff::assert_json_eq;
use mockito::Matcher;

#[tokio::test]
async fn logs_listing_with_filter() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/logs?page=2&limit=20&api_id=abc")
        .with_status(200)
        .with_body(r#"{"logs":[],"total":0,"page":2}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, session, _) = client_for(&server);
    seed_session(&session, "access-1", "refresh-1");

    let logs = client
        .logs()
        .get_all(Some(2), Some(20), Some("abc"))
        .await
        .unwrap();
    assert_json_eq!(logs, json!({"logs": [], "total": 0, "page": 2}));
    mock.assert_async().await;
}

#[tokio::test]
async fn logs_listing_defaults() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/logs?page=1&limit=20")
        .with_status(200)
        .with_body(r#"{"logs":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _, _) = client_for(&server);

    client.logs().get_all(None, None, None).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn apis_listing_defaults_to_ten_per_page() {
    let mut server = mockito::Server::new_async().await;
    let defaults = server
        .mock("GET", "/api/apis?page=1&limit=10")
        .with_status(200)
        .with_body(r#"{"apis":[]}"#)
        .expect(1)
        .create_async()
        .await;
    let explicit = server
        .mock("GET", "/api/apis?page=3&limit=50")
        .with_status(200)
        .with_body(r#"{"apis":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _, _) = client_for(&server);

    client.apis().get_all(None, None).await.unwrap();
    client.apis().get_all(Some(3), Some(50)).await.unwrap();
    defaults.assert_async().await;
    explicit.assert_async().await;
}

#[tokio::test]
async fn api_resource_crud() {
    let mut server = mockito::Server::new_async().await;
    let update = json!({"name": "weather-v2"});

    let put = server
        .mock("PUT", "/api/apis/a1")
        .match_header("authorization", "Bearer access-1")
        .match_body(Matcher::Json(update.clone()))
        .with_status(200)
        .with_body(r#"{"_id":"a1","name":"weather-v2"}"#)
        .expect(1)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/apis/a1")
        .with_status(200)
        .with_body(r#"{"message":"API deleted successfully"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, session, _) = client_for(&server);
    seed_session(&session, "access-1", "refresh-1");

    let updated = client.apis().update("a1", &update).await.unwrap();
    assert_eq!(updated["name"], "weather-v2");

    let deleted = client.apis().delete("a1").await.unwrap();
    assert_eq!(deleted["message"], "API deleted successfully");

    put.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn key_management() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/api/keys")
        .match_body(Matcher::Json(json!({"name": "ci"})))
        .with_status(201)
        .with_body(r#"{"_id":"k1","key":"ak_123","enabled":true}"#)
        .expect(1)
        .create_async()
        .await;
    let toggle = server
        .mock("PATCH", "/api/keys/k1/toggle")
        .with_status(200)
        .with_body(r#"{"_id":"k1","enabled":false}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, session, _) = client_for(&server);
    seed_session(&session, "access-1", "refresh-1");

    let key = client.keys().create(&json!({"name": "ci"})).await.unwrap();
    assert_eq!(key["key"], "ak_123");

    let toggled = client.keys().toggle("k1").await.unwrap();
    assert_eq!(toggled["enabled"], false);

    create.assert_async().await;
    toggle.assert_async().await;
}

#[tokio::test]
async fn empty_response_body_decodes_as_null() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("DELETE", "/api/keys/k9")
        .with_status(204)
        .create_async()
        .await;

    let (client, _, _) = client_for(&server);

    let body = client.keys().delete("k9").await.unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn raw_transport_reaches_unwrapped_endpoints() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status":"healthy"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _, _) = client_for(&server);

    let health: Value = client.http().get("/health").await.unwrap();
    assert_eq!(health["status"], "healthy");
    mock.assert_async().await;
}
