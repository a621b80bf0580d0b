//! Drives the full HTTP stack in-process with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use quakepush_backend::{routes, AppState};
use quakepush_common::BoxFuture;
use quakepush_config::AppConfig;
use quakepush_db::{DbError, MemoryTokenStore, StoreError, TokenRecord, TokenStore};
use std::sync::Arc;
use tower::ServiceExt;

/// Store that fails every write with a fixed error.
struct FailingStore(StoreError);

impl TokenStore for FailingStore {
    fn init_tables<'a>(&'a self, _tables: &'a [String]) -> BoxFuture<'a, (), DbError> {
        Box::pin(async { Ok(()) })
    }

    fn upsert_token<'a>(
        &'a self,
        _table: &'a str,
        _token: &'a str,
        _timestamp: i64,
    ) -> BoxFuture<'a, (), StoreError> {
        let err = self.0.clone();
        Box::pin(async move { Err(err) })
    }

    fn delete_token<'a>(&'a self, _table: &'a str, _token: &'a str) -> BoxFuture<'a, (), StoreError> {
        let err = self.0.clone();
        Box::pin(async move { Err(err) })
    }

    fn find_token<'a>(
        &'a self,
        _table: &'a str,
        _token: &'a str,
    ) -> BoxFuture<'a, Option<TokenRecord>, StoreError> {
        Box::pin(async { Ok(None) })
    }
}

fn app_with_store(store: Arc<dyn TokenStore>) -> Router {
    routes(Arc::new(AppState::new(Arc::new(AppConfig::default()), store)))
}

async fn send(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_put_twice_keeps_created_at() {
    let store = Arc::new(MemoryTokenStore::new());
    let app = app_with_store(store.clone());

    let (status, body) = send(&app, "PUT", "/v1/tokens/quake/abc123", r#"{"uuid":"u","min":1}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    let first = store
        .find_token("P2PQuakeMobilePushQuake", "abc123")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.created_at, first.updated_at);

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (status, _) = send(&app, "PUT", "/v1/tokens/quake/abc123", "").await;
    assert_eq!(status, StatusCode::OK);
    let second = store
        .find_token("P2PQuakeMobilePushQuake", "abc123")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at > first.updated_at);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let store = Arc::new(MemoryTokenStore::new());
    let app = app_with_store(store.clone());

    assert_eq!(send(&app, "PUT", "/v1/tokens/eew/abc123", "").await.0, StatusCode::OK);
    assert_eq!(send(&app, "DELETE", "/v1/tokens/eew/abc123", "").await.0, StatusCode::OK);
    assert_eq!(send(&app, "DELETE", "/v1/tokens/eew/abc123", "").await.0, StatusCode::OK);
    assert!(store.is_empty("P2PQuakeMobilePushEEW"));
}

#[tokio::test]
async fn test_unroutable_requests_are_empty_404() {
    let app = app_with_store(Arc::new(MemoryTokenStore::new()));

    for (method, uri) in [
        ("PUT", "/v1/tokens/bogus/abc123"),
        ("DELETE", "/v1/tokens/bogus/abc123"),
        ("PUT", "/v1/tokens/quake/"),
        ("GET", "/v1/tokens/quake/abc123"),
        ("POST", "/v1/tokens/quake/abc123"),
        ("GET", "/"),
        ("PUT", "/v2/tokens/quake/abc123"),
    ] {
        let (status, body) = send(&app, method, uri, "").await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert!(body.is_empty(), "{} {}", method, uri);
    }
}

#[tokio::test]
async fn test_notifications_placeholder() {
    let app = app_with_store(Arc::new(MemoryTokenStore::new()));

    for (method, uri) in [
        ("GET", "/v1/notifications"),
        ("POST", "/v1/notifications/send"),
        ("DELETE", "/v1/notifications/x/y"),
    ] {
        let (status, body) = send(&app, method, uri, "{}").await;
        assert_eq!(status, StatusCode::OK, "{} {}", method, uri);
        assert_eq!(body, "Hello, notifications!");
    }
}

#[tokio::test]
async fn test_store_failures_map_to_status() {
    let throttled = app_with_store(Arc::new(FailingStore(StoreError::Throttled(
        "ProvisionedThroughputExceeded".into(),
    ))));
    let broken = app_with_store(Arc::new(FailingStore(StoreError::Other(
        "no such table".into(),
    ))));

    for method in ["PUT", "DELETE"] {
        let (status, body) = send(&throttled, method, "/v1/tokens/tsunami/abc123", "").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{}", method);
        assert!(body.is_empty());

        let (status, _) = send(&broken, method, "/v1/tokens/tsunami/abc123", "").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", method);
    }
}

#[tokio::test]
async fn test_state_from_config_uses_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.storage.url = Some(format!("sqlite://{}", dir.path().join("push.db").display()));

    let state = Arc::new(AppState::from_config(Arc::new(config)).await.unwrap());
    let app = routes(state.clone());

    assert_eq!(send(&app, "PUT", "/v1/tokens/userquake/abc123", "").await.0, StatusCode::OK);
    let record = state
        .tokens
        .store
        .find_token("P2PQuakeMobilePushUserquake", "abc123")
        .await
        .unwrap();
    assert!(record.is_some());

    assert_eq!(send(&app, "DELETE", "/v1/tokens/userquake/abc123", "").await.0, StatusCode::OK);
    assert_eq!(send(&app, "DELETE", "/v1/tokens/userquake/abc123", "").await.0, StatusCode::OK);
}
