//! End-to-end behaviour of the token endpoints over the in-memory store.

use quakepush_common::{Method, PushRequest, StatusCode};
use quakepush_db::{MemoryTokenStore, TokenStore};
use quakepush_tokens::{handle_request, Category, TableMap, TokenState};
use std::sync::Arc;

fn create_state() -> (Arc<MemoryTokenStore>, TokenState) {
    let store = Arc::new(MemoryTokenStore::new());
    let state = TokenState::new(store.clone(), TableMap::default());
    (store, state)
}

fn put(category: Category, token: &str, time_epoch: i64) -> PushRequest {
    PushRequest::new(
        Method::PUT,
        format!("/v1/tokens/{}/{}", category, token),
        time_epoch,
    )
    .with_body(r#"{"uuid":"5f0c","min":10}"#)
}

fn delete(category: Category, token: &str) -> PushRequest {
    PushRequest::new(
        Method::DELETE,
        format!("/v1/tokens/{}/{}", category, token),
        0,
    )
}

#[tokio::test]
async fn test_second_put_keeps_created_at_for_every_category() {
    let (store, state) = create_state();
    let tables = TableMap::default();

    for category in Category::ALL {
        for token in ["abc123", "fcm:APA91bH-x_y", "日本語"] {
            let first = handle_request(&state, &put(category, token, 1_000)).await;
            let second = handle_request(&state, &put(category, token, 5_000)).await;
            assert_eq!(first.status(), StatusCode::OK);
            assert_eq!(second.status(), StatusCode::OK);

            let record = store
                .find_token(tables.resolve(category), token)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(record.created_at, 1_000, "{}/{}", category, token);
            assert_eq!(record.updated_at, 5_000, "{}/{}", category, token);
        }
    }
}

#[tokio::test]
async fn test_delete_without_record_is_ok_for_every_category() {
    let (_store, state) = create_state();

    for category in Category::ALL {
        let response = handle_request(&state, &delete(category, "never-registered")).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", category);
    }
}

#[tokio::test]
async fn test_put_delete_delete() {
    let (store, state) = create_state();

    assert_eq!(
        handle_request(&state, &put(Category::Quake, "abc123", 1)).await.status(),
        StatusCode::OK
    );
    assert_eq!(
        handle_request(&state, &delete(Category::Quake, "abc123")).await.status(),
        StatusCode::OK
    );
    assert_eq!(
        handle_request(&state, &delete(Category::Quake, "abc123")).await.status(),
        StatusCode::OK
    );
    assert!(store.is_empty("P2PQuakeMobilePushQuake"));
}

#[tokio::test]
async fn test_concurrent_puts_keep_first_created_at() {
    let (store, state) = create_state();
    let state = Arc::new(state);

    handle_request(&state, &put(Category::UserQuake, "shared", 100)).await;

    let mut handles = Vec::new();
    for i in 1..=32_i64 {
        let state = Arc::clone(&state);
        handles.push(tokio::spawn(async move {
            handle_request(&state, &put(Category::UserQuake, "shared", 100 + i)).await
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().status(), StatusCode::OK);
    }

    let record = store
        .find_token("P2PQuakeMobilePushUserquake", "shared")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.created_at, 100);
    assert!(record.updated_at > 100);
}
