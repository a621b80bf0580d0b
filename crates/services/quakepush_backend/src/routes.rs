use axum::{body::Bytes, extract::State, Router};
use http::{Method, Uri};
use quakepush_common::{PushRequest, PushResponse};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::router::handle_request;

/// Build the HTTP router.
///
/// Every request lands in a single fallback that normalizes it into a
/// [`PushRequest`]; path dispatch happens in [`handle_request`].
pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> PushResponse {
    let request = PushRequest::new(method, uri.path(), chrono::Utc::now().timestamp_millis())
        .with_body(String::from_utf8_lossy(&body));

    handle_request(&state, &request).await
}
