// --- File: crates/quakepush_common/src/http.rs ---
use axum::{
    body::Body,
    response::{IntoResponse, Response},
};

use crate::models::PushResponse;

/// Render a [`PushResponse`] as an Axum response. A missing body becomes an
/// empty one.
impl IntoResponse for PushResponse {
    fn into_response(self) -> Response {
        let (status, body) = self.into_parts();
        match body {
            Some(text) => (status, text).into_response(),
            None => (status, Body::empty()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[tokio::test]
    async fn test_empty_body_renders_empty() {
        let response = PushResponse::from_status(StatusCode::SERVICE_UNAVAILABLE).into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_text_body_is_kept() {
        let response = PushResponse::with_body(StatusCode::OK, "Hello").into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"Hello");
    }
}
