//! Normalized request and response envelopes.
//!
//! The transport in front of the registry (an HTTP server, a function
//! runtime adapter, a test) reduces whatever it receives to a
//! [`PushRequest`] and renders the [`PushResponse`] it gets back.

use http::{Method, StatusCode};

/// A request as seen by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRequest {
    /// HTTP method of the request
    pub method: Method,

    /// Request path relative to the deployment root, e.g. `/v1/tokens/quake/abc`
    pub path: String,

    /// Time the request was received, in epoch milliseconds
    pub time_epoch: i64,

    /// Raw request body, empty when none was sent
    pub body: String,
}

impl PushRequest {
    /// Create a request with an empty body.
    pub fn new(method: Method, path: impl Into<String>, time_epoch: i64) -> Self {
        Self {
            method,
            path: path.into(),
            time_epoch,
            body: String::new(),
        }
    }

    /// Replace the body of the request.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// A response produced by the router. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushResponse {
    status: StatusCode,
    body: Option<String>,
}

impl PushResponse {
    /// 200 with an empty body.
    pub fn ok() -> Self {
        Self::from_status(StatusCode::OK)
    }

    /// 404 with an empty body.
    pub fn not_found() -> Self {
        Self::from_status(StatusCode::NOT_FOUND)
    }

    /// Any status with an empty body.
    pub fn from_status(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    /// Any status with a text body.
    pub fn with_body(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub(crate) fn into_parts(self) -> (StatusCode, Option<String>) {
        (self.status, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder_keeps_fields() {
        let request = PushRequest::new(Method::PUT, "/v1/tokens/eew/abc", 1_700_000_000_000)
            .with_body(r#"{"uuid":"x"}"#);

        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/v1/tokens/eew/abc");
        assert_eq!(request.time_epoch, 1_700_000_000_000);
        assert_eq!(request.body, r#"{"uuid":"x"}"#);
    }

    #[test]
    fn test_response_constructors() {
        assert_eq!(PushResponse::ok().status(), StatusCode::OK);
        assert_eq!(PushResponse::ok().body(), None);
        assert_eq!(PushResponse::not_found().status(), StatusCode::NOT_FOUND);

        let response = PushResponse::with_body(StatusCode::OK, "hello");
        assert_eq!(response.body(), Some("hello"));
    }
}
