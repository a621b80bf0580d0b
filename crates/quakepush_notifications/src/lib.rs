//! Notification endpoints for quakepush
//!
//! Delivery is not implemented yet. Every request under [`PREFIX`] is
//! acknowledged with a fixed body so deployments can check that routing
//! reaches this subsystem.

use quakepush_common::{PushRequest, PushResponse, StatusCode};
use tracing::debug;

/// Path prefix owned by this subsystem
pub const PREFIX: &str = "/v1/notifications";

/// Body returned for every notification request
pub const PLACEHOLDER_BODY: &str = "Hello, notifications!";

/// Answer any request under [`PREFIX`], regardless of method or path suffix.
pub async fn handle_request(request: &PushRequest) -> PushResponse {
    debug!("Notification placeholder hit: {} {}", request.method, request.path);
    PushResponse::with_body(StatusCode::OK, PLACEHOLDER_BODY)
}
