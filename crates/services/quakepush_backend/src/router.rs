//! Top-level dispatch by path prefix.

use quakepush_common::{PushRequest, PushResponse};
use tracing::debug;

use crate::app_state::AppState;

/// Hand the request to the first subsystem whose prefix matches its path.
///
/// Tokens are checked before notifications. A path under neither prefix
/// gets a 404 with an empty body.
pub async fn handle_request(state: &AppState, request: &PushRequest) -> PushResponse {
    if request.path.starts_with(quakepush_tokens::PREFIX) {
        return quakepush_tokens::handle_request(&state.tokens, request).await;
    }

    if request.path.starts_with(quakepush_notifications::PREFIX) {
        return quakepush_notifications::handle_request(request).await;
    }

    debug!("No subsystem for {} {}", request.method, request.path);
    PushResponse::not_found()
}
