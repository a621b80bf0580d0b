use quakepush_common::{Method, PushRequest, PushResponse};
use tracing::debug;

use crate::handlers::{create_or_update_token, delete_token, TokenState};
use crate::matcher::match_token_path;

/// Dispatch a request whose path starts with [`crate::PREFIX`].
///
/// - `PUT /v1/tokens/{category}/{token}` registers or refreshes the token
/// - `DELETE /v1/tokens/{category}/{token}` removes it
///
/// Any other method, and any path that is not a valid category/token
/// pair, is answered with 404.
pub async fn handle_request(state: &TokenState, request: &PushRequest) -> PushResponse {
    let Some(matched) = match_token_path(&request.path) else {
        debug!("No token route for {}", request.path);
        return PushResponse::not_found();
    };

    let table = state.tables.resolve(matched.category);

    match request.method {
        Method::PUT => {
            create_or_update_token(
                state.store.as_ref(),
                table,
                &matched.token,
                request.time_epoch,
                &request.body,
            )
            .await
        }
        Method::DELETE => delete_token(state.store.as_ref(), table, &matched.token).await,
        _ => {
            debug!("Unsupported method {} for {}", request.method, request.path);
            PushResponse::not_found()
        }
    }
}
