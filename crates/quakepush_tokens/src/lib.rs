//! Push token registration for quakepush
//!
//! Clients register a device push token per notification category and
//! remove it again when they unsubscribe.
//!
//! # Endpoints
//!
//! - `PUT /v1/tokens/{category}/{token}` - create or refresh a token.
//!   Body: optional JSON `{"uuid": "...", "min": 0}`
//! - `DELETE /v1/tokens/{category}/{token}` - remove a token
//!
//! `{category}` is one of `quake`, `foreign`, `tsunami`, `userquake`, `eew`.
//!
//! # Example
//!
//! ```rust
//! use quakepush_common::{Method, PushRequest, StatusCode};
//! use quakepush_db::MemoryTokenStore;
//! use quakepush_tokens::{handle_request, TableMap, TokenState};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let state = TokenState::new(Arc::new(MemoryTokenStore::new()), TableMap::default());
//! let request = PushRequest::new(Method::PUT, "/v1/tokens/quake/abc123", 1_700_000_000_000);
//!
//! let response = handle_request(&state, &request).await;
//! assert_eq!(response.status(), StatusCode::OK);
//! # }
//! ```

pub mod handlers;
pub mod matcher;
pub mod payload;
pub mod routes;
pub mod tables;

/// Path prefix owned by this subsystem
pub const PREFIX: &str = "/v1/tokens";

pub use handlers::TokenState;
pub use matcher::{match_token_path, Category, TokenPath};
pub use payload::CreateParams;
pub use routes::handle_request;
pub use tables::TableMap;
