// --- File: crates/quakepush_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // Axum rendering of responses
pub mod logging; // Logging utilities
pub mod models; // Request/response envelopes
pub mod services; // Service abstractions

pub use error::{config_error, database_error, HttpStatusCode, QuakepushError};
pub use models::{PushRequest, PushResponse};
pub use services::BoxFuture;

// Re-export the http types the envelopes are built from
pub use ::http::{Method, StatusCode};
