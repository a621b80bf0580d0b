// --- File: crates/services/quakepush_backend/src/lib.rs ---

pub mod app_state;
pub mod router;
pub mod routes;

pub use app_state::AppState;
pub use router::handle_request;
pub use routes::routes;
