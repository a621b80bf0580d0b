use quakepush_common::{database_error, QuakepushError};
use quakepush_config::AppConfig;
use quakepush_db::{TokenStore, TokenStoreFactory};
use quakepush_tokens::{TableMap, TokenState};
use std::sync::Arc;
use tracing::info;

/// Application state shared by every request.
///
/// The store handle inside `tokens` is the only long-lived resource; it is
/// built once at startup and injected here rather than held globally.
#[derive(Clone)]
pub struct AppState {
    /// The configuration loaded at startup
    pub config: Arc<AppConfig>,

    /// State for the token subsystem
    pub tokens: TokenState,
}

impl AppState {
    /// Assemble state around an already constructed store.
    pub fn new(config: Arc<AppConfig>, store: Arc<dyn TokenStore>) -> Self {
        let tables = TableMap::from_config(&config.storage.tables);
        Self {
            config,
            tokens: TokenState::new(store, tables),
        }
    }

    /// Build the configured store and make sure every category table exists.
    pub async fn from_config(config: Arc<AppConfig>) -> Result<Self, QuakepushError> {
        let store = TokenStoreFactory::new()
            .from_storage_config(&config.storage)
            .await
            .map_err(database_error)?;

        let state = Self::new(config, store);
        let tables = state.tokens.tables.table_names();
        state
            .tokens
            .store
            .init_tables(&tables)
            .await
            .map_err(database_error)?;
        info!("Token tables ready: {}", tables.join(", "));

        Ok(state)
    }
}
