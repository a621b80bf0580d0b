//! Factory for creating token stores from configuration

use crate::client::DbClient;
use crate::error::DbError;
use crate::repositories::{MemoryTokenStore, SqlTokenStore, TokenStore};
use quakepush_config::StorageConfig;
use std::sync::Arc;
use tracing::{info, warn};

/// Factory for creating token stores
#[derive(Debug, Clone, Default)]
pub struct TokenStoreFactory;

impl TokenStoreFactory {
    pub fn new() -> Self {
        Self
    }

    /// Build the store selected by the storage configuration.
    ///
    /// A configured URL yields an SQL store; no URL yields the in-memory
    /// store, which loses every record on restart.
    ///
    /// # Errors
    ///
    /// Fails when a URL is configured but the pool can't be created.
    pub async fn from_storage_config(
        &self,
        storage: &StorageConfig,
    ) -> Result<Arc<dyn TokenStore>, DbError> {
        match storage.url.as_deref() {
            Some(url) if !url.is_empty() => {
                let client = DbClient::from_config(storage).await?;
                info!("Using SQL token store");
                Ok(Arc::new(SqlTokenStore::new(client)))
            }
            _ => {
                warn!("No storage URL configured, token records are kept in memory only");
                Ok(Arc::new(MemoryTokenStore::new()))
            }
        }
    }
}
