//! Token record storage for quakepush
//!
//! Request handlers only see the [`TokenStore`] trait and the two-way
//! [`StoreError`]; which backend sits behind it is decided once at startup
//! by [`TokenStoreFactory`].
//!
//! # Example
//!
//! ```rust,no_run
//! use quakepush_config::StorageConfig;
//! use quakepush_db::TokenStoreFactory;
//!
//! async fn setup_store() -> Result<(), Box<dyn std::error::Error>> {
//!     let storage = StorageConfig {
//!         url: Some("sqlite://data/tokens.db".to_string()),
//!         ..StorageConfig::default()
//!     };
//!     let store = TokenStoreFactory::new().from_storage_config(&storage).await?;
//!     store.init_tables(&["P2PQuakeMobilePushQuake".to_string()]).await?;
//!     store.upsert_token("P2PQuakeMobilePushQuake", "device-token", 1_700_000_000_000).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod factory;
pub mod repositories;

pub use client::DbClient;
pub use error::{DbError, StoreError};
pub use factory::TokenStoreFactory;
pub use repositories::{MemoryTokenStore, SqlTokenStore, TokenRecord, TokenStore};
