//! In-memory implementation of the token store
//!
//! Used when no database URL is configured and as a stand-in backend in
//! tests. Each operation runs under a single lock, so the conditional
//! upsert is atomic exactly like the SQL statement it mirrors.

use crate::error::{DbError, StoreError};
use crate::repositories::token::{TokenRecord, TokenStore};
use quakepush_common::BoxFuture;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

type Tables = HashMap<String, HashMap<String, TokenRecord>>;

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tables: Mutex<Tables>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held in `table`.
    pub fn len(&self, table: &str) -> usize {
        self.lock()
            .map(|tables| tables.get(table).map_or(0, HashMap::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Other("token table lock poisoned".to_string()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn init_tables<'a>(&'a self, tables: &'a [String]) -> BoxFuture<'a, (), DbError> {
        Box::pin(async move {
            let mut guard = self
                .tables
                .lock()
                .map_err(|_| DbError::ConfigError("token table lock poisoned".to_string()))?;
            for table in tables {
                guard.entry(table.clone()).or_default();
            }
            Ok(())
        })
    }

    fn upsert_token<'a>(
        &'a self,
        table: &'a str,
        token: &'a str,
        timestamp: i64,
    ) -> BoxFuture<'a, (), StoreError> {
        Box::pin(async move {
            let mut tables = self.lock()?;
            tables
                .entry(table.to_string())
                .or_default()
                .entry(token.to_string())
                .and_modify(|record| record.updated_at = timestamp)
                .or_insert_with(|| TokenRecord {
                    token: token.to_string(),
                    created_at: timestamp,
                    updated_at: timestamp,
                });
            Ok(())
        })
    }

    fn delete_token<'a>(&'a self, table: &'a str, token: &'a str) -> BoxFuture<'a, (), StoreError> {
        Box::pin(async move {
            let mut tables = self.lock()?;
            if let Some(records) = tables.get_mut(table) {
                records.remove(token);
            }
            Ok(())
        })
    }

    fn find_token<'a>(
        &'a self,
        table: &'a str,
        token: &'a str,
    ) -> BoxFuture<'a, Option<TokenRecord>, StoreError> {
        Box::pin(async move {
            let tables = self.lock()?;
            Ok(tables
                .get(table)
                .and_then(|records| records.get(token))
                .cloned())
        })
    }
}
