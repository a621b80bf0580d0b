//! Storage contract for push token records
//!
//! Records live in one table per push category and are keyed by the
//! device token alone.

use crate::error::{DbError, StoreError};
use quakepush_common::BoxFuture;

/// A stored push token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    /// The device push token, primary key within its table
    pub token: String,

    /// Epoch timestamp of the first successful upsert. Never rewritten.
    pub created_at: i64,

    /// Epoch timestamp of the most recent successful upsert
    pub updated_at: i64,
}

/// Storage for push token records
///
/// Implementations must be safe to share between concurrent requests.
/// Correctness for concurrent writes to the same token rests entirely on
/// each method being a single atomic backend operation.
pub trait TokenStore: Send + Sync {
    /// Create the given tables if they don't already exist.
    fn init_tables<'a>(&'a self, tables: &'a [String]) -> BoxFuture<'a, (), DbError>;

    /// Create or touch the record for `token` in `table`.
    ///
    /// `CreatedAt` is set to `timestamp` only when the record does not exist
    /// yet; `UpdatedAt` is always set to `timestamp`. This is one conditional
    /// write, never a read followed by a write.
    fn upsert_token<'a>(
        &'a self,
        table: &'a str,
        token: &'a str,
        timestamp: i64,
    ) -> BoxFuture<'a, (), StoreError>;

    /// Remove the record for `token` from `table`. Removing a record that
    /// doesn't exist succeeds.
    fn delete_token<'a>(&'a self, table: &'a str, token: &'a str) -> BoxFuture<'a, (), StoreError>;

    /// Read the record for `token` from `table`.
    fn find_token<'a>(
        &'a self,
        table: &'a str,
        token: &'a str,
    ) -> BoxFuture<'a, Option<TokenRecord>, StoreError>;
}

/// Whether `table` is safe to splice into SQL as a quoted identifier.
///
/// Accepts the character set of managed key-value table names:
/// ASCII letters, digits, `_`, `-` and `.`.
pub fn is_valid_table_name(table: &str) -> bool {
    !table.is_empty()
        && table.len() <= 255
        && table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
