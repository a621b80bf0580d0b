//! SQL implementation of the token store
//!
//! Each category table has the layout
//! `("Token" TEXT PRIMARY KEY, "CreatedAt" BIGINT, "UpdatedAt" BIGINT)`.

use crate::error::{DbError, StoreError};
use crate::repositories::token::{is_valid_table_name, TokenRecord, TokenStore};
use crate::DbClient;
use quakepush_common::BoxFuture;
use sqlx::Row;
use tracing::{debug, info};

/// SQL implementation of the token store
#[derive(Debug, Clone)]
pub struct SqlTokenStore {
    /// The database client
    db_client: DbClient,
}

impl SqlTokenStore {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }

    pub fn db_client(&self) -> &DbClient {
        &self.db_client
    }
}

/// Double-quote a validated table name for use in a statement.
fn quoted(table: &str) -> Result<String, StoreError> {
    if is_valid_table_name(table) {
        Ok(format!("\"{}\"", table))
    } else {
        Err(StoreError::Other(format!("invalid table name: {:?}", table)))
    }
}

impl TokenStore for SqlTokenStore {
    fn init_tables<'a>(&'a self, tables: &'a [String]) -> BoxFuture<'a, (), DbError> {
        Box::pin(async move {
            for table in tables {
                let table_ident = quoted(table).map_err(|e| DbError::ConfigError(e.to_string()))?;
                debug!("Ensuring token table {} exists", table);

                let query = format!(
                    r#"
                    CREATE TABLE IF NOT EXISTS {table_ident} (
                        "Token" TEXT PRIMARY KEY NOT NULL,
                        "CreatedAt" BIGINT NOT NULL,
                        "UpdatedAt" BIGINT NOT NULL
                    )
                    "#
                );
                self.db_client.execute(&query).await?;
            }

            info!("Token tables initialized: {}", tables.join(", "));
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
            let table_ident = quoted(table)?;
            let query = format!(
                r#"
                INSERT INTO {table_ident} ("Token", "CreatedAt", "UpdatedAt")
                VALUES ($1, $2, $3)
                ON CONFLICT ("Token") DO UPDATE SET "UpdatedAt" = excluded."UpdatedAt"
                "#
            );

            sqlx::query(&query)
                .bind(token)
                .bind(timestamp)
                .bind(timestamp)
                .execute(self.db_client.pool())
                .await?;

            Ok(())
        })
    }

    fn delete_token<'a>(&'a self, table: &'a str, token: &'a str) -> BoxFuture<'a, (), StoreError> {
        Box::pin(async move {
            let table_ident = quoted(table)?;
            let query = format!(r#"DELETE FROM {table_ident} WHERE "Token" = $1"#);

            let result = sqlx::query(&query)
                .bind(token)
                .execute(self.db_client.pool())
                .await?;

            debug!(
                "DeleteItem({}, {}) removed {} row(s)",
                table,
                token,
                result.rows_affected()
            );
            Ok(())
        })
    }

    fn find_token<'a>(
        &'a self,
        table: &'a str,
        token: &'a str,
    ) -> BoxFuture<'a, Option<TokenRecord>, StoreError> {
        Box::pin(async move {
            let table_ident = quoted(table)?;
            let query = format!(
                r#"SELECT "Token", "CreatedAt", "UpdatedAt" FROM {table_ident} WHERE "Token" = $1"#
            );

            let row = sqlx::query(&query)
                .bind(token)
                .fetch_optional(self.db_client.pool())
                .await?;

            match row {
                Some(row) => Ok(Some(TokenRecord {
                    token: row.try_get("Token")?,
                    created_at: row.try_get("CreatedAt")?,
                    updated_at: row.try_get("UpdatedAt")?,
                })),
                None => Ok(None),
            }
        })
    }
}
