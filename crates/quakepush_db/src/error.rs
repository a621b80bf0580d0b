//! Error types for token storage

use quakepush_common::HttpStatusCode;
use thiserror::Error;

/// Errors raised while setting up storage
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the storage configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),
}

/// Failure of a single storage operation, as seen by a request handler.
///
/// The backend decides which bucket an error falls into; handlers only
/// ever match on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend refused the call because a rate or capacity limit was hit.
    /// Retrying later may succeed.
    #[error("storage throttled: {0}")]
    Throttled(String),

    /// Any other backend failure.
    #[error("storage error: {0}")]
    Other(String),
}

impl StoreError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Throttled(_))
    }
}

impl HttpStatusCode for StoreError {
    fn status_code(&self) -> u16 {
        match self {
            StoreError::Throttled(_) => 503,
            StoreError::Other(_) => 500,
        }
    }
}

/// SQLite primary result codes that mean "try again later".
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;

/// PostgreSQL SQLSTATEs that mean "try again later":
/// too_many_connections, configuration_limit_exceeded, lock_not_available.
#[cfg_attr(not(feature = "postgres"), allow(dead_code))]
const PG_THROTTLE_STATES: [&str; 3] = ["53300", "53400", "55P03"];

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let throttled = match &err {
            sqlx::Error::PoolTimedOut => true,
            sqlx::Error::Database(db_err) => is_throttle_error(db_err.as_ref()),
            _ => false,
        };

        if throttled {
            StoreError::Throttled(err.to_string())
        } else {
            StoreError::Other(err.to_string())
        }
    }
}

fn is_throttle_error(err: &dyn sqlx::error::DatabaseError) -> bool {
    #[cfg(feature = "sqlite")]
    if err
        .try_downcast_ref::<sqlx::sqlite::SqliteError>()
        .is_some()
    {
        return err
            .code()
            .and_then(|code| code.parse::<i32>().ok())
            .map(is_sqlite_throttle_code)
            .unwrap_or(false);
    }

    #[cfg(feature = "postgres")]
    if err
        .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
        .is_some()
    {
        return err
            .code()
            .map(|state| is_pg_throttle_state(&state))
            .unwrap_or(false);
    }

    false
}

/// SQLite reports extended result codes; the low byte is the primary code.
#[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
fn is_sqlite_throttle_code(extended: i32) -> bool {
    matches!(extended & 0xff, SQLITE_BUSY | SQLITE_LOCKED)
}

#[cfg_attr(not(feature = "postgres"), allow(dead_code))]
fn is_pg_throttle_state(state: &str) -> bool {
    PG_THROTTLE_STATES.contains(&state)
}
