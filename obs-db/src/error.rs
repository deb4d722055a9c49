use obs_core::CatalogError;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by store-backed operations
#[derive(Error, Debug)]
pub enum QueryError {
    /// Request-level failure (bad parameters, unknown names, missing station)
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// SQLite failure while reading the record store
    #[error("database error: {0}")]
    Store(#[from] rusqlite::Error),

    /// No connection became available within the pool timeout
    #[error("timed out after {0:?} waiting for a database connection")]
    PoolTimeout(Duration),
}

/// Type alias for Results using QueryError
pub type Result<T> = std::result::Result<T, QueryError>;
