//! SQLite record store for the environmental observatory API.
//!
//! This crate owns everything that touches the database: the schema, CSV
//! fixture loading, a bounded connection pool and typed query methods. The
//! HTTP layer only ever calls the facade methods on [`Database`].
//!
//! # Architecture
//!
//! - [`Database`] wraps an `Arc` of a bounded pool of `rusqlite` connections
//!   and is cheap to clone into request handlers
//! - Table and column names come exclusively from the static catalog in
//!   `obs_core::catalog`; user input is only ever bound as a parameter
//! - Methods are synchronous; async callers run them on a blocking thread
//!
//! # Usage
//!
//! ```rust
//! use obs_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_stations("id,nombre,descripcion\n1,Ancud,Estación costera\n").unwrap();
//! db.load_table(
//!     "v_mar_mensual",
//!     "mes,estacion,temp_superficial_del_mar,nivel_medio_del_mar\n\
//!      2020-01,Ancud,12.5,\n2020-02,Ancud,12.9,\n",
//! )
//! .unwrap();
//!
//! let sub = db.station_submetrics(Some(1), None, Some("Estación Oceanográfica")).unwrap();
//! assert_eq!(sub.submetricas_disponibles, vec!["Temp Superficial Del Mar"]);
//! ```
//!
//! # Modules
//!
//! - [`schema`]: `CREATE TABLE` batch for every entity and series table
//! - `loader`: header-driven CSV loading into any schema table
//! - `queries`: station and water entity listings
//! - `catalog`: category presence, sub-metric availability, series fetch
//! - `facade`: request-level operations combining the above
//! - `views`: whole-table listings behind the `/aire` and `/agua` routes

pub mod error;
pub mod models;
pub mod pool;
pub mod schema;
mod catalog;
mod facade;
mod loader;
mod queries;
mod views;

pub use catalog::SeriesSelector;
pub use error::{QueryError, Result};
pub use pool::{PoolConfig, PoolStatus};

use pool::{ConnectionPool, PooledConnection};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Handle to the record store.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Clone)]
pub struct Database {
    pool: Arc<ConnectionPool>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods
    /// to populate it with CSV data. The pool holds a single connection.
    pub fn new() -> Result<Self> {
        let pool = ConnectionPool::new(PoolConfig::single(), Box::new(Connection::open_in_memory))?;
        let db = Self {
            pool: Arc::new(pool),
        };
        db.conn()?.execute_batch(schema::create_schema())?;
        Ok(db)
    }

    /// Open (or create) a SQLite database file and apply the schema.
    pub fn open(path: impl AsRef<Path>, config: PoolConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        log::info!("database: opening {}", path.display());
        let busy_timeout = config.timeout;
        let opener = move || -> rusqlite::Result<Connection> {
            let conn = Connection::open(&path)?;
            conn.busy_timeout(busy_timeout)?;
            Ok(conn)
        };
        let db = Self {
            pool: Arc::new(ConnectionPool::new(config, Box::new(opener))?),
        };
        db.conn()?.execute_batch(schema::create_schema())?;
        Ok(db)
    }

    pub(crate) fn conn(&self) -> Result<PooledConnection<'_>> {
        self.pool.get()
    }

    /// Round-trip a trivial query to check the store is reachable.
    pub fn ping(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    pub fn pool_status(&self) -> PoolStatus {
        self.pool.status()
    }
}
