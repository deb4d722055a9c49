//! Bounded SQLite connection pool.
//!
//! `size` connections are kept open and reused; up to `max_overflow` more are
//! opened under load and closed as soon as they are returned. A caller that
//! finds the pool exhausted waits up to `timeout` for a release before
//! failing with [`QueryError::PoolTimeout`]. Connections are handed out as a
//! [`PooledConnection`] guard that returns them on drop, so every exit path
//! of a request releases its connection.

use crate::error::{QueryError, Result};
use rusqlite::Connection;
use std::ops::Deref;
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Sizing and timeout settings for the connection pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Connections kept open between requests
    pub size: usize,
    /// Extra connections allowed under load, closed on release
    pub max_overflow: usize,
    /// Maximum wait for a free connection
    pub timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            size: 10,
            max_overflow: 20,
            timeout: Duration::from_secs(5),
        }
    }
}

impl PoolConfig {
    /// A pool holding exactly one connection. Required for in-memory
    /// databases, where every new connection would see an empty database.
    pub fn single() -> Self {
        Self {
            size: 1,
            max_overflow: 0,
            ..Self::default()
        }
    }

    pub fn capacity(&self) -> usize {
        self.size + self.max_overflow
    }
}

/// Snapshot of pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    /// Connections currently open (idle or checked out)
    pub open: usize,
    /// Open connections waiting in the pool
    pub idle: usize,
}

type Opener = Box<dyn Fn() -> rusqlite::Result<Connection> + Send + Sync>;

struct PoolState {
    idle: Vec<Connection>,
    open: usize,
}

pub(crate) struct ConnectionPool {
    opener: Opener,
    config: PoolConfig,
    state: Mutex<PoolState>,
    released: Condvar,
}

impl ConnectionPool {
    /// Build a pool and open its `size` resident connections up front.
    pub(crate) fn new(config: PoolConfig, opener: Opener) -> Result<Self> {
        let mut idle = Vec::with_capacity(config.size);
        for _ in 0..config.size.max(1) {
            idle.push(opener()?);
        }
        let open = idle.len();
        log::info!(
            "pool: opened {} connections (overflow {}, timeout {:?})",
            open,
            config.max_overflow,
            config.timeout
        );
        Ok(Self {
            opener,
            config,
            state: Mutex::new(PoolState { idle, open }),
            released: Condvar::new(),
        })
    }

    fn lock(&self) -> MutexGuard<'_, PoolState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Check out a connection, waiting up to the configured timeout.
    pub(crate) fn get(&self) -> Result<PooledConnection<'_>> {
        let deadline = Instant::now() + self.config.timeout;
        let mut state = self.lock();
        loop {
            if let Some(conn) = state.idle.pop() {
                return Ok(PooledConnection::new(self, conn));
            }
            if state.open < self.config.capacity().max(1) {
                state.open += 1;
                drop(state);
                return match (self.opener)() {
                    Ok(conn) => {
                        log::debug!("pool: opened overflow connection");
                        Ok(PooledConnection::new(self, conn))
                    }
                    Err(e) => {
                        self.lock().open -= 1;
                        self.released.notify_one();
                        Err(e.into())
                    }
                };
            }
            let now = Instant::now();
            if now >= deadline {
                log::warn!(
                    "pool: no connection available after {:?} ({} open)",
                    self.config.timeout,
                    state.open
                );
                return Err(QueryError::PoolTimeout(self.config.timeout));
            }
            let (guard, _) = self
                .released
                .wait_timeout(state, deadline - now)
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            state = guard;
        }
    }

    fn release(&self, conn: Connection) {
        let mut state = self.lock();
        if state.idle.len() < self.config.size.max(1) {
            state.idle.push(conn);
        } else {
            state.open -= 1;
            drop(conn);
        }
        drop(state);
        self.released.notify_one();
    }

    pub(crate) fn status(&self) -> PoolStatus {
        let state = self.lock();
        PoolStatus {
            open: state.open,
            idle: state.idle.len(),
        }
    }
}

/// A checked-out connection. Returned to the pool when dropped.
pub(crate) struct PooledConnection<'a> {
    pool: &'a ConnectionPool,
    conn: Option<Connection>,
}

impl<'a> PooledConnection<'a> {
    fn new(pool: &'a ConnectionPool, conn: Connection) -> Self {
        Self {
            pool,
            conn: Some(conn),
        }
    }
}

impl Deref for PooledConnection<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        // Only taken in Drop.
        self.conn.as_ref().expect("pooled connection used after release")
    }
}

impl Drop for PooledConnection<'_> {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            self.pool.release(conn);
        }
    }
}
