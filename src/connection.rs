use rusqlite::Connection;
use tracing::warn;

use crate::config::StoreConfig;
use crate::error::StoreError;

/// Source of physical store connections.
///
/// The mapping layer opens one connection per logical operation and
/// releases it before the operation returns. This trait is the seam that
/// would let a pooled provider replace the per-operation one without
/// touching the mapper.
pub trait ConnectionProvider: Send + Sync + 'static {
    /// Open a connection to the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the store cannot be opened.
    fn open(&self) -> Result<Connection, StoreError>;
}

/// Per-operation provider backed by a `SQLite` database file.
#[derive(Debug, Clone)]
pub struct SqliteProvider {
    config: StoreConfig,
}

impl SqliteProvider {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl ConnectionProvider for SqliteProvider {
    fn open(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(self.config.database()).map_err(|e| {
            StoreError::Connection(format!(
                "cannot open {}: {e}",
                self.config.database().display()
            ))
        })?;
        if self.config.wal() {
            conn.execute_batch("PRAGMA journal_mode = WAL;")
                .map_err(|e| StoreError::Connection(format!("cannot apply WAL pragma: {e}")))?;
        }
        Ok(conn)
    }
}

/// Release a connection, swallowing and logging any close failure.
///
/// Statements and row cursors are released by scope before the connection
/// is handed here, so a failing close never blocks the release of the
/// other handles and never escalates past the operation boundary.
pub fn close_quietly(conn: Connection, context: &str) {
    if let Err((_conn, e)) = conn.close() {
        warn!(context, error = %e, "failed to close store connection");
    }
}
