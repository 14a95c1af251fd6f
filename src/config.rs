use std::path::{Path, PathBuf};

/// Options for the store target, fixed once at construction.
///
/// Holds the database location and the pragmas applied to each freshly
/// opened connection. There is no override point beyond this struct.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    database: PathBuf,
    wal: bool,
}

impl StoreConfig {
    /// Configuration pointing at a database file (created on first open).
    #[must_use]
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
            wal: false,
        }
    }

    /// Enable write-ahead logging on every opened connection.
    #[must_use]
    pub fn with_wal(mut self, wal: bool) -> Self {
        self.wal = wal;
        self
    }

    #[must_use]
    pub fn database(&self) -> &Path {
        &self.database
    }

    #[must_use]
    pub fn wal(&self) -> bool {
        self.wal
    }
}
