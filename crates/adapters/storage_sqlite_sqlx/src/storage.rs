//! The storage handle implementing every repository port.

use sqlx::SqlitePool;

/// `SQLite`-backed storage for all record types.
///
/// Cloning is cheap: clones share the connection pool.
#[derive(Clone)]
pub struct SqliteStorage {
    pub(crate) pool: SqlitePool,
}

impl SqliteStorage {
    /// Create a new storage handle using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
