//! Service layer hosting the repository methods.
//!
//! `LimudService` wraps `LimudDb` (raw database access). All repo methods
//! are implemented as `impl LimudService` blocks in [`crate::repos`].

use crate::LimudDb;
use crate::error::DatabaseError;

/// Data gateway over vocabulary words and conjugated verbs.
pub struct LimudService {
    db: LimudDb,
}

impl LimudService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LimudDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `LimudDb` (for testing).
    #[must_use]
    pub const fn from_db(db: LimudDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LimudDb {
        &self.db
    }
}
