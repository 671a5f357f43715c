//! # limud-db
//!
//! libSQL database operations for Limud.
//!
//! Stores vocabulary words and conjugated verb forms in a local libSQL
//! database. Repository methods live on [`service::LimudService`]; this
//! module owns the raw connection and schema migrations.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Limud storage operations.
pub struct LimudDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LimudDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let limud_db = Self { db, conn };
        limud_db.run_migrations().await?;
        tracing::debug!(path, "opened vocabulary database");
        Ok(limud_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
