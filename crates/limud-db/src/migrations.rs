//! Embedded schema migrations, applied on every open.
//!
//! Statements are written with `IF NOT EXISTS` so re-running a migration
//! against an existing vocabulary file is a no-op.

use crate::LimudDb;
use crate::error::DatabaseError;

/// `(name, sql)` pairs in application order.
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_initial",
    include_str!("../migrations/001_initial.sql"),
)];

impl LimudDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        for (name, sql) in MIGRATIONS {
            self.conn
                .execute_batch(sql)
                .await
                .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
            tracing::debug!(migration = name, "applied migration");
        }
        Ok(())
    }
}
