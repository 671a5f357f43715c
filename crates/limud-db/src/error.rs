use limud_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// No word or conjugation has the requested id.
    #[error("no such record")]
    NoResult,

    /// A stored column holds text that no enum variant matches.
    #[error("unreadable column value: {0}")]
    UnreadableColumn(String),

    /// Rows that contradict the schema's intent, such as a duplicated slot.
    #[error("inconsistent vocabulary data: {0}")]
    InvalidState(String),

    #[error("schema migration failed: {0}")]
    Migration(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
