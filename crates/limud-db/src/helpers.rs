//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs, and typed values back into SQL parameters. These helpers isolate
//! that conversion.

use crate::error::DatabaseError;

/// Parse a TEXT column into a serde-deserializable enum.
///
/// Works with all limud-core enums that use `#[serde(rename_all = "snake_case")]`.
///
/// # Errors
///
/// Returns `DatabaseError::UnreadableColumn` if the string does not match any enum variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| {
            DatabaseError::UnreadableColumn(format!("Failed to parse enum from '{s}': {e}"))
        })
}

/// Parse a nullable TEXT column into an optional enum.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails or the value is unknown.
pub fn parse_opt_enum<T: serde::de::DeserializeOwned>(
    row: &libsql::Row,
    idx: i32,
) -> Result<Option<T>, DatabaseError> {
    get_opt_string(row, idx)?
        .as_deref()
        .map(parse_enum)
        .transpose()
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// SQL parameter for an optional TEXT column.
#[must_use]
pub fn opt_text(value: Option<&str>) -> libsql::Value {
    value.map_or(libsql::Value::Null, Into::into)
}

/// SQL parameter for an optional INTEGER column.
#[must_use]
pub const fn opt_integer(value: Option<i64>) -> libsql::Value {
    match value {
        Some(v) => libsql::Value::Integer(v),
        None => libsql::Value::Null,
    }
}
