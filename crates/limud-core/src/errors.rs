//! Cross-cutting error types for Limud.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `FlashcardError`) are defined
//! in their respective crates. `CoreError` covers malformed input at the
//! boundary and misuse of the closed conjugation domain.

use thiserror::Error;

/// Errors that can be raised by any Limud crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name any variant of a closed enumeration.
    #[error("Invalid {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// A submitted field failed validation (missing, not a number, ...).
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// An existing word was submitted with a different grammatical category.
    #[error("Cannot change category of word from {from} to {to}; delete and re-create it")]
    CategoryChange { from: String, to: String },

    /// A pronoun label was requested for a combination Hebrew does not have.
    #[error("No pronoun for person={person}, gender={gender}, number={number}")]
    UnlabeledPronoun {
        person: String,
        gender: String,
        number: String,
    },
}
