//! Flashcard error types.

use limud_core::errors::CoreError;
use thiserror::Error;

use crate::event::{ButtonPress, Mode};

/// Errors from building or advancing a flashcard run.
///
/// `EmptyResult` and `NotFound` are recoverable: the caller leaves the run
/// and returns to the landing view. `InvalidSessionState` is fatal for the
/// request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlashcardError {
    /// The query behind a new run matched nothing.
    #[error("No flashcards to show")]
    EmptyResult,

    /// The requested starting item is not part of the run.
    #[error("Flashcard {id} is not part of this run")]
    NotFound { id: i64 },

    /// Stored run state is missing or inconsistent.
    #[error("Invalid session state: {0}")]
    InvalidSessionState(String),

    /// Input from the caller could not be understood.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The button exists but has no meaning in this mode or for this item.
    #[error("Button '{press}' is not available in {mode} mode")]
    UnsupportedPress { mode: Mode, press: ButtonPress },

    #[error(transparent)]
    Core(#[from] CoreError),
}
