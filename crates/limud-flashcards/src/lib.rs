//! # limud-flashcards
//!
//! Flashcard runs for Limud: building a run from queried cards, applying
//! button presses to it, assembling conjugation practice decks, and
//! rendering card faces.
//!
//! Nothing here touches storage. Callers fetch entities, hand them to the
//! [`builder`], persist the resulting [`RunState`], and feed one
//! [`ButtonPress`] at a time through [`machine::apply`]. Randomness is
//! always an explicit [`rand::Rng`] supplied by the caller.

pub mod builder;
pub mod deck;
pub mod error;
pub mod event;
pub mod format;
pub mod machine;
pub mod side;
pub mod state;

pub use builder::{Flashcard, Sorting, build_run, build_scraped_run, strip_niqqud};
pub use deck::{TenseExclusions, binyan_deck, representative_deck};
pub use error::FlashcardError;
pub use event::{ButtonPress, Effect, Mode, Step};
pub use format::{Markup, PronounLanguage, conjugation_prompt, format_back};
pub use machine::apply;
pub use side::{Side, SidePolicy};
pub use state::{Progress, RunItem, RunState};
