//! The session slot: one active run persisted as JSON between invocations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use limud_flashcards::{FlashcardError, Mode, RunState};
use serde::{Deserialize, Serialize};

/// What the IDs of a run refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deck {
    Vocabulary,
    Conjugation,
    Scraped,
}

impl Deck {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Vocabulary => "vocabulary",
            Self::Conjugation => "conjugation",
            Self::Scraped => "scraped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveRun {
    pub deck: Deck,
    pub mode: Mode,
    pub state: RunState,
}

/// Single-slot store backed by a JSON file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> anyhow::Result<Option<ActiveRun>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read session at {}", self.path.display()))?;
        let run = serde_json::from_str(&raw).map_err(|error| {
            FlashcardError::InvalidSessionState(format!(
                "unreadable session at {}: {error}",
                self.path.display()
            ))
        })?;
        Ok(Some(run))
    }

    /// The active run, which must be of `deck` and `mode`.
    pub fn require(&self, deck: Deck, mode: Mode) -> anyhow::Result<ActiveRun> {
        let Some(run) = self.load()? else {
            return Err(FlashcardError::InvalidSessionState(format!(
                "no active {} {mode} run",
                deck.as_str()
            ))
            .into());
        };
        if run.deck != deck || run.mode != mode {
            return Err(FlashcardError::InvalidSessionState(format!(
                "active run is a {} {} run, not {} {mode}",
                run.deck.as_str(),
                run.mode,
                deck.as_str()
            ))
            .into());
        }
        Ok(run)
    }

    pub fn save(&self, run: &ActiveRun) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string(run)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write session at {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved session");
        Ok(())
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("failed to clear session at {}", self.path.display()))?;
        }
        Ok(())
    }
}
