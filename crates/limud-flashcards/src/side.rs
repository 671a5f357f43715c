//! Flashcard faces and which one is the prompt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Face of a flashcard. `Front` carries the Hebrew text, `Back` the
/// English description (or, for conjugations, the query).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Front,
    Back,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which face is the prompt (shown first) and which the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidePolicy {
    prompt: Side,
}

impl SidePolicy {
    #[must_use]
    pub const fn new(prompt: Side) -> Self {
        Self { prompt }
    }

    /// Vocabulary policy: Hebrew first unless the user guesses Hebrew from
    /// English.
    #[must_use]
    pub const fn from_prompt_is_hebrew(prompt_is_hebrew: bool) -> Self {
        if prompt_is_hebrew {
            Self::new(Side::Front)
        } else {
            Self::new(Side::Back)
        }
    }

    /// Conjugation practice always asks with the query face and answers
    /// with the Hebrew form.
    #[must_use]
    pub const fn conjugation() -> Self {
        Self::new(Side::Back)
    }

    #[must_use]
    pub const fn prompt(self) -> Side {
        self.prompt
    }

    #[must_use]
    pub const fn answer(self) -> Side {
        self.prompt.opposite()
    }
}
