//! Button presses, run modes, and the effects a press asks the caller to perform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FlashcardError;
use crate::state::RunState;

/// A button on a flashcard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonPress {
    Flip,
    Previous,
    Next,
    Favorite,
    Unfavorite,
    Edit,
    Correct,
    Incorrect,
}

impl ButtonPress {
    pub const ALL: [Self; 8] = [
        Self::Flip,
        Self::Previous,
        Self::Next,
        Self::Favorite,
        Self::Unfavorite,
        Self::Edit,
        Self::Correct,
        Self::Incorrect,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flip => "flip",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Favorite => "favorite",
            Self::Unfavorite => "unfavorite",
            Self::Edit => "edit",
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for ButtonPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonPress {
    type Err = FlashcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|press| press.as_str() == normalized)
            .ok_or_else(|| FlashcardError::MalformedInput(format!("unknown button '{s}'")))
    }
}

/// How a run treats presses.
///
/// Review browses a fixed sequence in a circle. Practice drills until every
/// card has been answered correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Review,
    Practice,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Review => "review",
            Self::Practice => "practice",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side effect requested by a press, performed by the caller against the
/// data gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    SetFavorite { id: i64, favorite: bool },
    Edit { id: i64 },
}

/// Result of applying one press.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: RunState,
    pub effect: Option<Effect>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("flip", ButtonPress::Flip)]
    #[case("Next", ButtonPress::Next)]
    #[case(" incorrect ", ButtonPress::Incorrect)]
    fn parse_button(#[case] raw: &str, #[case] expected: ButtonPress) {
        assert_eq!(raw.parse::<ButtonPress>().unwrap(), expected);
    }

    #[test]
    fn unknown_button_is_malformed() {
        assert!(matches!(
            "save".parse::<ButtonPress>(),
            Err(FlashcardError::MalformedInput(_))
        ));
    }

    #[test]
    fn effect_serializes_tagged() {
        let json = serde_json::to_value(Effect::Edit { id: 3 }).unwrap();
        assert_eq!(json, serde_json::json!({"effect": "edit", "id": 3}));
    }
}
