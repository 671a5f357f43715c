//! Flashcard run configuration.

use serde::{Deserialize, Serialize};

const fn default_prompt_side_is_hebrew() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct FlashcardsConfig {
    /// Whether the Hebrew face is shown first and the English one guessed.
    #[serde(default = "default_prompt_side_is_hebrew")]
    pub prompt_side_is_hebrew: bool,

    /// Seed for shuffles. Unset means a fresh OS-seeded generator per run.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for FlashcardsConfig {
    fn default() -> Self {
        Self {
            prompt_side_is_hebrew: default_prompt_side_is_hebrew(),
            random_seed: None,
        }
    }
}
