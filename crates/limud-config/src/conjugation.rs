//! Conjugation practice deck configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConjugationConfig {
    /// Leave perfect and imperfect waw-consecutive forms out of practice decks.
    #[serde(default)]
    pub exclude_waw_consecutives: bool,

    /// Leave jussive and cohortative forms out of practice decks.
    #[serde(default)]
    pub exclude_jussive_and_cohortatives: bool,
}
