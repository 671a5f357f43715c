use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{AdjectiveForms, NounForms, VerbStems, WordEntry, WordKind};
use crate::enums::{Binyan, Category, NounGender};
use crate::errors::CoreError;
use crate::fields::capitalize;

/// One word parsed from a dictionary page. A single page may yield several
/// parses (e.g. a word read as an adjective or a verb).
///
/// Scraped words are never persisted; they ride inline in a run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScrapedWord {
    pub url: String,
    pub word: String,
    pub category: String,
    #[serde(default)]
    pub meanings: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub binyan: Option<String>,
}

/// Map a dictionary transliteration of a stem name onto a [`Binyan`].
fn binyan_from_transliteration(raw: &str) -> Option<Binyan> {
    match raw {
        "pa'al" => Some(Binyan::Qal),
        "nif'al" => Some(Binyan::Nifal),
        "pi'el" => Some(Binyan::Piel),
        "pu'al" => Some(Binyan::Pual),
        "hif'il" => Some(Binyan::Hifil),
        "huf'al" => Some(Binyan::Hofal),
        "hitpa'el" => Some(Binyan::Hitpael),
        _ => None,
    }
}

impl ScrapedWord {
    /// Description built from the meanings: a single meaning as is, several
    /// numbered and joined by `"; "`.
    #[must_use]
    pub fn description(&self) -> String {
        let joined = match self.meanings.as_slice() {
            [single] => single.clone(),
            meanings => meanings
                .iter()
                .enumerate()
                .map(|(i, meaning)| format!("{}. {meaning}", i + 1))
                .collect::<Vec<_>>()
                .join("; "),
        };
        capitalize(&joined)
    }

    /// Convert to an unsaved word. Categories outside the known set become
    /// particles.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownVariant` for a verb whose stem has no
    /// [`Binyan`] counterpart (e.g. hitpu'al).
    pub fn to_entry(&self) -> Result<WordEntry, CoreError> {
        let category = self.category.parse().unwrap_or(Category::Particle);
        let mut description = self.description();

        let kind = match category {
            Category::Noun => WordKind::Noun(NounForms {
                gender: NounGender::infer_from_word(&self.word),
                plural_absolute: None,
                singular_construct: None,
                plural_construct: None,
            }),
            Category::Verb => {
                let raw = self.binyan.as_deref().unwrap_or_default();
                let binyan =
                    binyan_from_transliteration(raw).ok_or_else(|| CoreError::UnknownVariant {
                        kind: "binyan",
                        value: raw.to_string(),
                    })?;
                let mut stems = VerbStems::default();
                if let Some(slot) = stems.slot_mut(binyan) {
                    *slot = Some(std::mem::take(&mut description));
                }
                WordKind::Verb(stems)
            }
            Category::Adjective => WordKind::Adjective(AdjectiveForms::default()),
            Category::Adverb => WordKind::Adverb,
            Category::Particle => WordKind::Particle,
        };

        Ok(WordEntry {
            hebrew: self.word.clone(),
            description,
            chapter: None,
            favorite: false,
            kind,
        })
    }
}
