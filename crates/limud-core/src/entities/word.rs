use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Binyan, Category, NounGender};

/// Irregular forms of a noun. Regular forms are left empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NounForms {
    pub gender: NounGender,
    pub plural_absolute: Option<String>,
    pub singular_construct: Option<String>,
    pub plural_construct: Option<String>,
}

/// Meanings of a verb in its derived stems. The qal meaning is the word's
/// base description.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VerbStems {
    pub nifal: Option<String>,
    pub piel: Option<String>,
    pub pual: Option<String>,
    pub hifil: Option<String>,
    pub hofal: Option<String>,
    pub hitpael: Option<String>,
}

impl VerbStems {
    /// Meaning in a derived stem. Always `None` for [`Binyan::Qal`].
    #[must_use]
    pub fn get(&self, binyan: Binyan) -> Option<&str> {
        match binyan {
            Binyan::Qal => None,
            Binyan::Nifal => self.nifal.as_deref(),
            Binyan::Piel => self.piel.as_deref(),
            Binyan::Pual => self.pual.as_deref(),
            Binyan::Hifil => self.hifil.as_deref(),
            Binyan::Hofal => self.hofal.as_deref(),
            Binyan::Hitpael => self.hitpael.as_deref(),
        }
    }

    /// Slot for a derived stem, or `None` for [`Binyan::Qal`].
    pub fn slot_mut(&mut self, binyan: Binyan) -> Option<&mut Option<String>> {
        match binyan {
            Binyan::Qal => None,
            Binyan::Nifal => Some(&mut self.nifal),
            Binyan::Piel => Some(&mut self.piel),
            Binyan::Pual => Some(&mut self.pual),
            Binyan::Hifil => Some(&mut self.hifil),
            Binyan::Hofal => Some(&mut self.hofal),
            Binyan::Hitpael => Some(&mut self.hitpael),
        }
    }
}

/// Irregular forms of an adjective.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AdjectiveForms {
    pub plural: Option<String>,
    pub feminine: Option<String>,
}

/// Category-specific part of a word, tagged by its category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum WordKind {
    Noun(NounForms),
    Verb(VerbStems),
    Adjective(AdjectiveForms),
    Adverb,
    Particle,
}

impl WordKind {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Noun(_) => Category::Noun,
            Self::Verb(_) => Category::Verb,
            Self::Adjective(_) => Category::Adjective,
            Self::Adverb => Category::Adverb,
            Self::Particle => Category::Particle,
        }
    }
}

/// A vocabulary word before it has been assigned an ID.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WordEntry {
    pub hebrew: String,
    pub description: String,
    pub chapter: Option<i64>,
    pub favorite: bool,
    #[serde(flatten)]
    pub kind: WordKind,
}

impl WordEntry {
    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }
}

/// A persisted vocabulary word.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Word {
    pub id: i64,
    #[serde(flatten)]
    pub entry: WordEntry,
}

impl Word {
    #[must_use]
    pub fn hebrew(&self) -> &str {
        &self.entry.hebrew
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.entry.category()
    }
}
