//! Construction and update of words from submitted form fields.
//!
//! Fields arrive as raw strings (empty meaning "not given") and are parsed,
//! validated, and dispatched on the category in one place. Nothing here
//! touches storage; callers persist the result.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AdjectiveForms, NounForms, VerbStems, WordEntry, WordKind};
use crate::enums::{Binyan, Category, NounGender};
use crate::errors::CoreError;

/// Uppercase the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Raw form fields of a word. Fields not relevant to `category` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct WordFields {
    pub hebrew: String,
    pub description: String,
    pub category: String,
    pub chapter: String,
    pub gender: String,
    pub plural_absolute: String,
    pub singular_construct: String,
    pub plural_construct: String,
    pub nifal: String,
    pub piel: String,
    pub pual: String,
    pub hifil: String,
    pub hofal: String,
    pub hitpael: String,
    pub adjective_plural: String,
    pub adjective_feminine: String,
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn optional_capitalized(raw: &str) -> Option<String> {
    optional(raw).map(|text| capitalize(&text))
}

impl WordFields {
    /// # Errors
    ///
    /// Returns `CoreError::UnknownVariant` for an unknown category.
    pub fn category(&self) -> Result<Category, CoreError> {
        self.category.parse()
    }

    fn hebrew(&self) -> Result<String, CoreError> {
        optional(&self.hebrew).ok_or(CoreError::InvalidField {
            field: "hebrew",
            reason: "must not be empty".into(),
        })
    }

    fn chapter(&self) -> Result<Option<i64>, CoreError> {
        optional(&self.chapter)
            .map(|raw| {
                raw.parse::<i64>().map_err(|e| CoreError::InvalidField {
                    field: "chapter",
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    fn gender(&self, hebrew: &str) -> Result<NounGender, CoreError> {
        optional(&self.gender).map_or_else(
            || Ok(NounGender::infer_from_word(hebrew)),
            |raw| raw.parse(),
        )
    }

    fn verb_stems(&self) -> VerbStems {
        let mut stems = VerbStems::default();
        for (binyan, raw) in [
            (Binyan::Nifal, &self.nifal),
            (Binyan::Piel, &self.piel),
            (Binyan::Pual, &self.pual),
            (Binyan::Hifil, &self.hifil),
            (Binyan::Hofal, &self.hofal),
            (Binyan::Hitpael, &self.hitpael),
        ] {
            if let Some(slot) = stems.slot_mut(binyan) {
                *slot = optional_capitalized(raw);
            }
        }
        stems
    }

    fn kind(&self, category: Category, hebrew: &str) -> Result<WordKind, CoreError> {
        Ok(match category {
            Category::Noun => WordKind::Noun(NounForms {
                gender: self.gender(hebrew)?,
                plural_absolute: optional(&self.plural_absolute),
                singular_construct: optional(&self.singular_construct),
                plural_construct: optional(&self.plural_construct),
            }),
            Category::Verb => WordKind::Verb(self.verb_stems()),
            Category::Adjective => WordKind::Adjective(AdjectiveForms {
                plural: optional(&self.adjective_plural),
                feminine: optional(&self.adjective_feminine),
            }),
            Category::Adverb => WordKind::Adverb,
            Category::Particle => WordKind::Particle,
        })
    }
}

impl From<&WordEntry> for WordFields {
    /// Pre-fill the form of an existing word.
    fn from(entry: &WordEntry) -> Self {
        let text = |value: Option<&String>| value.cloned().unwrap_or_default();
        let mut fields = Self {
            hebrew: entry.hebrew.clone(),
            description: entry.description.clone(),
            category: entry.category().to_string(),
            chapter: entry.chapter.map(|c| c.to_string()).unwrap_or_default(),
            ..Self::default()
        };
        match &entry.kind {
            WordKind::Noun(forms) => {
                fields.gender = forms.gender.as_str().to_string();
                fields.plural_absolute = text(forms.plural_absolute.as_ref());
                fields.singular_construct = text(forms.singular_construct.as_ref());
                fields.plural_construct = text(forms.plural_construct.as_ref());
            }
            WordKind::Verb(stems) => {
                fields.nifal = text(stems.nifal.as_ref());
                fields.piel = text(stems.piel.as_ref());
                fields.pual = text(stems.pual.as_ref());
                fields.hifil = text(stems.hifil.as_ref());
                fields.hofal = text(stems.hofal.as_ref());
                fields.hitpael = text(stems.hitpael.as_ref());
            }
            WordKind::Adjective(forms) => {
                fields.adjective_plural = text(forms.plural.as_ref());
                fields.adjective_feminine = text(forms.feminine.as_ref());
            }
            WordKind::Adverb | WordKind::Particle => {}
        }
        fields
    }
}

impl WordEntry {
    /// Build a new, non-favorite word from form fields.
    ///
    /// # Errors
    ///
    /// Returns `CoreError` when the category or gender is unknown, the
    /// chapter is not an integer, or the Hebrew text is empty. Nothing is
    /// built in that case.
    pub fn from_fields(fields: &WordFields) -> Result<Self, CoreError> {
        let category = fields.category()?;
        let hebrew = fields.hebrew()?;
        let kind = fields.kind(category, &hebrew)?;
        Ok(Self {
            description: capitalize(fields.description.trim()),
            chapter: fields.chapter()?,
            favorite: false,
            hebrew,
            kind,
        })
    }

    /// Overwrite this word with form fields, keeping its favorite flag.
    ///
    /// Validation happens before any field is touched, so a failed update
    /// leaves the word unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CategoryChange` when the fields name a different
    /// category, plus the errors of [`WordEntry::from_fields`].
    pub fn apply_fields(&mut self, fields: &WordFields) -> Result<(), CoreError> {
        let category = fields.category()?;
        if category != self.category() {
            return Err(CoreError::CategoryChange {
                from: self.category().to_string(),
                to: category.to_string(),
            });
        }
        let updated = Self {
            favorite: self.favorite,
            ..Self::from_fields(fields)?
        };
        *self = updated;
        Ok(())
    }
}
