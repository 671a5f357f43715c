use clap::{Args, Subcommand};
use limud_core::fields::WordFields;

use super::SourceArgs;

/// Vocabulary word commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WordCommands {
    /// Add a word.
    Add {
        #[command(flatten)]
        fields: WordFieldArgs,
    },
    /// Edit a word; omitted fields keep their current value.
    Edit {
        id: i64,
        #[command(flatten)]
        fields: WordFieldArgs,
    },
    /// Delete a word (also drops it from the active run).
    Delete { id: i64 },
    /// Get a word by ID.
    Get { id: i64 },
    /// List words.
    List {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List chapters that have words.
    Chapters,
    /// Mark a word as favorite.
    Favorite { id: i64 },
    /// Clear a word's favorite mark.
    Unfavorite { id: i64 },
}

/// Form fields of a word. Pass an empty string to clear an optional field.
#[derive(Clone, Debug, Default, Args)]
pub struct WordFieldArgs {
    #[arg(long)]
    pub hebrew: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// noun, verb, adjective, adverb, particle
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub chapter: Option<String>,
    /// Noun gender; inferred from the word when omitted
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub plural_absolute: Option<String>,
    #[arg(long)]
    pub singular_construct: Option<String>,
    #[arg(long)]
    pub plural_construct: Option<String>,
    #[arg(long)]
    pub nifal: Option<String>,
    #[arg(long)]
    pub piel: Option<String>,
    #[arg(long)]
    pub pual: Option<String>,
    #[arg(long)]
    pub hifil: Option<String>,
    #[arg(long)]
    pub hofal: Option<String>,
    #[arg(long)]
    pub hitpael: Option<String>,
    #[arg(long)]
    pub adjective_plural: Option<String>,
    #[arg(long)]
    pub adjective_feminine: Option<String>,
}

impl WordFieldArgs {
    /// Lay the given fields over `base`.
    #[must_use]
    pub fn overlay(self, base: WordFields) -> WordFields {
        let pick = |given: Option<String>, current: String| given.unwrap_or(current);
        WordFields {
            hebrew: pick(self.hebrew, base.hebrew),
            description: pick(self.description, base.description),
            category: pick(self.category, base.category),
            chapter: pick(self.chapter, base.chapter),
            gender: pick(self.gender, base.gender),
            plural_absolute: pick(self.plural_absolute, base.plural_absolute),
            singular_construct: pick(self.singular_construct, base.singular_construct),
            plural_construct: pick(self.plural_construct, base.plural_construct),
            nifal: pick(self.nifal, base.nifal),
            piel: pick(self.piel, base.piel),
            pual: pick(self.pual, base.pual),
            hifil: pick(self.hifil, base.hifil),
            hofal: pick(self.hofal, base.hofal),
            hitpael: pick(self.hitpael, base.hitpael),
            adjective_plural: pick(self.adjective_plural, base.adjective_plural),
            adjective_feminine: pick(self.adjective_feminine, base.adjective_feminine),
        }
    }
}
