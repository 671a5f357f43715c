//! Entity structs for Limud domain objects.
//!
//! `Word` and `ConjugatedVerb` map to tables in the libSQL database.
//! `ScrapedWord` is never stored. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod conjugated_verb;
mod scraped;
mod word;

pub use conjugated_verb::{ConjugatedVerb, ConjugationSlot, REPRESENTATIVE_PARTICIPLE};
pub use scraped::ScrapedWord;
pub use word::{AdjectiveForms, NounForms, VerbStems, Word, WordEntry, WordKind};
