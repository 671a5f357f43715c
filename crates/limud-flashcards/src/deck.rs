//! Conjugation practice decks.

use limud_core::entities::ConjugatedVerb;
use limud_core::enums::Tense;
use rand::Rng;
use rand::seq::SliceRandom;

/// Tenses left out of single-binyan practice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TenseExclusions {
    pub waw_consecutives: bool,
    pub jussive_and_cohortatives: bool,
}

impl TenseExclusions {
    #[must_use]
    pub const fn excludes(self, tense: Tense) -> bool {
        (self.waw_consecutives && tense.is_waw_consecutive())
            || (self.jussive_and_cohortatives && matches!(tense, Tense::JussiveCohortative))
    }
}

fn has_text(verb: &ConjugatedVerb) -> bool {
    verb.hebrew.as_deref().is_some_and(|text| !text.trim().is_empty())
}

/// Practice deck for one binyan: forms that have Hebrew text and survive the
/// exclusions, shuffled.
pub fn binyan_deck<R: Rng + ?Sized>(
    verbs: Vec<ConjugatedVerb>,
    exclusions: TenseExclusions,
    rng: &mut R,
) -> Vec<ConjugatedVerb> {
    let mut deck: Vec<ConjugatedVerb> = verbs
        .into_iter()
        .filter(|verb| has_text(verb) && !exclusions.excludes(verb.slot.tense))
        .collect();
    deck.shuffle(rng);
    tracing::debug!(cards = deck.len(), ?exclusions, "built binyan deck");
    deck
}

/// Practice deck of representative forms across every binyan, shuffled.
pub fn representative_deck<R: Rng + ?Sized>(
    verbs: Vec<ConjugatedVerb>,
    rng: &mut R,
) -> Vec<ConjugatedVerb> {
    let mut deck: Vec<ConjugatedVerb> = verbs.into_iter().filter(has_text).collect();
    deck.shuffle(rng);
    tracing::debug!(cards = deck.len(), "built representative deck");
    deck
}
