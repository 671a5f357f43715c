//! Run builder: turns a queried collection into a fresh [`RunState`].

use limud_core::entities::{ConjugatedVerb, ScrapedWord, Word};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::FlashcardError;
use crate::side::Side;
use crate::state::{RunItem, RunState};

/// Anything that can be referenced from a run by ID and sorted by its Hebrew text.
pub trait Flashcard {
    fn id(&self) -> i64;

    /// Text used for alphabetical ordering.
    fn sort_text(&self) -> &str;
}

impl Flashcard for Word {
    fn id(&self) -> i64 {
        self.id
    }

    fn sort_text(&self) -> &str {
        self.hebrew()
    }
}

impl Flashcard for ConjugatedVerb {
    fn id(&self) -> i64 {
        self.id
    }

    fn sort_text(&self) -> &str {
        self.hebrew.as_deref().unwrap_or_default()
    }
}

/// Order in which a run presents its cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sorting {
    /// Keep the order the query returned.
    #[default]
    None,
    /// Hebrew alphabetical order, ignoring vowel points.
    Alphabetical,
    Shuffle,
}

/// Strip niqqud and anything else outside the Hebrew letters, after
/// canonical decomposition so precomposed letters lose their points too.
#[must_use]
pub fn strip_niqqud(hebrew: &str) -> String {
    hebrew
        .nfd()
        .filter(|c| ('\u{05D0}'..='\u{05F4}').contains(c))
        .collect()
}

/// Build a run over `cards`.
///
/// # Errors
///
/// `EmptyResult` when `cards` is empty. `NotFound` when `start_at` names an
/// ID that is not among `cards`.
pub fn build_run<T: Flashcard, R: Rng + ?Sized>(
    cards: &[T],
    sorting: Sorting,
    start_at: Option<i64>,
    prompt: Side,
    rng: &mut R,
) -> Result<RunState, FlashcardError> {
    if cards.is_empty() {
        tracing::warn!("query returned no flashcards");
        return Err(FlashcardError::EmptyResult);
    }

    let mut ordered: Vec<&T> = cards.iter().collect();
    match sorting {
        Sorting::None => {}
        Sorting::Alphabetical => ordered.sort_by_cached_key(|card| strip_niqqud(card.sort_text())),
        Sorting::Shuffle => ordered.shuffle(rng),
    }
    let ids: Vec<i64> = ordered.iter().map(|card| card.id()).collect();

    let index = match start_at {
        None => 0,
        Some(id) => ids
            .iter()
            .position(|candidate| *candidate == id)
            .ok_or(FlashcardError::NotFound { id })?,
    };

    tracing::info!(cards = ids.len(), ?sorting, index, "created flashcard run");
    Ok(RunState::new(
        ids.into_iter().map(RunItem::Id).collect(),
        index,
        prompt,
    ))
}

/// Build an inline run over scraped parses, starting on the Hebrew face.
///
/// # Errors
///
/// `EmptyResult` when `parses` is empty.
pub fn build_scraped_run(parses: Vec<ScrapedWord>) -> Result<RunState, FlashcardError> {
    if parses.is_empty() {
        return Err(FlashcardError::EmptyResult);
    }
    tracing::info!(parses = parses.len(), "created scraped run");
    Ok(RunState::new(
        parses.into_iter().map(RunItem::Scraped).collect(),
        0,
        Side::Front,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use limud_core::entities::{WordEntry, WordKind};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(id: i64, hebrew: &str) -> Word {
        Word {
            id,
            entry: WordEntry {
                hebrew: hebrew.into(),
                description: String::new(),
                chapter: None,
                favorite: false,
                kind: WordKind::Adverb,
            },
        }
    }

    fn ids(state: &RunState) -> Vec<i64> {
        state.items.iter().filter_map(RunItem::id).collect()
    }

    #[test]
    fn empty_query_is_empty_result() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = build_run::<Word, _>(&[], Sorting::None, None, Side::Front, &mut rng);
        assert_eq!(err, Err(FlashcardError::EmptyResult));
    }

    #[test]
    fn strip_niqqud_keeps_letters_only() {
        // shalom, pointed
        assert_eq!(
            strip_niqqud("\u{5E9}\u{5C1}\u{5B8}\u{5DC}\u{5D5}\u{5B9}\u{5DD}"),
            "\u{5E9}\u{5DC}\u{5D5}\u{5DD}"
        );
        // precomposed shin with dot decomposes
        assert_eq!(strip_niqqud("\u{FB2A}"), "\u{5E9}");
        assert_eq!(strip_niqqud("abc"), "");
    }

    #[test]
    fn alphabetical_ignores_niqqud() {
        let words = [
            // gimel with qamats
            word(1, "\u{5D2}\u{5B8}"),
            // bet with dagesh and patah
            word(2, "\u{5D1}\u{5BC}\u{5B7}"),
            // plain alef
            word(3, "\u{5D0}"),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        let state = build_run(&words, Sorting::Alphabetical, None, Side::Front, &mut rng).unwrap();
        assert_eq!(ids(&state), vec![3, 2, 1]);
    }

    #[test]
    fn alphabetical_is_stable_for_equal_keys() {
        let words = [
            word(1, "\u{5D1}\u{5B8}"),
            word(2, "\u{5D0}"),
            word(3, "\u{5D1}\u{5B4}"),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        let state = build_run(&words, Sorting::Alphabetical, None, Side::Front, &mut rng).unwrap();
        assert_eq!(ids(&state), vec![2, 1, 3]);
    }

    #[test]
    fn start_at_sets_index() {
        let words = [word(10, "\u{5D0}"), word(20, "\u{5D1}"), word(30, "\u{5D2}")];
        let mut rng = StdRng::seed_from_u64(0);
        let state = build_run(&words, Sorting::None, Some(30), Side::Back, &mut rng).unwrap();
        assert_eq!(state.index, 2);
        assert_eq!(state.side, Side::Back);
        assert_eq!(state.progress.total, 3);
    }

    #[test]
    fn missing_start_is_not_found() {
        let words = [word(10, "\u{5D0}")];
        let mut rng = StdRng::seed_from_u64(0);
        let err = build_run(&words, Sorting::None, Some(11), Side::Front, &mut rng);
        assert_eq!(err, Err(FlashcardError::NotFound { id: 11 }));
    }

    #[test]
    fn seeded_shuffle_is_reproducible_permutation() {
        let words: Vec<Word> = (1..=20).map(|id| word(id, "\u{5D0}")).collect();
        let first = build_run(
            &words,
            Sorting::Shuffle,
            None,
            Side::Front,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let second = build_run(
            &words,
            Sorting::Shuffle,
            None,
            Side::Front,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        assert_eq!(first, second);

        let mut sorted = ids(&first);
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn scraped_run_starts_on_front() {
        let parse = ScrapedWord {
            url: "https://example.org".into(),
            word: "\u{5E1}\u{5D5}\u{5E1}".into(),
            category: "noun".into(),
            meanings: vec![],
            examples: vec![],
            binyan: None,
        };
        let state = build_scraped_run(vec![parse]).unwrap();
        assert_eq!(state.side, Side::Front);
        assert_eq!(state.current_id().unwrap(), None);
        assert_eq!(build_scraped_run(vec![]), Err(FlashcardError::EmptyResult));
    }
}
