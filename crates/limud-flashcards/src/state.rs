//! Run state: the ordered working set of a flashcard run.

use limud_core::entities::ScrapedWord;
use serde::{Deserialize, Serialize};

use crate::error::FlashcardError;
use crate::event::Mode;
use crate::side::Side;

/// Reference to one card of a run.
///
/// Stored entities are referenced by ID. Scraped words have no ID and are
/// carried inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunItem {
    Id(i64),
    Scraped(ScrapedWord),
}

impl RunItem {
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Scraped(_) => None,
        }
    }
}

impl From<i64> for RunItem {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

/// `(completed, total)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub const fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Completion as a percentage; zero for an empty total.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.completed as f64 / self.total as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub items: Vec<RunItem>,
    pub index: usize,
    pub side: Side,
    pub progress: Progress,
}

impl RunState {
    /// A fresh run over `items` starting at `index`, nothing completed yet.
    #[must_use]
    pub fn new(items: Vec<RunItem>, index: usize, side: Side) -> Self {
        let total = items.len();
        Self {
            items,
            index,
            side,
            progress: Progress::new(0, total),
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.items.is_empty()
    }

    /// Check that an active run points at an existing item.
    ///
    /// # Errors
    ///
    /// `InvalidSessionState` when the run is empty or the index is out of range.
    pub fn validate(&self) -> Result<(), FlashcardError> {
        if self.items.is_empty() {
            return Err(FlashcardError::InvalidSessionState(
                "run has no items".into(),
            ));
        }
        if self.index >= self.items.len() {
            return Err(FlashcardError::InvalidSessionState(format!(
                "index {} out of range for {} items",
                self.index,
                self.items.len()
            )));
        }
        Ok(())
    }

    /// The item under the cursor.
    ///
    /// # Errors
    ///
    /// Same as [`Self::validate`].
    pub fn current(&self) -> Result<&RunItem, FlashcardError> {
        self.validate()?;
        Ok(&self.items[self.index])
    }

    /// ID of the item under the cursor, or `None` for an inline scraped word.
    ///
    /// # Errors
    ///
    /// Same as [`Self::validate`].
    pub fn current_id(&self) -> Result<Option<i64>, FlashcardError> {
        Ok(self.current()?.id())
    }

    /// Drop every reference to `id` after the entity was deleted.
    ///
    /// The cursor stays on the card it showed. When that card itself is
    /// removed, review steps back one position (wrapping) and practice moves
    /// on to the next card, starting a new pass at the end of the deck.
    /// Practice counters lose the removed cards, so `completed` still only
    /// reaches `total` when the deck runs out. Returns `false` when `id` was
    /// not part of the run.
    pub fn remove_id(&mut self, id: i64, mode: Mode) -> bool {
        let before_cursor = self.items[..self.index.min(self.items.len())]
            .iter()
            .filter(|item| item.id() == Some(id))
            .count();
        let current_removed = self
            .items
            .get(self.index)
            .is_some_and(|item| item.id() == Some(id));

        let before = self.items.len();
        self.items.retain(|item| item.id() != Some(id));
        let removed = before - self.items.len();
        if removed == 0 {
            return false;
        }

        let remaining = self.items.len();
        self.progress = Progress::new(
            self.progress.completed.saturating_sub(before_cursor),
            self.progress.total.saturating_sub(removed),
        );
        self.index -= before_cursor;

        if remaining == 0 {
            self.index = 0;
        } else if mode == Mode::Review && current_removed {
            self.index = (self.index + remaining - 1) % remaining;
        } else if self.index >= remaining {
            self.index = 0;
            self.progress = Progress::new(0, remaining);
        }
        tracing::debug!(id, remaining, index = self.index, "removed item from run");
        true
    }

    /// Progress as shown to the user: the cursor position in review, the
    /// stored counters in practice.
    #[must_use]
    pub fn progress_for(&self, mode: Mode) -> Progress {
        match mode {
            Mode::Review => Progress::new(self.index + 1, self.items.len()),
            Mode::Practice => self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(state: &RunState) -> Vec<i64> {
        state.items.iter().filter_map(RunItem::id).collect()
    }

    fn run(items: &[i64], index: usize) -> RunState {
        RunState::new(items.iter().copied().map(RunItem::from).collect(), index, Side::Front)
    }

    #[test]
    fn new_run_has_zero_progress() {
        let state = run(&[4, 5, 6], 1);
        assert_eq!(state.progress, Progress::new(0, 3));
        assert_eq!(state.current_id().unwrap(), Some(5));
    }

    #[test]
    fn empty_or_out_of_range_is_invalid() {
        assert!(matches!(
            run(&[], 0).validate(),
            Err(FlashcardError::InvalidSessionState(_))
        ));
        assert!(matches!(
            run(&[1], 1).current(),
            Err(FlashcardError::InvalidSessionState(_))
        ));
    }

    #[test]
    fn review_removal_of_current_steps_back_and_wraps() {
        let mut state = run(&[1, 2, 3], 1);
        assert!(state.remove_id(2, Mode::Review));
        assert_eq!(ids(&state), vec![1, 3]);
        assert_eq!(state.index, 0);

        let mut state = run(&[1, 2, 3], 0);
        assert!(state.remove_id(1, Mode::Review));
        assert_eq!(state.index, 1);
        assert_eq!(state.current_id().unwrap(), Some(3));
    }

    #[test]
    fn removing_another_card_keeps_the_cursor_on_its_card() {
        let mut state = run(&[1, 2, 3, 4], 2);
        assert!(state.remove_id(1, Mode::Review));
        assert_eq!(state.current_id().unwrap(), Some(3));

        assert!(state.remove_id(4, Mode::Review));
        assert_eq!(state.current_id().unwrap(), Some(3));
        assert_eq!(state.progress_for(Mode::Review), Progress::new(2, 2));
    }

    #[test]
    fn practice_removal_drops_answered_cards_from_progress() {
        let mut state = run(&[1, 2, 3, 4], 2);
        state.progress = Progress::new(2, 4);

        assert!(state.remove_id(1, Mode::Practice));
        assert_eq!(state.progress, Progress::new(1, 3));
        assert_eq!(state.current_id().unwrap(), Some(3));

        assert!(state.remove_id(3, Mode::Practice));
        assert_eq!(state.progress, Progress::new(1, 2));
        assert_eq!(state.current_id().unwrap(), Some(4));
    }

    #[test]
    fn practice_removal_at_end_of_pass_starts_a_new_pass() {
        let mut state = run(&[1, 2, 3], 2);
        state.progress = Progress::new(2, 3);

        assert!(state.remove_id(3, Mode::Practice));
        assert_eq!(state.index, 0);
        assert_eq!(state.progress, Progress::new(0, 2));
    }

    #[test]
    fn remove_last_item_exhausts() {
        let mut state = run(&[7], 0);
        assert!(state.remove_id(7, Mode::Practice));
        assert!(state.is_exhausted());
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut state = run(&[1, 2], 1);
        assert!(!state.remove_id(9, Mode::Review));
        assert_eq!(state, run(&[1, 2], 1));
    }

    #[test]
    fn progress_by_mode() {
        let mut state = run(&[1, 2, 3, 4], 2);
        state.progress = Progress::new(5, 4);
        assert_eq!(state.progress_for(Mode::Review), Progress::new(3, 4));
        assert_eq!(state.progress_for(Mode::Practice), Progress::new(5, 4));
    }

    #[test]
    fn percent_of_progress() {
        assert!((Progress::new(1, 4).percent() - 25.0).abs() < f64::EPSILON);
        assert!(Progress::new(0, 0).percent().abs() < f64::EPSILON);
    }

    #[test]
    fn items_serialize_untagged() {
        let json = serde_json::to_value(run(&[3], 0)).unwrap();
        assert_eq!(json["items"], serde_json::json!([3]));
        assert_eq!(json["side"], serde_json::json!("front"));
    }
}
