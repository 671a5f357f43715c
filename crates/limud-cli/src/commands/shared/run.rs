//! The run loop shared by every flashcard command: load the slot, apply
//! one press, perform its effect, persist, render.

use limud_db::error::DatabaseError;
use limud_flashcards::{
    ButtonPress, Effect, FlashcardError, Mode, PronounLanguage, RunState, Side, SidePolicy, apply,
};
use serde::Serialize;

use super::card::{CardView, render_card};
use crate::context::AppContext;
use crate::session_store::{ActiveRun, Deck};

/// What a run command produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The run goes on; here is its current card.
    Card(CardView),
    /// Every card was answered correctly.
    Finished { completed: usize },
    /// The run could not start or continue; back to the menu.
    Left { reason: String },
}

impl RunOutcome {
    fn left(reason: impl ToString) -> Self {
        Self::Left {
            reason: reason.to_string(),
        }
    }
}

const fn sides(ctx: &AppContext, deck: Deck) -> SidePolicy {
    match deck {
        Deck::Vocabulary => ctx.vocabulary_sides(),
        Deck::Conjugation => SidePolicy::conjugation(),
        Deck::Scraped => SidePolicy::new(Side::Front),
    }
}

/// Prompt face a new run of `deck` starts on.
pub const fn prompt_side(ctx: &AppContext, deck: Deck) -> Side {
    sides(ctx, deck).prompt()
}

/// Turn a failed run construction into a notice when it is recoverable.
pub fn recover(error: FlashcardError) -> anyhow::Result<RunOutcome> {
    match error {
        FlashcardError::EmptyResult | FlashcardError::NotFound { .. } => {
            Ok(RunOutcome::left(error))
        }
        other => Err(other.into()),
    }
}

/// Render the card of `run`, leaving the run if its entity is gone.
async fn card_or_leave(
    ctx: &AppContext,
    run: &ActiveRun,
    language: PronounLanguage,
    effect: Option<Effect>,
) -> anyhow::Result<RunOutcome> {
    match render_card(ctx, run, language, effect).await {
        Ok(card) => Ok(RunOutcome::Card(card)),
        Err(error)
            if matches!(
                error.downcast_ref::<DatabaseError>(),
                Some(DatabaseError::NoResult)
            ) =>
        {
            tracing::warn!(deck = ?run.deck, "current flashcard no longer exists; leaving run");
            ctx.session.clear()?;
            Ok(RunOutcome::left("flashcard no longer exists"))
        }
        Err(error) => Err(error),
    }
}

/// Replace the session slot with a fresh run and show its first card.
pub async fn begin(
    ctx: &AppContext,
    deck: Deck,
    mode: Mode,
    state: RunState,
    language: PronounLanguage,
) -> anyhow::Result<RunOutcome> {
    let run = ActiveRun { deck, mode, state };
    ctx.session.save(&run)?;
    tracing::info!(?deck, %mode, cards = run.state.items.len(), "started run");
    card_or_leave(ctx, &run, language, None).await
}

/// Show the current card without changing the run.
pub async fn show(
    ctx: &AppContext,
    deck: Deck,
    mode: Mode,
    language: PronounLanguage,
) -> anyhow::Result<RunOutcome> {
    let run = ctx.session.require(deck, mode)?;
    card_or_leave(ctx, &run, language, None).await
}

/// Apply one press to the active run.
pub async fn press(
    ctx: &mut AppContext,
    deck: Deck,
    mode: Mode,
    button: ButtonPress,
    language: PronounLanguage,
) -> anyhow::Result<RunOutcome> {
    let run = ctx.session.require(deck, mode)?;
    let policy = sides(ctx, deck);
    let step = apply(mode, run.state, button, policy, &mut ctx.rng)?;

    if let Some(Effect::SetFavorite { id, favorite }) = step.effect {
        ctx.service.set_favorite(id, favorite).await?;
    }

    let run = ActiveRun {
        deck,
        mode,
        state: step.state,
    };
    if run.state.is_exhausted() {
        ctx.session.clear()?;
        tracing::info!(?deck, %mode, "run completed");
        return Ok(RunOutcome::Finished {
            completed: run.state.progress.completed,
        });
    }

    ctx.session.save(&run)?;
    card_or_leave(ctx, &run, language, step.effect).await
}

#[cfg(test)]
mod tests {
    use super::{RunOutcome, begin, press, recover, show};
    use crate::commands::shared::test_support::{context, noun};
    use crate::session_store::Deck;
    use limud_flashcards::{
        ButtonPress, Effect, FlashcardError, Mode, Progress, PronounLanguage, RunItem, RunState,
        Side,
    };
    use pretty_assertions::assert_eq;

    const HE: PronounLanguage = PronounLanguage::Hebrew;

    #[test]
    fn empty_and_not_found_leave() {
        assert!(matches!(
            recover(FlashcardError::EmptyResult).unwrap(),
            RunOutcome::Left { .. }
        ));
        assert!(matches!(
            recover(FlashcardError::NotFound { id: 3 }).unwrap(),
            RunOutcome::Left { .. }
        ));
        assert!(recover(FlashcardError::InvalidSessionState("x".into())).is_err());
    }

    #[tokio::test]
    async fn review_shows_front_then_back() {
        let (_dir, mut ctx) = context().await;
        let word = ctx
            .service
            .create_word(&noun("\u{5E1}\u{5D5}\u{5E1}", "horse"))
            .await
            .unwrap();
        let state = RunState::new(vec![RunItem::Id(word.id)], 0, Side::Front);

        let outcome = begin(&ctx, Deck::Vocabulary, Mode::Review, state, HE)
            .await
            .unwrap();
        let RunOutcome::Card(card) = outcome else {
            panic!("expected a card");
        };
        assert_eq!(card.content, "\u{5E1}\u{5D5}\u{5E1}");
        assert_eq!(card.progress, Progress::new(1, 1));
        assert_eq!(card.favorite, Some(false));

        let outcome = press(&mut ctx, Deck::Vocabulary, Mode::Review, ButtonPress::Flip, HE)
            .await
            .unwrap();
        let RunOutcome::Card(card) = outcome else {
            panic!("expected a card");
        };
        assert_eq!(card.side, Side::Back);
        assert!(card.content.contains("(noun, m.)"));
    }

    #[tokio::test]
    async fn favorite_press_updates_word() {
        let (_dir, mut ctx) = context().await;
        let word = ctx.service.create_word(&noun("\u{5D0}", "a")).await.unwrap();
        let state = RunState::new(vec![RunItem::Id(word.id)], 0, Side::Front);
        begin(&ctx, Deck::Vocabulary, Mode::Review, state, HE).await.unwrap();

        let outcome = press(&mut ctx, Deck::Vocabulary, Mode::Review, ButtonPress::Favorite, HE)
            .await
            .unwrap();
        let RunOutcome::Card(card) = outcome else {
            panic!("expected a card");
        };
        assert_eq!(card.favorite, Some(true));
        assert_eq!(
            card.effect,
            Some(Effect::SetFavorite {
                id: word.id,
                favorite: true
            })
        );
    }

    #[tokio::test]
    async fn last_correct_answer_finishes_and_clears() {
        let (_dir, mut ctx) = context().await;
        let word = ctx.service.create_word(&noun("\u{5D0}", "a")).await.unwrap();
        let state = RunState::new(vec![RunItem::Id(word.id)], 0, Side::Front);
        begin(&ctx, Deck::Vocabulary, Mode::Practice, state, HE).await.unwrap();

        let outcome = press(&mut ctx, Deck::Vocabulary, Mode::Practice, ButtonPress::Correct, HE)
            .await
            .unwrap();
        assert_eq!(outcome, RunOutcome::Finished { completed: 1 });
        assert_eq!(ctx.session.load().unwrap(), None);
    }

    #[tokio::test]
    async fn vanished_word_leaves_run() {
        let (_dir, ctx) = context().await;
        let state = RunState::new(vec![RunItem::Id(404)], 0, Side::Front);
        let outcome = begin(&ctx, Deck::Vocabulary, Mode::Review, state, HE).await.unwrap();
        assert!(matches!(outcome, RunOutcome::Left { .. }));
        assert_eq!(ctx.session.load().unwrap(), None);
    }

    #[tokio::test]
    async fn show_without_run_is_an_error() {
        let (_dir, ctx) = context().await;
        assert!(show(&ctx, Deck::Vocabulary, Mode::Review, HE).await.is_err());
    }
}
