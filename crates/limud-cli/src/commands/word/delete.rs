use serde::Serialize;

use crate::context::AppContext;
use crate::session_store::Deck;

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunChange {
    /// No vocabulary run referenced the word.
    Untouched,
    /// The word was dropped from the active run.
    Removed,
    /// The word was the last card of the active run.
    Ended,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: i64,
    pub run: RunChange,
}

/// Delete a word and drop it from the active vocabulary run.
pub async fn run(id: i64, ctx: &AppContext) -> anyhow::Result<DeleteResponse> {
    ctx.service.delete_word(id).await?;

    let change = match ctx.session.load()? {
        Some(mut run) if run.deck == Deck::Vocabulary => {
            if !run.state.remove_id(id, run.mode) {
                RunChange::Untouched
            } else if run.state.is_exhausted() {
                ctx.session.clear()?;
                RunChange::Ended
            } else {
                ctx.session.save(&run)?;
                RunChange::Removed
            }
        }
        _ => RunChange::Untouched,
    };

    Ok(DeleteResponse {
        deleted: id,
        run: change,
    })
}

#[cfg(test)]
mod tests {
    use super::{RunChange, run};
    use crate::commands::shared::test_support::{context, noun};
    use crate::session_store::{ActiveRun, Deck};
    use limud_flashcards::{Mode, Progress, RunItem, RunState, Side};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn delete_during_review_steps_back() {
        let (_dir, ctx) = context().await;
        let mut ids = Vec::new();
        for hebrew in ["\u{5D0}", "\u{5D1}", "\u{5D2}"] {
            ids.push(ctx.service.create_word(&noun(hebrew, "x")).await.unwrap().id);
        }
        ctx.session
            .save(&ActiveRun {
                deck: Deck::Vocabulary,
                mode: Mode::Review,
                state: RunState::new(
                    ids.iter().copied().map(RunItem::Id).collect(),
                    1,
                    Side::Front,
                ),
            })
            .unwrap();

        let response = run(ids[1], &ctx).await.unwrap();
        assert_eq!(response.run, RunChange::Removed);

        let stored = ctx.session.load().unwrap().unwrap();
        assert_eq!(stored.state.items, vec![RunItem::Id(ids[0]), RunItem::Id(ids[2])]);
        assert_eq!(stored.state.index, 0);
        assert!(ctx.service.get_word(ids[1]).await.is_err());
    }

    #[tokio::test]
    async fn deleting_answered_card_during_practice_keeps_progress_open() {
        let (_dir, ctx) = context().await;
        let mut ids = Vec::new();
        for hebrew in ["\u{5D0}", "\u{5D1}", "\u{5D2}"] {
            ids.push(ctx.service.create_word(&noun(hebrew, "x")).await.unwrap().id);
        }
        let mut state = RunState::new(
            ids.iter().copied().map(RunItem::Id).collect(),
            2,
            Side::Front,
        );
        state.progress = Progress::new(2, 3);
        ctx.session
            .save(&ActiveRun {
                deck: Deck::Vocabulary,
                mode: Mode::Practice,
                state,
            })
            .unwrap();

        assert_eq!(run(ids[0], &ctx).await.unwrap().run, RunChange::Removed);

        let stored = ctx.session.load().unwrap().unwrap();
        assert_eq!(stored.state.current_id().unwrap(), Some(ids[2]));
        assert_eq!(stored.state.progress, Progress::new(1, 2));
    }

    #[tokio::test]
    async fn deleting_last_card_ends_run() {
        let (_dir, ctx) = context().await;
        let id = ctx.service.create_word(&noun("\u{5D0}", "x")).await.unwrap().id;
        ctx.session
            .save(&ActiveRun {
                deck: Deck::Vocabulary,
                mode: Mode::Review,
                state: RunState::new(vec![RunItem::Id(id)], 0, Side::Front),
            })
            .unwrap();

        assert_eq!(run(id, &ctx).await.unwrap().run, RunChange::Ended);
        assert_eq!(ctx.session.load().unwrap(), None);
    }

    #[tokio::test]
    async fn deleting_without_run_leaves_slot_alone() {
        let (_dir, ctx) = context().await;
        let id = ctx.service.create_word(&noun("\u{5D0}", "x")).await.unwrap().id;
        assert_eq!(run(id, &ctx).await.unwrap().run, RunChange::Untouched);
        assert!(run(id, &ctx).await.is_err());
    }
}
