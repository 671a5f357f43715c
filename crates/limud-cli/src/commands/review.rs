use limud_db::repos::word::WordFilter;
use limud_flashcards::{Mode, PronounLanguage, Sorting, build_run};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ReviewCommands, ReviewStartArgs};
use crate::commands::shared::parse::{button, word_filter};
use crate::commands::shared::run::{self, RunOutcome, prompt_side, recover};
use crate::context::AppContext;
use crate::output::output;
use crate::session_store::Deck;

/// Handle `limud review`.
pub async fn handle(
    action: ReviewCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = match action {
        ReviewCommands::Start(args) => start(&args, ctx).await?,
        ReviewCommands::Show => {
            run::show(ctx, Deck::Vocabulary, Mode::Review, PronounLanguage::default()).await?
        }
        ReviewCommands::Press { button: raw } => {
            run::press(
                ctx,
                Deck::Vocabulary,
                Mode::Review,
                button(&raw)?,
                PronounLanguage::default(),
            )
            .await?
        }
    };
    output(&outcome, flags.format)
}

/// Alphabetical review over the selected words, optionally starting at one.
async fn start(args: &ReviewStartArgs, ctx: &mut AppContext) -> anyhow::Result<RunOutcome> {
    let filter = if args.word.is_some() {
        WordFilter::All
    } else {
        word_filter(&args.source)?
    };
    let words = ctx.service.list_words(filter).await?;
    let side = prompt_side(ctx, Deck::Vocabulary);

    match build_run(&words, Sorting::Alphabetical, args.word, side, &mut ctx.rng) {
        Ok(state) => {
            run::begin(ctx, Deck::Vocabulary, Mode::Review, state, PronounLanguage::default())
                .await
        }
        Err(error) => recover(error),
    }
}

#[cfg(test)]
mod tests {
    use super::start;
    use crate::cli::subcommands::{ReviewStartArgs, SourceArgs};
    use crate::commands::shared::run::RunOutcome;
    use crate::commands::shared::test_support::{context, noun};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn review_starts_alphabetically_at_word() {
        let (_dir, mut ctx) = context().await;
        let gimel = ctx.service.create_word(&noun("\u{5D2}", "c")).await.unwrap();
        ctx.service.create_word(&noun("\u{5D0}\u{5B8}", "a")).await.unwrap();
        ctx.service.create_word(&noun("\u{5D1}", "b")).await.unwrap();

        let args = ReviewStartArgs {
            word: Some(gimel.id),
            ..ReviewStartArgs::default()
        };
        let RunOutcome::Card(card) = start(&args, &mut ctx).await.unwrap() else {
            panic!("expected a card");
        };
        assert_eq!(card.id, Some(gimel.id));
        assert_eq!(card.progress.completed, 3);
    }

    #[tokio::test]
    async fn empty_source_leaves_to_menu() {
        let (_dir, mut ctx) = context().await;
        let args = ReviewStartArgs {
            source: SourceArgs {
                favorites: true,
                ..SourceArgs::default()
            },
            word: None,
        };
        let outcome = start(&args, &mut ctx).await.unwrap();
        assert!(matches!(outcome, RunOutcome::Left { .. }));
        assert_eq!(ctx.session.load().unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_start_word_leaves_to_menu() {
        let (_dir, mut ctx) = context().await;
        ctx.service.create_word(&noun("\u{5D0}", "a")).await.unwrap();
        let args = ReviewStartArgs {
            word: Some(999),
            ..ReviewStartArgs::default()
        };
        assert!(matches!(
            start(&args, &mut ctx).await.unwrap(),
            RunOutcome::Left { .. }
        ));
    }
}
