use limud_flashcards::{Mode, PronounLanguage, Sorting, build_run};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{PracticeCommands, SourceArgs};
use crate::commands::shared::parse::{button, word_filter};
use crate::commands::shared::run::{self, RunOutcome, prompt_side, recover};
use crate::context::AppContext;
use crate::output::output;
use crate::session_store::Deck;

/// Handle `limud practice`.
pub async fn handle(
    action: PracticeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = match action {
        PracticeCommands::Start(source) => start(&source, ctx).await?,
        PracticeCommands::Show => {
            run::show(ctx, Deck::Vocabulary, Mode::Practice, PronounLanguage::default()).await?
        }
        PracticeCommands::Press { button: raw } => {
            run::press(
                ctx,
                Deck::Vocabulary,
                Mode::Practice,
                button(&raw)?,
                PronounLanguage::default(),
            )
            .await?
        }
    };
    output(&outcome, flags.format)
}

/// Shuffled practice over the selected words.
async fn start(source: &SourceArgs, ctx: &mut AppContext) -> anyhow::Result<RunOutcome> {
    let words = ctx.service.list_words(word_filter(source)?).await?;
    let side = prompt_side(ctx, Deck::Vocabulary);

    match build_run(&words, Sorting::Shuffle, None, side, &mut ctx.rng) {
        Ok(state) => {
            run::begin(ctx, Deck::Vocabulary, Mode::Practice, state, PronounLanguage::default())
                .await
        }
        Err(error) => recover(error),
    }
}
