mod practice;
mod save;
mod table;

use limud_flashcards::Mode;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ConjugationCommands;
use crate::commands::shared::parse::{button, pronouns};
use crate::commands::shared::run;
use crate::context::AppContext;
use crate::output::output;
use crate::session_store::Deck;

/// Handle `limud conjugation`.
pub async fn handle(
    action: ConjugationCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ConjugationCommands::Table {
            binyan,
            pronouns: language,
        } => {
            let view = table::run(&binyan, pronouns(&language)?, ctx).await?;
            output(&view, flags.format)
        }
        ConjugationCommands::Save { binyan, cells } => {
            let response = save::run(&binyan, &cells, ctx).await?;
            output(&response, flags.format)
        }
        ConjugationCommands::Practice { target } => {
            let outcome = practice::run(&target, ctx).await?;
            output(&outcome, flags.format)
        }
        ConjugationCommands::Show { pronouns: language } => {
            let outcome =
                run::show(ctx, Deck::Conjugation, Mode::Practice, pronouns(&language)?).await?;
            output(&outcome, flags.format)
        }
        ConjugationCommands::Press {
            button: raw,
            pronouns: language,
        } => {
            let outcome = run::press(
                ctx,
                Deck::Conjugation,
                Mode::Practice,
                button(&raw)?,
                pronouns(&language)?,
            )
            .await?;
            output(&outcome, flags.format)
        }
    }
}
