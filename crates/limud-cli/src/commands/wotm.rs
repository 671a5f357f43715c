use std::path::Path;

use anyhow::Context;
use limud_core::entities::ScrapedWord;
use limud_flashcards::{FlashcardError, Mode, PronounLanguage, build_scraped_run};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WotmCommands;
use crate::commands::shared::parse::button;
use crate::commands::shared::run::{self, RunOutcome, recover};
use crate::context::AppContext;
use crate::output::output;
use crate::session_store::Deck;

/// Handle `limud wotm`.
pub async fn handle(
    action: WotmCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = match action {
        WotmCommands::Load { path } => load(&path, ctx).await?,
        WotmCommands::Show => {
            run::show(ctx, Deck::Scraped, Mode::Review, PronounLanguage::default()).await?
        }
        WotmCommands::Press { button: raw } => {
            run::press(
                ctx,
                Deck::Scraped,
                Mode::Review,
                button(&raw)?,
                PronounLanguage::default(),
            )
            .await?
        }
    };
    output(&outcome, flags.format)
}

/// Start browsing the parses stored in a JSON array file.
async fn load(path: &Path, ctx: &AppContext) -> anyhow::Result<RunOutcome> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read parses from {}", path.display()))?;
    let parses: Vec<ScrapedWord> = serde_json::from_str(&raw).map_err(|error| {
        FlashcardError::MalformedInput(format!("parses in {}: {error}", path.display()))
    })?;

    match build_scraped_run(parses) {
        Ok(state) => {
            run::begin(ctx, Deck::Scraped, Mode::Review, state, PronounLanguage::default()).await
        }
        Err(error) => recover(error),
    }
}
