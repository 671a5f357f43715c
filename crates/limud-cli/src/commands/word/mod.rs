mod add;
mod delete;
mod edit;

use limud_core::entities::Word;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WordCommands;
use crate::commands::shared::parse::word_filter;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WordListResponse {
    words: Vec<Word>,
}

#[derive(Debug, Serialize)]
struct ChaptersResponse {
    chapters: Vec<i64>,
}

/// Handle `limud word`.
pub async fn handle(
    action: WordCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WordCommands::Add { fields } => {
            let word = add::run(fields, ctx).await?;
            output(&word, flags.format)
        }
        WordCommands::Edit { id, fields } => {
            let word = edit::run(id, fields, ctx).await?;
            output(&word, flags.format)
        }
        WordCommands::Delete { id } => {
            let response = delete::run(id, ctx).await?;
            output(&response, flags.format)
        }
        WordCommands::Get { id } => output(&ctx.service.get_word(id).await?, flags.format),
        WordCommands::List { source } => {
            let words = ctx.service.list_words(word_filter(&source)?).await?;
            output(&WordListResponse { words }, flags.format)
        }
        WordCommands::Chapters => {
            let chapters = ctx.service.list_chapters().await?;
            output(&ChaptersResponse { chapters }, flags.format)
        }
        WordCommands::Favorite { id } => favorite(id, true, ctx, flags).await,
        WordCommands::Unfavorite { id } => favorite(id, false, ctx, flags).await,
    }
}

async fn favorite(
    id: i64,
    favorite: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.service.set_favorite(id, favorite).await?;
    output(&ctx.service.get_word(id).await?, flags.format)
}
