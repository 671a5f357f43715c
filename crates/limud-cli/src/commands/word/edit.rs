use limud_core::entities::Word;
use limud_core::fields::WordFields;

use crate::cli::subcommands::WordFieldArgs;
use crate::context::AppContext;

/// Overlay the given fields on the stored word and save it.
pub async fn run(id: i64, fields: WordFieldArgs, ctx: &AppContext) -> anyhow::Result<Word> {
    let current = ctx.service.get_word(id).await?;
    let fields = fields.overlay(WordFields::from(&current.entry));
    Ok(ctx.service.apply_word_fields(id, &fields).await?)
}
