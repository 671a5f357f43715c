use limud_core::entities::{Word, WordEntry};
use limud_core::fields::WordFields;

use crate::cli::subcommands::WordFieldArgs;
use crate::context::AppContext;

pub async fn run(fields: WordFieldArgs, ctx: &AppContext) -> anyhow::Result<Word> {
    let fields = fields.overlay(WordFields::default());
    let entry = WordEntry::from_fields(&fields)?;
    Ok(ctx.service.create_word(&entry).await?)
}
