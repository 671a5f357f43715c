use limud_core::enums::Category;
use limud_db::repos::word::WordFilter;
use limud_flashcards::{ButtonPress, PronounLanguage};

use crate::cli::subcommands::SourceArgs;

/// Resolve the source flags to a word filter.
pub fn word_filter(source: &SourceArgs) -> anyhow::Result<WordFilter> {
    if source.favorites {
        return Ok(WordFilter::Favorites);
    }
    if let Some(category) = &source.category {
        return Ok(WordFilter::Category(category.parse::<Category>()?));
    }
    if let Some(chapter) = source.chapter {
        return Ok(WordFilter::Chapter(chapter));
    }
    Ok(WordFilter::All)
}

pub fn button(raw: &str) -> anyhow::Result<ButtonPress> {
    Ok(raw.parse()?)
}

pub fn pronouns(raw: &str) -> anyhow::Result<PronounLanguage> {
    Ok(raw.parse()?)
}
