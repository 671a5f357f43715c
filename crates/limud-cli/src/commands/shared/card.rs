//! Rendering the card under the cursor of a run.

use limud_flashcards::{
    Effect, FlashcardError, Mode, Progress, PronounLanguage, RunItem, Side, conjugation_prompt,
    format_back,
};
use serde::Serialize;

use crate::context::AppContext;
use crate::session_store::{ActiveRun, Deck};

/// One visible card face plus everything a front end needs to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub deck: Deck,
    pub mode: Mode,
    pub side: Side,
    /// Plain Hebrew on the front of vocabulary cards, HTML markup otherwise.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
    pub progress: Progress,
    pub percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<Effect>,
}

struct Face {
    content: String,
    id: Option<i64>,
    favorite: Option<bool>,
    origin_url: Option<String>,
}

async fn face(
    ctx: &AppContext,
    run: &ActiveRun,
    language: PronounLanguage,
) -> anyhow::Result<Face> {
    let side = run.state.side;
    match (run.deck, run.state.current()?) {
        (Deck::Vocabulary, RunItem::Id(id)) => {
            let word = ctx.service.get_word(*id).await?;
            let content = match side {
                Side::Front => word.hebrew().to_string(),
                Side::Back => format_back(&word.entry).into_string(),
            };
            Ok(Face {
                content,
                id: Some(word.id),
                favorite: Some(word.entry.favorite),
                origin_url: None,
            })
        }
        (Deck::Conjugation, RunItem::Id(id)) => {
            let verb = ctx.service.get_conjugation(*id).await?;
            let content = match side {
                Side::Front => verb.hebrew.clone().unwrap_or_default(),
                Side::Back => conjugation_prompt(&verb, language)?.into_string(),
            };
            Ok(Face {
                content,
                id: Some(verb.id),
                favorite: None,
                origin_url: None,
            })
        }
        (Deck::Scraped, RunItem::Scraped(parse)) => {
            let content = match side {
                Side::Front => parse.word.clone(),
                Side::Back => format_back(&parse.to_entry()?).into_string(),
            };
            Ok(Face {
                content,
                id: None,
                favorite: None,
                origin_url: Some(parse.url.clone()),
            })
        }
        (deck, _) => Err(FlashcardError::InvalidSessionState(format!(
            "run item does not belong to a {deck:?} deck"
        ))
        .into()),
    }
}

/// Fetch and render the current card of `run`.
pub async fn render_card(
    ctx: &AppContext,
    run: &ActiveRun,
    language: PronounLanguage,
    effect: Option<Effect>,
) -> anyhow::Result<CardView> {
    let face = face(ctx, run, language).await?;
    let progress = run.state.progress_for(run.mode);
    Ok(CardView {
        deck: run.deck,
        mode: run.mode,
        side: run.state.side,
        content: face.content,
        id: face.id,
        favorite: face.favorite,
        progress,
        percent: progress.percent(),
        origin_url: face.origin_url,
        effect,
    })
}
