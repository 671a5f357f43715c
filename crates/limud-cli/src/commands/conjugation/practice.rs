use limud_core::enums::Binyan;
use limud_flashcards::{
    Mode, PronounLanguage, Sorting, binyan_deck, build_run, representative_deck,
};

use crate::commands::shared::run::{self, RunOutcome, prompt_side, recover};
use crate::context::AppContext;
use crate::session_store::Deck;

/// Start a conjugation drill over one binyan, or over the representative
/// forms of every binyan when `target` is `all`.
pub async fn run(target: &str, ctx: &mut AppContext) -> anyhow::Result<RunOutcome> {
    let deck = if target.trim().eq_ignore_ascii_case("all") {
        let verbs = ctx.service.list_representative_forms().await?;
        representative_deck(verbs, &mut ctx.rng)
    } else {
        let binyan: Binyan = target.parse()?;
        let verbs = ctx.service.list_conjugations(binyan).await?;
        let exclusions = ctx.tense_exclusions();
        binyan_deck(verbs, exclusions, &mut ctx.rng)
    };

    let side = prompt_side(ctx, Deck::Conjugation);
    match build_run(&deck, Sorting::None, None, side, &mut ctx.rng) {
        Ok(state) => {
            run::begin(ctx, Deck::Conjugation, Mode::Practice, state, PronounLanguage::default())
                .await
        }
        Err(error) => recover(error),
    }
}
