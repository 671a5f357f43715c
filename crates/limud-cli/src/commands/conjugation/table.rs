use std::collections::HashMap;

use limud_core::conjugation::{label_pronouns, label_tense, table_cells, translate_pronouns};
use limud_core::entities::ConjugationSlot;
use limud_core::enums::{Binyan, Tense};
use limud_flashcards::PronounLanguage;
use serde::Serialize;

use crate::context::AppContext;

#[derive(Debug, Serialize)]
pub struct TableCell {
    /// Packed form code; the field name used when saving the cell.
    pub key: u16,
    pub tense: Tense,
    pub tense_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronoun: Option<&'static str>,
    pub hebrew: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TableView {
    pub binyan: Binyan,
    pub cells: Vec<TableCell>,
}

/// Every cell of `binyan`'s table with its stored text.
pub async fn run(
    binyan: &str,
    language: PronounLanguage,
    ctx: &AppContext,
) -> anyhow::Result<TableView> {
    let binyan: Binyan = binyan.parse()?;
    let stored: HashMap<ConjugationSlot, Option<String>> = ctx
        .service
        .list_conjugations(binyan)
        .await?
        .into_iter()
        .map(|verb| (verb.slot, verb.hebrew))
        .collect();

    let cells = table_cells()
        .into_iter()
        .map(|key| {
            let slot = ConjugationSlot::from_key(binyan, key);
            let pronoun = if key.tense.is_infinitive() {
                None
            } else {
                Some(match language {
                    PronounLanguage::English => label_pronouns(key.person, key.gender, key.number)?,
                    PronounLanguage::Hebrew => {
                        translate_pronouns(key.person, key.gender, key.number)?
                    }
                })
            };
            Ok(TableCell {
                key: key.pack(),
                tense: key.tense,
                tense_label: label_tense(key.tense),
                pronoun,
                hebrew: stored.get(&slot).cloned().flatten(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(TableView { binyan, cells })
}
