use limud_core::enums::Binyan;
use limud_flashcards::FlashcardError;
use serde::Serialize;

use crate::context::AppContext;

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub binyan: Binyan,
    pub saved: usize,
}

/// Parse `KEY=HEBREW` cell arguments.
fn parse_cells(raw: &[String]) -> Result<Vec<(u16, String)>, FlashcardError> {
    raw.iter()
        .map(|cell| {
            let (key, hebrew) = cell.split_once('=').ok_or_else(|| {
                FlashcardError::MalformedInput(format!("cell '{cell}' is not KEY=HEBREW"))
            })?;
            let key = key.trim().parse::<u16>().map_err(|error| {
                FlashcardError::MalformedInput(format!("cell key '{key}': {error}"))
            })?;
            Ok((key, hebrew.to_string()))
        })
        .collect()
}

pub async fn run(binyan: &str, cells: &[String], ctx: &AppContext) -> anyhow::Result<SaveResponse> {
    let binyan: Binyan = binyan.parse()?;
    let cells = parse_cells(cells)?;
    let saved = ctx.service.save_conjugation_table(binyan, &cells).await?;
    Ok(SaveResponse { binyan, saved })
}

#[cfg(test)]
mod tests {
    use super::{parse_cells, run};
    use crate::commands::shared::test_support::context;
    use limud_core::enums::Binyan;
    use pretty_assertions::assert_eq;

    #[test]
    fn cells_parse() {
        let cells = parse_cells(&["32=\u{5D0}".into(), "6=".into()]).unwrap();
        assert_eq!(cells, vec![(32, "\u{5D0}".to_string()), (6, String::new())]);
        assert!(parse_cells(&["32".into()]).is_err());
        assert!(parse_cells(&["x=\u{5D0}".into()]).is_err());
    }

    #[tokio::test]
    async fn saves_cells() {
        let (_dir, ctx) = context().await;
        let response = run("hifil", &["32=\u{5D0}".into()], &ctx).await.unwrap();
        assert_eq!(response.saved, 1);
        assert_eq!(ctx.service.list_conjugations(Binyan::Hifil).await.unwrap().len(), 1);
    }
}
