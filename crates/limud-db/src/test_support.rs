//! Shared test utilities for limud-db tests.

use limud_core::entities::{NounForms, VerbStems, WordEntry, WordKind};
use limud_core::enums::NounGender;

use crate::LimudDb;
use crate::service::LimudService;

/// Create an in-memory `LimudService`.
pub async fn test_service() -> LimudService {
    let db = LimudDb::open_local(":memory:").await.unwrap();
    LimudService::from_db(db)
}

/// A masculine noun in the given chapter.
pub fn noun(hebrew: &str, description: &str, chapter: Option<i64>) -> WordEntry {
    WordEntry {
        hebrew: hebrew.into(),
        description: description.into(),
        chapter,
        favorite: false,
        kind: WordKind::Noun(NounForms {
            gender: NounGender::Masculine,
            plural_absolute: None,
            singular_construct: None,
            plural_construct: None,
        }),
    }
}

/// A verb with the given qal meaning and derived stems.
pub fn verb(hebrew: &str, qal: &str, stems: VerbStems) -> WordEntry {
    WordEntry {
        hebrew: hebrew.into(),
        description: qal.into(),
        chapter: Some(1),
        favorite: false,
        kind: WordKind::Verb(stems),
    }
}
