use limud_config::LimudConfig;
use limud_core::entities::{NounForms, WordEntry, WordKind};
use limud_core::enums::NounGender;
use limud_db::service::LimudService;

use crate::context::AppContext;
use crate::session_store::SessionStore;

/// Context over an in-memory database, a temporary session slot, and a
/// seeded random source.
pub async fn context() -> (tempfile::TempDir, AppContext) {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = LimudService::new_local(":memory:")
        .await
        .expect("in-memory service");
    let mut config = LimudConfig::default();
    config.flashcards.random_seed = Some(5);
    let session = SessionStore::new(dir.path().join("session.json"));
    (dir, AppContext::from_parts(service, config, session))
}

pub fn noun(hebrew: &str, description: &str) -> WordEntry {
    WordEntry {
        hebrew: hebrew.into(),
        description: description.into(),
        chapter: Some(1),
        favorite: false,
        kind: WordKind::Noun(NounForms {
            gender: NounGender::Masculine,
            plural_absolute: None,
            singular_construct: None,
            plural_construct: None,
        }),
    }
}
