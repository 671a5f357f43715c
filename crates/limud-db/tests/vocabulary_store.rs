//! End-to-end vocabulary storage against an on-disk database.

use limud_core::entities::{VerbStems, WordKind};
use limud_core::enums::Category;
use limud_core::fields::WordFields;
use limud_db::repos::word::WordFilter;
use limud_db::service::LimudService;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fields(hebrew: &str, category: &str, chapter: &str, description: &str) -> WordFields {
    WordFields {
        hebrew: hebrew.into(),
        description: description.into(),
        category: category.into(),
        chapter: chapter.into(),
        ..WordFields::default()
    }
}

async fn seeded(dir: &tempfile::TempDir) -> LimudService {
    let path = dir.path().join("vocabulary.db");
    let svc = LimudService::new_local(path.to_str().unwrap()).await.unwrap();

    let entries = [
        fields("\u{5E1}\u{5D5}\u{5BC}\u{5E1}", "noun", "1", "horse"),
        fields("\u{5E1}\u{5D5}\u{5BC}\u{5E1}\u{5B8}\u{5D4}", "noun", "3", "mare"),
        fields("\u{5D3}\u{5D1}\u{5E8}", "verb", "3", "to speak"),
        fields("\u{5D8}\u{5D5}\u{5B9}\u{5D1}", "adjective", "", "good"),
    ];
    for entry in &entries {
        let entry = limud_core::entities::WordEntry::from_fields(entry).unwrap();
        svc.create_word(&entry).await.unwrap();
    }
    svc.set_favorite(2, true).await.unwrap();
    svc
}

#[rstest]
#[case::all(WordFilter::All, vec![1, 2, 3, 4])]
#[case::favorites(WordFilter::Favorites, vec![2])]
#[case::nouns(WordFilter::Category(Category::Noun), vec![1, 2])]
#[case::adverbs(WordFilter::Category(Category::Adverb), vec![])]
#[case::chapter(WordFilter::Chapter(3), vec![2, 3])]
#[tokio::test]
async fn filters_select_words(#[case] filter: WordFilter, #[case] expected: Vec<i64>) {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded(&dir).await;

    let ids: Vec<i64> = svc
        .list_words(filter)
        .await
        .unwrap()
        .iter()
        .map(|word| word.id)
        .collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn words_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    {
        let svc = seeded(&dir).await;
        svc.delete_word(1).await.unwrap();
    }

    let path = dir.path().join("vocabulary.db");
    let svc = LimudService::new_local(path.to_str().unwrap()).await.unwrap();
    let mare = svc.get_word(2).await.unwrap();
    assert!(mare.entry.favorite);
    assert_eq!(mare.entry.description, "Mare");
    assert_eq!(svc.list_chapters().await.unwrap(), vec![3]);
}

#[tokio::test]
async fn verb_stems_are_rewritten_from_fields() {
    let dir = tempfile::tempdir().unwrap();
    let svc = seeded(&dir).await;

    let mut update = fields("\u{5D3}\u{5D1}\u{5E8}", "verb", "3", "to speak");
    update.piel = "to speak, declare".into();
    svc.apply_word_fields(3, &update).await.unwrap();

    let verb = svc.get_word(3).await.unwrap();
    assert_eq!(
        verb.entry.kind,
        WordKind::Verb(VerbStems {
            piel: Some("To speak, declare".into()),
            ..VerbStems::default()
        })
    );
}
