//! Serde roundtrip and JsonSchema validation tests for all entity types.

use limud_core::conjugation::FormKey;
use limud_core::entities::*;
use limud_core::enums::*;
use limud_core::fields::WordFields;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    noun_roundtrip,
    Word,
    Word {
        id: 1,
        entry: WordEntry {
            hebrew: "\u{5D0}\u{5B8}\u{5D1}".into(),
            description: "Father".into(),
            chapter: Some(2),
            favorite: true,
            kind: WordKind::Noun(NounForms {
                gender: NounGender::Masculine,
                plural_absolute: Some("\u{5D0}\u{5B8}\u{5D1}\u{5D5}\u{5B9}\u{5EA}".into()),
                singular_construct: Some("\u{5D0}\u{5B2}\u{5D1}\u{5B4}\u{5D9}".into()),
                plural_construct: None,
            }),
        },
    }
);

roundtrip_and_validate!(
    verb_roundtrip,
    Word,
    Word {
        id: 2,
        entry: WordEntry {
            hebrew: "\u{5D3}\u{5D1}\u{5E8}".into(),
            description: String::new(),
            chapter: None,
            favorite: false,
            kind: WordKind::Verb(VerbStems {
                piel: Some("To speak".into()),
                ..VerbStems::default()
            }),
        },
    }
);

roundtrip_and_validate!(
    particle_roundtrip,
    Word,
    Word {
        id: 3,
        entry: WordEntry {
            hebrew: "\u{5DC}\u{5B9}\u{5D0}".into(),
            description: "Not".into(),
            chapter: Some(5),
            favorite: false,
            kind: WordKind::Particle,
        },
    }
);

roundtrip_and_validate!(
    conjugated_verb_roundtrip,
    ConjugatedVerb,
    ConjugatedVerb {
        id: 40,
        hebrew: Some("\u{5E7}\u{5B8}\u{5D8}\u{5B7}\u{5DC}".into()),
        slot: ConjugationSlot::inflected(
            Binyan::Qal,
            Tense::Perfect,
            Person::Third,
            Gender::Masculine,
            Number::Singular,
        ),
    }
);

roundtrip_and_validate!(
    conjugated_infinitive_roundtrip,
    ConjugatedVerb,
    ConjugatedVerb {
        id: 41,
        hebrew: None,
        slot: ConjugationSlot::infinitive(Binyan::Hofal, Tense::InfinitiveAbsolute),
    }
);

roundtrip_and_validate!(
    scraped_word_roundtrip,
    ScrapedWord,
    ScrapedWord {
        url: "https://en.wiktionary.org/wiki/%D7%A1%D7%95%D7%A1".into(),
        word: "\u{5E1}\u{5D5}\u{5BC}\u{5E1}".into(),
        category: "noun".into(),
        meanings: vec!["horse".into()],
        examples: vec![],
        binyan: None,
    }
);

roundtrip_and_validate!(
    form_key_roundtrip,
    FormKey,
    FormKey::new(
        Tense::Imperative,
        Person::Second,
        Gender::Feminine,
        Number::Plural
    )
);

roundtrip_and_validate!(
    word_fields_roundtrip,
    WordFields,
    WordFields {
        hebrew: "\u{5D8}\u{5D5}\u{5B9}\u{5D1}".into(),
        category: "adjective".into(),
        adjective_feminine: "\u{5D8}\u{5D5}\u{5B9}\u{5D1}\u{5B8}\u{5D4}".into(),
        ..WordFields::default()
    }
);

#[test]
fn scraped_word_accepts_missing_optional_fields() {
    let parse: ScrapedWord = serde_json::from_str(
        r#"{"url": "https://example.org", "word": "x", "category": "adverb"}"#,
    )
    .unwrap();
    assert!(parse.meanings.is_empty());
    assert_eq!(parse.binyan, None);
}
