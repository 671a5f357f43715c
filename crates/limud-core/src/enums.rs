//! Grammatical enums for vocabulary words and conjugated verbs.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage. The integer values returned by
//! `bits()` on the conjugation enums are part of the packed form-key layout
//! (see [`crate::conjugation`]) and must never change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

fn parse_variant<T: Copy>(
    all: &[T],
    as_str: fn(T) -> &'static str,
    kind: &'static str,
    raw: &str,
) -> Result<T, CoreError> {
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    all.iter()
        .copied()
        .find(|variant| as_str(*variant) == normalized)
        .ok_or_else(|| CoreError::UnknownVariant {
            kind,
            value: raw.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Grammatical category, or class, of a vocabulary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Particle,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Noun,
        Self::Verb,
        Self::Adjective,
        Self::Adverb,
        Self::Particle,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Particle => "particle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "category", s)
    }
}

// ---------------------------------------------------------------------------
// NounGender
// ---------------------------------------------------------------------------

/// Gender of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NounGender {
    Masculine,
    Feminine,
}

/// Qamats followed by he: the regular feminine noun ending.
const QAMATS_HE: &str = "\u{5B8}\u{5D4}";

impl NounGender {
    pub const ALL: [Self; 2] = [Self::Masculine, Self::Feminine];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
        }
    }

    /// One-letter abbreviation shown next to the category tag.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Masculine => 'm',
            Self::Feminine => 'f',
        }
    }

    /// Infer the gender from a qamats-he ending; everything else is masculine.
    ///
    /// Irregular nouns (e.g. the word for "father") must set their gender
    /// explicitly.
    #[must_use]
    pub fn infer_from_word(hebrew: &str) -> Self {
        if hebrew.trim_end().ends_with(QAMATS_HE) {
            Self::Feminine
        } else {
            Self::Masculine
        }
    }
}

impl fmt::Display for NounGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NounGender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "gender", s)
    }
}

// ---------------------------------------------------------------------------
// Binyan
// ---------------------------------------------------------------------------

/// Verb stem. Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Binyan {
    Qal,
    Nifal,
    Piel,
    Pual,
    Hifil,
    Hofal,
    Hitpael,
}

impl Binyan {
    pub const ALL: [Self; 7] = [
        Self::Qal,
        Self::Nifal,
        Self::Piel,
        Self::Pual,
        Self::Hifil,
        Self::Hofal,
        Self::Hitpael,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Qal => "qal",
            Self::Nifal => "nifal",
            Self::Piel => "piel",
            Self::Pual => "pual",
            Self::Hifil => "hifil",
            Self::Hofal => "hofal",
            Self::Hitpael => "hitpael",
        }
    }

    /// Capitalized name, as printed on conjugation flashcards.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Qal => "Qal",
            Self::Nifal => "Nifal",
            Self::Piel => "Piel",
            Self::Pual => "Pual",
            Self::Hifil => "Hifil",
            Self::Hofal => "Hofal",
            Self::Hitpael => "Hitpael",
        }
    }
}

impl fmt::Display for Binyan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Binyan {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "binyan", s)
    }
}

// ---------------------------------------------------------------------------
// Tense
// ---------------------------------------------------------------------------

/// Tense, mood, or aspect of a conjugated verb.
///
/// `JussiveCohortative` covers both moods: the cohortative only exists in the
/// first person and the jussive (almost) only in the second and third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Perfect,
    Imperfect,
    JussiveCohortative,
    Imperative,
    ParticipleActive,
    ParticiplePassive,
    InfinitiveAbsolute,
    InfinitiveConstruct,
    PerfectWawConsecutive,
    ImperfectWawConsecutive,
}

impl Tense {
    pub const ALL: [Self; 10] = [
        Self::Perfect,
        Self::Imperfect,
        Self::JussiveCohortative,
        Self::Imperative,
        Self::ParticipleActive,
        Self::ParticiplePassive,
        Self::InfinitiveAbsolute,
        Self::InfinitiveConstruct,
        Self::PerfectWawConsecutive,
        Self::ImperfectWawConsecutive,
    ];

    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            Self::Perfect => 0,
            Self::Imperfect => 1,
            Self::JussiveCohortative => 2,
            Self::Imperative => 3,
            Self::ParticipleActive => 4,
            Self::ParticiplePassive => 5,
            Self::InfinitiveAbsolute => 6,
            Self::InfinitiveConstruct => 7,
            Self::PerfectWawConsecutive => 8,
            Self::ImperfectWawConsecutive => 9,
        }
    }

    #[must_use]
    pub fn from_bits(bits: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|tense| tense.bits() == bits)
    }

    /// Infinitives carry no person, gender, or number.
    #[must_use]
    pub const fn is_infinitive(self) -> bool {
        matches!(self, Self::InfinitiveAbsolute | Self::InfinitiveConstruct)
    }

    #[must_use]
    pub const fn is_waw_consecutive(self) -> bool {
        matches!(
            self,
            Self::PerfectWawConsecutive | Self::ImperfectWawConsecutive
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Imperfect => "imperfect",
            Self::JussiveCohortative => "jussive_cohortative",
            Self::Imperative => "imperative",
            Self::ParticipleActive => "participle_active",
            Self::ParticiplePassive => "participle_passive",
            Self::InfinitiveAbsolute => "infinitive_absolute",
            Self::InfinitiveConstruct => "infinitive_construct",
            Self::PerfectWawConsecutive => "perfect_waw_consecutive",
            Self::ImperfectWawConsecutive => "imperfect_waw_consecutive",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tense {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(&Self::ALL, Self::as_str, "tense", s)
    }
}

// ---------------------------------------------------------------------------
// Person / Gender / Number
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    #[must_use]
    pub fn from_bits(bits: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|person| person.bits() == bits)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical gender of a conjugated form. `Common` is used by the first
/// person, which does not inflect for gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Common,
}

impl Gender {
    pub const ALL: [Self; 3] = [Self::Masculine, Self::Feminine, Self::Common];

    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            Self::Masculine => 0,
            Self::Feminine => 1,
            Self::Common => 2,
        }
    }

    #[must_use]
    pub fn from_bits(bits: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.bits() == bits)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Common => "common",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Self; 2] = [Self::Singular, Self::Plural];

    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            Self::Singular => 0,
            Self::Plural => 1,
        }
    }

    #[must_use]
    pub fn from_bits(bits: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|number| number.bits() == bits)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Singular => "singular",
            Self::Plural => "plural",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(category_adverb, Category, Category::Adverb, "adverb");
    test_serde_roundtrip!(gender_feminine, NounGender, NounGender::Feminine, "feminine");
    test_serde_roundtrip!(binyan_hitpael, Binyan, Binyan::Hitpael, "hitpael");
    test_serde_roundtrip!(
        tense_imperfect_waw,
        Tense,
        Tense::ImperfectWawConsecutive,
        "imperfect_waw_consecutive"
    );
    test_serde_roundtrip!(person_third, Person, Person::Third, "third");
    test_serde_roundtrip!(conj_gender_common, Gender, Gender::Common, "common");
    test_serde_roundtrip!(number_plural, Number, Number::Plural, "plural");

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Category::Particle), "particle");
        assert_eq!(format!("{}", Binyan::Nifal), "nifal");
        assert_eq!(
            format!("{}", Tense::JussiveCohortative),
            "jussive_cohortative"
        );
        assert_eq!(format!("{}", Gender::Common), "common");
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Noun".parse::<Category>().unwrap(), Category::Noun);
        assert_eq!(" particle ".parse::<Category>().unwrap(), Category::Particle);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "pronoun".parse::<Category>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownVariant {
                kind: "category",
                value: "pronoun".into()
            }
        );
    }

    #[test]
    fn tense_parses_hyphenated_alias() {
        assert_eq!(
            "participle-active".parse::<Tense>().unwrap(),
            Tense::ParticipleActive
        );
    }

    #[test]
    fn bits_are_dense_and_ordered() {
        for (i, tense) in Tense::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(tense.bits()), i);
        }
        assert_eq!(Tense::from_bits(10), None);
        assert_eq!(Person::from_bits(3), None);
        assert_eq!(Gender::from_bits(3), None);
        assert_eq!(Number::from_bits(1), Some(Number::Plural));
    }

    #[test]
    fn infinitives_are_flagged() {
        let infinitives: Vec<Tense> = Tense::ALL
            .into_iter()
            .filter(|t| t.is_infinitive())
            .collect();
        assert_eq!(
            infinitives,
            vec![Tense::InfinitiveAbsolute, Tense::InfinitiveConstruct]
        );
    }

    #[test]
    fn noun_gender_inferred_from_qamats_he() {
        // סוּסָה (mare)
        assert_eq!(
            NounGender::infer_from_word("\u{5E1}\u{5D5}\u{5BC}\u{5E1}\u{5B8}\u{5D4}"),
            NounGender::Feminine
        );
        // סוּס (horse)
        assert_eq!(
            NounGender::infer_from_word("\u{5E1}\u{5D5}\u{5BC}\u{5E1}"),
            NounGender::Masculine
        );
    }
}
