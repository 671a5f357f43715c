//! Packed conjugation keys and conjugation label tables.
//!
//! A conjugation cell (tense, person, gender, number) packs into a 9-bit
//! integer used as the form-field name of the conjugation table editor:
//!
//! ```text
//!  8   7 6   5 4   3 2 1 0
//! [n] [g g] [p p] [t t t t]
//! ```
//!
//! The layout is persisted in external forms and must not change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Gender, Number, Person, Tense};
use crate::errors::CoreError;

const TENSE_MASK: u16 = 0b0_0000_1111;
const PERSON_MASK: u16 = 0b0_0011_0000;
const GENDER_MASK: u16 = 0b0_1100_0000;
const NUMBER_MASK: u16 = 0b1_0000_0000;

const PERSON_SHIFT: u16 = 4;
const GENDER_SHIFT: u16 = 6;
const NUMBER_SHIFT: u16 = 8;

/// One cell of a conjugation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct FormKey {
    pub tense: Tense,
    pub person: Person,
    pub gender: Gender,
    pub number: Number,
}

impl FormKey {
    #[must_use]
    pub const fn new(tense: Tense, person: Person, gender: Gender, number: Number) -> Self {
        Self {
            tense,
            person,
            gender,
            number,
        }
    }

    #[must_use]
    pub const fn pack(self) -> u16 {
        pack(self.tense, self.person, self.gender, self.number)
    }
}

/// Pack a conjugation cell into its integer key.
#[must_use]
pub const fn pack(tense: Tense, person: Person, gender: Gender, number: Number) -> u16 {
    tense.bits()
        | (person.bits() << PERSON_SHIFT)
        | (gender.bits() << GENDER_SHIFT)
        | (number.bits() << NUMBER_SHIFT)
}

/// Converse of [`pack`].
///
/// Bits above the layout are ignored. A pattern that names no variant
/// (tense 10..=15, person 3, gender 3) yields `None`; whether a decoded cell
/// is grammatically meaningful is left to the caller.
#[must_use]
pub fn unpack(bits: u16) -> Option<FormKey> {
    Some(FormKey {
        tense: Tense::from_bits(bits & TENSE_MASK)?,
        person: Person::from_bits((bits & PERSON_MASK) >> PERSON_SHIFT)?,
        gender: Gender::from_bits((bits & GENDER_MASK) >> GENDER_SHIFT)?,
        number: Number::from_bits((bits & NUMBER_MASK) >> NUMBER_SHIFT)?,
    })
}

/// Abbreviated English label of a tense.
#[must_use]
pub const fn label_tense(tense: Tense) -> &'static str {
    match tense {
        Tense::Perfect => "Pf.",
        Tense::Imperfect => "Impf.",
        Tense::JussiveCohortative => "Juss. / Cohort.",
        Tense::Imperative => "Impv.",
        Tense::ParticipleActive => "Act. Ptc.",
        Tense::ParticiplePassive => "Pas. Ptc.",
        Tense::InfinitiveAbsolute => "Inf. Abs.",
        Tense::InfinitiveConstruct => "Inf. Cst.",
        Tense::PerfectWawConsecutive => "Waw C. Pf.",
        Tense::ImperfectWawConsecutive => "Waw C. Impf.",
    }
}

/// The ten (person, gender, number) combinations Hebrew inflects for, with
/// their English label and pointed Hebrew pronoun.
const PRONOUNS: [(Person, Gender, Number, &str, &str); 10] = [
    (
        Person::First,
        Gender::Common,
        Number::Singular,
        "I (1cs)",
        "\u{5D0}\u{5B2}\u{5E0}\u{5B4}\u{5D9}",
    ),
    (
        Person::Second,
        Gender::Masculine,
        Number::Singular,
        "you (2ms)",
        "\u{5D0}\u{5B7}\u{5EA}\u{5B8}\u{5BC}\u{5D4}",
    ),
    (
        Person::Second,
        Gender::Feminine,
        Number::Singular,
        "you (2fs)",
        "\u{5D0}\u{5B7}\u{5EA}\u{5B0}\u{5BC}",
    ),
    (
        Person::Third,
        Gender::Masculine,
        Number::Singular,
        "he (3ms)",
        "\u{5D4}\u{5D5}\u{5BC}\u{5D0}",
    ),
    (
        Person::Third,
        Gender::Feminine,
        Number::Singular,
        "she (3fs)",
        "\u{5D4}\u{5B4}\u{5D9}\u{5D0}",
    ),
    (
        Person::First,
        Gender::Common,
        Number::Plural,
        "we (1cp)",
        "\u{5D0}\u{5B2}\u{5E0}\u{5B7}\u{5D7}\u{5B0}\u{5E0}\u{5D5}\u{5BC}",
    ),
    (
        Person::Second,
        Gender::Masculine,
        Number::Plural,
        "you (2mp)",
        "\u{5D0}\u{5B7}\u{5EA}\u{5B6}\u{5BC}\u{5DD}",
    ),
    (
        Person::Second,
        Gender::Feminine,
        Number::Plural,
        "you (2fp)",
        "\u{5D0}\u{5B7}\u{5EA}\u{5B6}\u{5BC}\u{5DF}",
    ),
    (
        Person::Third,
        Gender::Masculine,
        Number::Plural,
        "they (3mp)",
        "\u{5D4}\u{5B5}\u{5DD}",
    ),
    (
        Person::Third,
        Gender::Feminine,
        Number::Plural,
        "they (3fp)",
        "\u{5D4}\u{5B5}\u{5DF}",
    ),
];

fn lookup_pronoun(
    person: Person,
    gender: Gender,
    number: Number,
) -> Result<(&'static str, &'static str), CoreError> {
    PRONOUNS
        .iter()
        .find(|(p, g, n, _, _)| *p == person && *g == gender && *n == number)
        .map(|(_, _, _, english, hebrew)| (*english, *hebrew))
        .ok_or_else(|| CoreError::UnlabeledPronoun {
            person: person.to_string(),
            gender: gender.to_string(),
            number: number.to_string(),
        })
}

/// English pronoun with its person/gender/number abbreviation, e.g. `"you (2fs)"`.
///
/// # Errors
///
/// Returns `CoreError::UnlabeledPronoun` for combinations outside the table
/// (e.g. a masculine first person).
pub fn label_pronouns(
    person: Person,
    gender: Gender,
    number: Number,
) -> Result<&'static str, CoreError> {
    lookup_pronoun(person, gender, number).map(|(english, _)| english)
}

/// Pointed Hebrew pronoun, e.g. `"אַתְּ"`.
///
/// # Errors
///
/// Returns `CoreError::UnlabeledPronoun` for combinations outside the table.
pub fn translate_pronouns(
    person: Person,
    gender: Gender,
    number: Number,
) -> Result<&'static str, CoreError> {
    lookup_pronoun(person, gender, number).map(|(_, hebrew)| hebrew)
}

/// Every cell of a conjugation table, in display order: the eight finite and
/// participial tenses with the ten pronoun combinations, followed by the two
/// infinitives (packed with all-zero person/gender/number bits).
#[must_use]
pub fn table_cells() -> Vec<FormKey> {
    let mut cells = Vec::new();
    for tense in Tense::ALL {
        if tense.is_infinitive() {
            continue;
        }
        for (person, gender, number, _, _) in PRONOUNS {
            cells.push(FormKey::new(tense, person, gender, number));
        }
    }
    for tense in [Tense::InfinitiveAbsolute, Tense::InfinitiveConstruct] {
        cells.push(FormKey::new(
            tense,
            Person::First,
            Gender::Masculine,
            Number::Singular,
        ));
    }
    cells
}
