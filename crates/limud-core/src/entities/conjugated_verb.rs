use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::conjugation::FormKey;
use crate::enums::{Binyan, Gender, Number, Person, Tense};
use crate::errors::CoreError;

/// Person, gender, and number of the active participle used as the
/// representative participle of each binyan.
///
/// Grammars usually cite the third person; this keeps the second person
/// masculine singular that existing decks were built with.
pub const REPRESENTATIVE_PARTICIPLE: (Person, Gender, Number) =
    (Person::Second, Gender::Masculine, Number::Singular);

/// The identity of one conjugated form: unique per stored row.
///
/// `person`, `gender`, and `number` are `None` exactly when `tense` is an
/// infinitive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct ConjugationSlot {
    pub binyan: Binyan,
    pub tense: Tense,
    pub person: Option<Person>,
    pub gender: Option<Gender>,
    pub number: Option<Number>,
}

impl ConjugationSlot {
    /// Slot of a finite, participial, or imperative form.
    #[must_use]
    pub const fn inflected(
        binyan: Binyan,
        tense: Tense,
        person: Person,
        gender: Gender,
        number: Number,
    ) -> Self {
        Self {
            binyan,
            tense,
            person: Some(person),
            gender: Some(gender),
            number: Some(number),
        }
    }

    #[must_use]
    pub const fn infinitive(binyan: Binyan, tense: Tense) -> Self {
        Self {
            binyan,
            tense,
            person: None,
            gender: None,
            number: None,
        }
    }

    /// Slot for a decoded table cell. Infinitive cells drop person, gender,
    /// and number.
    #[must_use]
    pub const fn from_key(binyan: Binyan, key: FormKey) -> Self {
        if key.tense.is_infinitive() {
            Self::infinitive(binyan, key.tense)
        } else {
            Self::inflected(binyan, key.tense, key.person, key.gender, key.number)
        }
    }

    /// Person, gender, and number, when all three are present.
    #[must_use]
    pub const fn pronoun(&self) -> Option<(Person, Gender, Number)> {
        match (self.person, self.gender, self.number) {
            (Some(person), Some(gender), Some(number)) => Some((person, gender, number)),
            _ => None,
        }
    }

    /// Table cell of this slot. Infinitives map to all-zero pronoun bits.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidField` when a non-infinitive slot lacks
    /// person, gender, or number.
    pub fn form_key(&self) -> Result<FormKey, CoreError> {
        if self.tense.is_infinitive() {
            return Ok(FormKey::new(
                self.tense,
                Person::First,
                Gender::Masculine,
                Number::Singular,
            ));
        }
        let (person, gender, number) = self.pronoun().ok_or(CoreError::InvalidField {
            field: "person",
            reason: format!("{} form requires person, gender and number", self.tense),
        })?;
        Ok(FormKey::new(self.tense, person, gender, number))
    }

    /// The four forms drilled per binyan in the representative deck: both
    /// infinitives, the 3ms perfect, and the active participle.
    #[must_use]
    pub const fn representative(binyan: Binyan) -> [Self; 4] {
        let (person, gender, number) = REPRESENTATIVE_PARTICIPLE;
        [
            Self::infinitive(binyan, Tense::InfinitiveAbsolute),
            Self::infinitive(binyan, Tense::InfinitiveConstruct),
            Self::inflected(
                binyan,
                Tense::Perfect,
                Person::Third,
                Gender::Masculine,
                Number::Singular,
            ),
            Self::inflected(binyan, Tense::ParticipleActive, person, gender, number),
        ]
    }
}

/// A persisted conjugated form. `hebrew` is absent for combinations that do
/// not occur (e.g. a first person imperative).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConjugatedVerb {
    pub id: i64,
    pub hebrew: Option<String>,
    #[serde(flatten)]
    pub slot: ConjugationSlot,
}
