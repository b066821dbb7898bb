use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// Number of grammatical-person slots in every conjugated tense.
pub const PERSON_COUNT: usize = 6;

/// A grammatical person, in the canonical display order of a tense.
///
/// The canonical order groups the singular persons with the third-person
/// plural: `je, tu, il/elle/on, ils/elles, nous, vous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    ThirdPlural,
    FirstPlural,
    SecondPlural,
}

impl Person {
    /// All persons in canonical order.
    pub const ALL: [Person; PERSON_COUNT] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::ThirdPlural,
        Person::FirstPlural,
        Person::SecondPlural,
    ];

    /// Position of this person within a canonical slot sequence.
    pub fn index(self) -> usize {
        match self {
            Person::FirstSingular => 0,
            Person::SecondSingular => 1,
            Person::ThirdSingular => 2,
            Person::ThirdPlural => 3,
            Person::FirstPlural => 4,
            Person::SecondPlural => 5,
        }
    }

    /// Subject pronoun(s) shown in front of a row.
    pub fn pronoun(self) -> &'static str {
        match self {
            Person::FirstSingular => "je",
            Person::SecondSingular => "tu",
            Person::ThirdSingular => "il/elle/on",
            Person::ThirdPlural => "ils/elles",
            Person::FirstPlural => "nous",
            Person::SecondPlural => "vous",
        }
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.pronoun())
    }
}
