use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use thiserror::Error;

/// How a field's derived forms are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldShape {
    /// A tense with one slot per grammatical person.
    Persons,
    /// A single value such as the infinitive.
    Single,
}

/// Identifier of a field in a conjugation template.
///
/// Each field corresponds to a dot path into the template tree, e.g.
/// `indicative.present`. The path string is also the memoization key used
/// by [`crate::Verb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Infinitive,
    IndicativePresent,
    IndicativeImperfect,
    IndicativeFuture,
    IndicativeSimplePast,
    ConditionalPresent,
    SubjunctivePresent,
    SubjunctiveImperfect,
    ImperativePresent,
    PresentParticiple,
    PastParticiple,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Infinitive,
        Field::IndicativePresent,
        Field::IndicativeImperfect,
        Field::IndicativeFuture,
        Field::IndicativeSimplePast,
        Field::ConditionalPresent,
        Field::SubjunctivePresent,
        Field::SubjunctiveImperfect,
        Field::ImperativePresent,
        Field::PresentParticiple,
        Field::PastParticiple,
    ];

    /// Dot path of this field in the template tree.
    pub fn path(self) -> &'static str {
        match self {
            Field::Infinitive => "infinitive.infinitive_present",
            Field::IndicativePresent => "indicative.present",
            Field::IndicativeImperfect => "indicative.imperfect",
            Field::IndicativeFuture => "indicative.future",
            Field::IndicativeSimplePast => "indicative.simple_past",
            Field::ConditionalPresent => "conditional.present",
            Field::SubjunctivePresent => "subjunctive.present",
            Field::SubjunctiveImperfect => "subjunctive.imperfect",
            Field::ImperativePresent => "imperative.imperative_present",
            Field::PresentParticiple => "participle.present_participle",
            Field::PastParticiple => "participle.past_participle",
        }
    }

    pub fn shape(self) -> FieldShape {
        match self {
            Field::Infinitive | Field::PresentParticiple | Field::PastParticiple => {
                FieldShape::Single
            }
            _ => FieldShape::Persons,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.path())
    }
}

/// A dot path that names no known template field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown template field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.path() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
