//! Conjugation template tree.
//!
//! A template describes how one family of verbs inflects: a `name` of the
//! form `prefix:suffix` whose suffix is stripped from a verb to obtain its
//! stem, and per-tense lists of suffixes appended to that stem. Categories
//! and fields are optional because templates may arrive incrementally.

use std::slice;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::engine::DeriveError;
use crate::types::Field;

/// A conjugation template as published by the template lookup service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// `prefix:suffix`, e.g. `aim:er` or `:être`.
    #[serde(default)]
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_category"
    )]
    pub infinitive: Option<Infinitive>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_category"
    )]
    pub indicative: Option<Indicative>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_category"
    )]
    pub conditional: Option<Conditional>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_category"
    )]
    pub subjunctive: Option<Subjunctive>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_category"
    )]
    pub imperative: Option<Imperative>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_category"
    )]
    pub participle: Option<Participle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Infinitive {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub infinitive_present: Option<RawField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicative {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub present: Option<RawField>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub imperfect: Option<RawField>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub future: Option<RawField>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub simple_past: Option<RawField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub present: Option<RawField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subjunctive {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub present: Option<RawField>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub imperfect: Option<RawField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Imperative {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub imperative_present: Option<RawField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Participle {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub present_participle: Option<RawField>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present_field")]
    pub past_participle: Option<RawField>,
}

/// The raw suffix specification stored at a template field.
///
/// Well-formed data is a list of slots. Anything else is kept verbatim so
/// that resolving the field reports a shape error instead of guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Slots(Vec<Suffix>),
    Malformed(JsonValue),
}

/// The suffix specification of one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Suffix {
    /// A single suffix. The empty string means the person has no form.
    One(String),
    /// Alternative suffixes, in preference order.
    Variants(Vec<String>),
}

impl Suffix {
    /// All variant strings of this slot, including empty ones.
    pub fn variants(&self) -> &[String] {
        match self {
            Suffix::One(suffix) => slice::from_ref(suffix),
            Suffix::Variants(variants) => variants,
        }
    }
}

impl From<&str> for Suffix {
    fn from(suffix: &str) -> Self {
        Suffix::One(suffix.to_string())
    }
}

impl From<Vec<String>> for Suffix {
    fn from(variants: Vec<String>) -> Self {
        Suffix::Variants(variants)
    }
}

impl Template {
    /// Creates a template with a name and no fields.
    pub fn new(name: impl Into<String>) -> Template {
        Template {
            name: name.into(),
            ..Template::default()
        }
    }

    /// The `prefix` part of `prefix:suffix`.
    pub fn prefix(&self) -> &str {
        self.name.split_once(':').map_or("", |(prefix, _)| prefix)
    }

    /// The `suffix` part of `prefix:suffix`.
    ///
    /// A name without a colon is treated as all suffix.
    pub fn suffix(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(_, suffix)| suffix)
    }

    /// Looks up the raw specification for `field`.
    ///
    /// Returns [`DeriveError::MissingField`] if the category or the field is
    /// absent. A field or category given as `null` is present and malformed.
    pub fn raw(&self, field: Field) -> Result<&RawField, DeriveError> {
        let raw = match field {
            Field::Infinitive => self
                .infinitive
                .as_ref()
                .and_then(|c| c.infinitive_present.as_ref()),
            Field::IndicativePresent => self.indicative.as_ref().and_then(|c| c.present.as_ref()),
            Field::IndicativeImperfect => {
                self.indicative.as_ref().and_then(|c| c.imperfect.as_ref())
            }
            Field::IndicativeFuture => self.indicative.as_ref().and_then(|c| c.future.as_ref()),
            Field::IndicativeSimplePast => {
                self.indicative.as_ref().and_then(|c| c.simple_past.as_ref())
            }
            Field::ConditionalPresent => {
                self.conditional.as_ref().and_then(|c| c.present.as_ref())
            }
            Field::SubjunctivePresent => {
                self.subjunctive.as_ref().and_then(|c| c.present.as_ref())
            }
            Field::SubjunctiveImperfect => {
                self.subjunctive.as_ref().and_then(|c| c.imperfect.as_ref())
            }
            Field::ImperativePresent => self
                .imperative
                .as_ref()
                .and_then(|c| c.imperative_present.as_ref()),
            Field::PresentParticiple => self
                .participle
                .as_ref()
                .and_then(|c| c.present_participle.as_ref()),
            Field::PastParticiple => self
                .participle
                .as_ref()
                .and_then(|c| c.past_participle.as_ref()),
        };
        raw.ok_or_else(|| DeriveError::MissingField {
            path: field.path().to_string(),
        })
    }

    /// Looks up the slot list for `field`.
    ///
    /// Returns [`DeriveError::InvalidTemplateShape`] if the stored value is
    /// not a list of slots.
    pub fn suffixes(&self, field: Field) -> Result<&[Suffix], DeriveError> {
        match self.raw(field)? {
            RawField::Slots(slots) => Ok(slots),
            RawField::Malformed(value) => Err(DeriveError::InvalidTemplateShape {
                path: field.path().to_string(),
                found: json_kind(value).to_string(),
            }),
        }
    }

    /// Stores `raw` at `field`, creating the category if needed.
    pub fn set(&mut self, field: Field, raw: RawField) {
        let slot = match field {
            Field::Infinitive => {
                &mut self
                    .infinitive
                    .get_or_insert_with(Infinitive::default)
                    .infinitive_present
            }
            Field::IndicativePresent => {
                &mut self.indicative.get_or_insert_with(Indicative::default).present
            }
            Field::IndicativeImperfect => {
                &mut self.indicative.get_or_insert_with(Indicative::default).imperfect
            }
            Field::IndicativeFuture => {
                &mut self.indicative.get_or_insert_with(Indicative::default).future
            }
            Field::IndicativeSimplePast => {
                &mut self
                    .indicative
                    .get_or_insert_with(Indicative::default)
                    .simple_past
            }
            Field::ConditionalPresent => {
                &mut self.conditional.get_or_insert_with(Conditional::default).present
            }
            Field::SubjunctivePresent => {
                &mut self.subjunctive.get_or_insert_with(Subjunctive::default).present
            }
            Field::SubjunctiveImperfect => {
                &mut self
                    .subjunctive
                    .get_or_insert_with(Subjunctive::default)
                    .imperfect
            }
            Field::ImperativePresent => {
                &mut self
                    .imperative
                    .get_or_insert_with(Imperative::default)
                    .imperative_present
            }
            Field::PresentParticiple => {
                &mut self
                    .participle
                    .get_or_insert_with(Participle::default)
                    .present_participle
            }
            Field::PastParticiple => {
                &mut self
                    .participle
                    .get_or_insert_with(Participle::default)
                    .past_participle
            }
        };
        *slot = Some(raw);
    }

    /// Builder-style variant of [`Template::set`] taking well-formed slots.
    pub fn with(mut self, field: Field, slots: Vec<Suffix>) -> Template {
        self.set(field, RawField::Slots(slots));
        self
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array with non-string elements",
        JsonValue::Object(_) => "object",
    }
}

/// Keeps an explicit `null` field as a malformed value.
///
/// Only an absent key means the field has not been loaded; `#[serde(default)]`
/// covers that case.
fn present_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<RawField>, D::Error> {
    RawField::deserialize(deserializer).map(Some)
}

/// A `null` category reports every one of its fields as malformed.
fn present_category<'de, D, C>(deserializer: D) -> Result<Option<C>, D::Error>
where
    D: Deserializer<'de>,
    C: Deserialize<'de> + NullCategory,
{
    Ok(Some(Option::<C>::deserialize(deserializer)?.unwrap_or_else(C::null)))
}

trait NullCategory {
    fn null() -> Self;
}

fn null_field() -> Option<RawField> {
    Some(RawField::Malformed(JsonValue::Null))
}

impl NullCategory for Infinitive {
    fn null() -> Self {
        Infinitive {
            infinitive_present: null_field(),
        }
    }
}

impl NullCategory for Indicative {
    fn null() -> Self {
        Indicative {
            present: null_field(),
            imperfect: null_field(),
            future: null_field(),
            simple_past: null_field(),
        }
    }
}

impl NullCategory for Conditional {
    fn null() -> Self {
        Conditional {
            present: null_field(),
        }
    }
}

impl NullCategory for Subjunctive {
    fn null() -> Self {
        Subjunctive {
            present: null_field(),
            imperfect: null_field(),
        }
    }
}

impl NullCategory for Imperative {
    fn null() -> Self {
        Imperative {
            imperative_present: null_field(),
        }
    }
}

impl NullCategory for Participle {
    fn null() -> Self {
        Participle {
            present_participle: null_field(),
            past_participle: null_field(),
        }
    }
}
