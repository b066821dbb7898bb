//! Assembly of a verb's full conjugation table.

use std::collections::BTreeMap;
use std::fmt::Display;

use bon::Builder;
use log::debug;
use serde::{Serialize, Serializer};
use verbiste_semantics::{Auxiliary, AuxiliaryClass, resolve_auxiliary};

use crate::catalog::{Lookup, TemplateSource, VerbEntry};
use crate::engine::composite::compound_field;
use crate::engine::error::{ConjugateError, DeriveError};
use crate::engine::verb::Verb;
use crate::template::Template;
use crate::types::{DerivedField, Field, Group, PERSON_COUNT, Slot};

/// A tense conjugated directly from the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimpleTense {
    SimplePast,
    Imperfect,
    Present,
    Conditional,
    Future,
    SubjunctiveImperfect,
    Subjunctive,
    Imperative,
}

impl SimpleTense {
    pub const ALL: [SimpleTense; 8] = [
        SimpleTense::SimplePast,
        SimpleTense::Imperfect,
        SimpleTense::Present,
        SimpleTense::Conditional,
        SimpleTense::Future,
        SimpleTense::SubjunctiveImperfect,
        SimpleTense::Subjunctive,
        SimpleTense::Imperative,
    ];

    pub fn field(self) -> Field {
        match self {
            SimpleTense::SimplePast => Field::IndicativeSimplePast,
            SimpleTense::Imperfect => Field::IndicativeImperfect,
            SimpleTense::Present => Field::IndicativePresent,
            SimpleTense::Conditional => Field::ConditionalPresent,
            SimpleTense::Future => Field::IndicativeFuture,
            SimpleTense::SubjunctiveImperfect => Field::SubjunctiveImperfect,
            SimpleTense::Subjunctive => Field::SubjunctivePresent,
            SimpleTense::Imperative => Field::ImperativePresent,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SimpleTense::SimplePast => "Passé simple",
            SimpleTense::Imperfect => "Imparfait",
            SimpleTense::Present => "Présent",
            SimpleTense::Conditional => "Conditionnel",
            SimpleTense::Future => "Futur",
            SimpleTense::SubjunctiveImperfect => "Subjonctif imparfait",
            SimpleTense::Subjunctive => "Subjonctif",
            SimpleTense::Imperative => "Impératif",
        }
    }
}

/// A tense built from a conjugated auxiliary and the past participle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompoundTense {
    PasseAnterieur,
    PlusQueParfait,
    PasseCompose,
    ConditionnelPasse,
    FuturAnterieur,
    SubjonctifPlusQueParfait,
    SubjonctifPasse,
}

impl CompoundTense {
    pub const ALL: [CompoundTense; 7] = [
        CompoundTense::PasseAnterieur,
        CompoundTense::PlusQueParfait,
        CompoundTense::PasseCompose,
        CompoundTense::ConditionnelPasse,
        CompoundTense::FuturAnterieur,
        CompoundTense::SubjonctifPlusQueParfait,
        CompoundTense::SubjonctifPasse,
    ];

    /// The simple tense the auxiliary is conjugated in.
    pub fn auxiliary_tense(self) -> SimpleTense {
        match self {
            CompoundTense::PasseAnterieur => SimpleTense::SimplePast,
            CompoundTense::PlusQueParfait => SimpleTense::Imperfect,
            CompoundTense::PasseCompose => SimpleTense::Present,
            CompoundTense::ConditionnelPasse => SimpleTense::Conditional,
            CompoundTense::FuturAnterieur => SimpleTense::Future,
            CompoundTense::SubjonctifPlusQueParfait => SimpleTense::SubjunctiveImperfect,
            CompoundTense::SubjonctifPasse => SimpleTense::Subjunctive,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompoundTense::PasseAnterieur => "Passé antérieur",
            CompoundTense::PlusQueParfait => "Plus-que-parfait",
            CompoundTense::PasseCompose => "Passé composé",
            CompoundTense::ConditionnelPasse => "Conditionnel passé",
            CompoundTense::FuturAnterieur => "Futur antérieur",
            CompoundTense::SubjonctifPlusQueParfait => "Subjonctif plus-que-parfait",
            CompoundTense::SubjonctifPasse => "Subjonctif passé",
        }
    }
}

/// A request to conjugate one verb.
///
/// # Example
///
/// ```
/// use verbiste::ConjugationRequest;
/// use verbiste::Auxiliary;
///
/// let request = ConjugationRequest::builder()
///     .verb("descendre")
///     .template("ten:dre")
///     .auxiliary(Auxiliary::Avoir)
///     .build();
/// assert_eq!(request.verb(), "descendre");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct ConjugationRequest {
    /// Written infinitive of the verb.
    verb: String,
    /// Template id to look up.
    template: String,
    /// Whether the verb starts with an aspirate h.
    #[builder(default)]
    aspirate_h: bool,
    /// Explicit auxiliary choice, honored only for verbs taking either.
    auxiliary: Option<Auxiliary>,
}

impl ConjugationRequest {
    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn aspirate_h(&self) -> bool {
        self.aspirate_h
    }

    pub fn auxiliary(&self) -> Option<Auxiliary> {
        self.auxiliary
    }
}

impl From<&VerbEntry> for ConjugationRequest {
    fn from(entry: &VerbEntry) -> Self {
        ConjugationRequest::builder()
            .verb(entry.verb.as_str())
            .template(entry.template.as_str())
            .aspirate_h(entry.aspirate_h)
            .build()
    }
}

/// A verb's complete conjugation table.
#[derive(Debug, Clone, Serialize)]
pub struct Conjugation {
    pub verb: String,
    pub template: String,
    pub aspirate_h: bool,
    pub group: Group,
    #[serde(serialize_with = "serialize_display")]
    pub auxiliary_class: AuxiliaryClass,
    #[serde(serialize_with = "serialize_display")]
    pub auxiliary: Auxiliary,
    pub infinitive: Slot,
    pub present_participle: Slot,
    pub past_participle: String,
    pub simple: BTreeMap<SimpleTense, DerivedField>,
    pub compound: BTreeMap<CompoundTense, [String; PERSON_COUNT]>,
    pub max_width: usize,
}

impl Conjugation {
    pub fn tense(&self, tense: SimpleTense) -> Option<&DerivedField> {
        self.simple.get(&tense)
    }

    pub fn compound(&self, tense: CompoundTense) -> Option<&[String; PERSON_COUNT]> {
        self.compound.get(&tense)
    }

    /// Returns true if the caller must let the user choose the auxiliary.
    pub fn needs_auxiliary_choice(&self) -> bool {
        self.auxiliary_class.is_ambiguous()
    }
}

fn serialize_display<T: Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn ready<'s, S: TemplateSource + ?Sized>(
    source: &'s S,
    id: &str,
) -> Result<&'s Template, ConjugateError> {
    match source.lookup(id) {
        Lookup::Ready(template) => Ok(template),
        Lookup::Pending => Err(ConjugateError::Pending {
            template: id.to_string(),
        }),
        Lookup::NotFound => Err(ConjugateError::TemplateNotFound {
            template: id.to_string(),
        }),
    }
}

/// Conjugates a verb using templates from `source`.
///
/// The auxiliary is resolved from the fixed membership tables; an explicit
/// choice in the request only applies to verbs that accept both. The
/// auxiliary's own template is looked up like any other verb's.
pub fn conjugate<S: TemplateSource + ?Sized>(
    source: &S,
    request: &ConjugationRequest,
) -> Result<Conjugation, ConjugateError> {
    let template = ready(source, &request.template)?;
    let verb = Verb::new(request.verb.as_str(), template);

    let auxiliary_class = resolve_auxiliary(&request.verb);
    let auxiliary = auxiliary_class.select(request.auxiliary);
    debug!(
        "conjugating '{}' with template '{}' and auxiliary '{}'",
        request.verb, request.template, auxiliary
    );
    let auxiliary_template = ready(source, auxiliary.template_id())?;
    let auxiliary_verb = Verb::new(auxiliary.infinitive(), auxiliary_template);

    let simple = SimpleTense::ALL
        .into_iter()
        .map(|tense| Ok((tense, verb.tense(tense.field())?)))
        .collect::<Result<BTreeMap<_, _>, DeriveError>>()?;

    let present = verb.tense(Field::IndicativePresent)?;
    let participle = verb.participle()?;
    let compound = CompoundTense::ALL
        .into_iter()
        .map(|tense| {
            let auxiliary_field = auxiliary_verb.tense(tense.auxiliary_tense().field())?;
            Ok((tense, compound_field(&auxiliary_field, &participle, &present)))
        })
        .collect::<Result<BTreeMap<_, _>, DeriveError>>()?;

    Ok(Conjugation {
        verb: request.verb.clone(),
        template: request.template.clone(),
        aspirate_h: request.aspirate_h,
        group: verb.group()?,
        auxiliary_class,
        auxiliary,
        infinitive: verb.infinitive()?,
        present_participle: verb.present_participle()?,
        past_participle: participle,
        simple,
        compound,
        max_width: verb.max_width()?,
    })
}
