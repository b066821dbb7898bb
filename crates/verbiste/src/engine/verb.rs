//! A verb instance bound to its template, with per-instance memoization.

use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use crate::engine::DeriveError;
use crate::engine::derive::{derive, derive_single};
use crate::engine::group::classify;
use crate::template::Template;
use crate::types::{DerivedField, Field, FieldShape, Group, Person, Slot, SlotSequence};

/// The derived forms of one template field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derived {
    /// Six person slots in canonical order.
    Persons(DerivedField),
    /// A single value such as the infinitive.
    Single(Slot),
}

impl Derived {
    pub fn as_persons(&self) -> Option<&DerivedField> {
        match self {
            Derived::Persons(field) => Some(field),
            Derived::Single(_) => None,
        }
    }

    pub fn as_single(&self) -> Option<&Slot> {
        match self {
            Derived::Single(slot) => Some(slot),
            Derived::Persons(_) => None,
        }
    }

    /// Views the result as a person field; a single value lands in the first slot.
    pub fn into_persons(self) -> DerivedField {
        match self {
            Derived::Persons(field) => field,
            Derived::Single(slot) => SlotSequence::in_template_order(vec![slot]).into(),
        }
    }
}

/// One lexical verb bound to the template it conjugates with.
///
/// The stem is the verb with the template's suffix removed from the end.
/// Derived fields are computed on first access and cached on this instance,
/// keyed by the field's dot path. Nothing is shared between instances.
///
/// # Example
///
/// ```
/// use verbiste::{Field, Template, Verb};
///
/// let template = Template::new("aim:er")
///     .with(Field::Infinitive, vec!["er".into()]);
/// let verb = Verb::new("aimer", &template);
///
/// assert_eq!(verb.stem(), "aim");
/// assert_eq!(verb.infinitive().unwrap().forms(), ["aimer"]);
/// ```
#[derive(Debug)]
pub struct Verb<'t> {
    name: String,
    template: &'t Template,
    stem: String,
    cache: RefCell<HashMap<&'static str, Derived>>,
}

impl<'t> Verb<'t> {
    /// Binds `name` to `template` and computes its stem.
    ///
    /// If the verb does not end with the template suffix, the whole verb is
    /// used as the stem.
    pub fn new(name: impl Into<String>, template: &'t Template) -> Verb<'t> {
        let name = name.into();
        let suffix = template.suffix();
        let stem = match name.strip_suffix(suffix) {
            Some(stem) => stem.to_string(),
            None => {
                warn!(
                    "verb '{}' does not end with suffix '{}' of template '{}'",
                    name, suffix, template.name
                );
                name.clone()
            }
        };
        Verb {
            name,
            template,
            stem,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> &'t Template {
        self.template
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// The template suffix removed from the verb to form the stem.
    pub fn suffix(&self) -> &str {
        self.template.suffix()
    }

    /// Derives `field`, returning the cached result when available.
    pub fn get(&self, field: Field) -> Result<Derived, DeriveError> {
        let key = field.path();
        if let Some(derived) = self.cache.borrow().get(key) {
            return Ok(derived.clone());
        }

        debug!("deriving '{}' for '{}'", key, self.name);
        let suffixes = self.template.suffixes(field)?;
        let derived = match field.shape() {
            FieldShape::Persons => Derived::Persons(derive(&self.stem, suffixes)),
            FieldShape::Single => Derived::Single(derive_single(&self.stem, suffixes)),
        };
        self.cache.borrow_mut().insert(key, derived.clone());
        Ok(derived)
    }

    /// Derives the field named by a dot path such as `indicative.present`.
    ///
    /// Unknown paths are reported as [`DeriveError::MissingField`].
    pub fn get_path(&self, path: &str) -> Result<Derived, DeriveError> {
        let field = path
            .parse::<Field>()
            .map_err(|_| DeriveError::MissingField {
                path: path.to_string(),
            })?;
        self.get(field)
    }

    /// Returns true if `field` has already been derived on this instance.
    pub fn is_cached(&self, field: Field) -> bool {
        self.cache.borrow().contains_key(field.path())
    }

    /// Derives `field` as six person slots.
    pub fn tense(&self, field: Field) -> Result<DerivedField, DeriveError> {
        self.get(field).map(Derived::into_persons)
    }

    /// Derives `field` as a single value, taking the first slot of person fields.
    pub fn single(&self, field: Field) -> Result<Slot, DeriveError> {
        Ok(match self.get(field)? {
            Derived::Single(slot) => slot,
            Derived::Persons(persons) => persons.person(Person::FirstSingular).clone(),
        })
    }

    pub fn infinitive(&self) -> Result<Slot, DeriveError> {
        self.single(Field::Infinitive)
    }

    pub fn present_participle(&self) -> Result<Slot, DeriveError> {
        self.single(Field::PresentParticiple)
    }

    /// The past participle used in compound tenses (masculine singular).
    ///
    /// Empty if the verb has none.
    pub fn participle(&self) -> Result<String, DeriveError> {
        Ok(self
            .single(Field::PastParticiple)?
            .first()
            .unwrap_or_default()
            .to_string())
    }

    /// Conjugation group, from the template suffix and present participle.
    pub fn group(&self) -> Result<Group, DeriveError> {
        let participle = self.present_participle()?;
        Ok(classify(
            &self.name,
            self.suffix(),
            participle.first().unwrap_or_default(),
        ))
    }

    /// Longest form, in grapheme clusters, among the infinitive and the
    /// first-person future forms. Used to size table columns.
    pub fn max_width(&self) -> Result<usize, DeriveError> {
        let infinitive = self.infinitive()?;
        let future = self.tense(Field::IndicativeFuture)?;
        Ok(infinitive
            .forms()
            .iter()
            .chain(future.person(Person::FirstSingular).forms())
            .map(|form| form.graphemes(true).count())
            .max()
            .unwrap_or(0))
    }
}
