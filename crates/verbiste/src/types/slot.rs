use std::array;
use std::slice::Iter;

use serde::{Serialize, Serializer};

use super::{PERSON_COUNT, Person};

/// Index at which the template's trailing slot belongs in canonical order.
const THIRD_PLURAL_INDEX: usize = 3;

/// One grammatical-person position of a conjugated tense.
///
/// A slot is either empty (the verb has no form for that person) or holds
/// one or more written forms, in the order the template lists its variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    #[default]
    Empty,
    Forms(Vec<String>),
}

impl Slot {
    /// Builds a slot from written forms, dropping empty strings.
    ///
    /// Returns [`Slot::Empty`] if nothing remains.
    pub fn new(forms: impl IntoIterator<Item = String>) -> Slot {
        let forms: Vec<String> = forms.into_iter().filter(|f| !f.is_empty()).collect();
        if forms.is_empty() {
            Slot::Empty
        } else {
            Slot::Forms(forms)
        }
    }

    /// Returns true if the verb has no form for this slot.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// The written forms in this slot, empty for [`Slot::Empty`].
    pub fn forms(&self) -> &[String] {
        match self {
            Slot::Empty => &[],
            Slot::Forms(forms) => forms,
        }
    }

    /// The first written form, if any.
    pub fn first(&self) -> Option<&str> {
        self.forms().first().map(String::as_str)
    }

    /// Joins all variants with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.forms().join(separator)
    }

    /// Cell text for display: variants separated by `" / "`, or `"-"` when empty.
    pub fn render(&self) -> String {
        if self.is_empty() {
            "-".to_string()
        } else {
            self.join(" / ")
        }
    }
}

impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.forms().serialize(serializer)
    }
}

/// Which person order a [`SlotSequence`] is currently stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonOrder {
    /// Raw upstream order, with the third-person plural stored last.
    Template,
    /// `je, tu, il/elle/on, ils/elles, nous, vous`.
    Canonical,
}

/// An ordered run of slots tagged with the person order it is stored in.
///
/// The tag makes reordering idempotent: converting a sequence that is
/// already canonical leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSequence {
    order: PersonOrder,
    slots: Vec<Slot>,
}

impl SlotSequence {
    /// Wraps slots exactly as the template lists them.
    pub fn in_template_order(slots: Vec<Slot>) -> SlotSequence {
        SlotSequence {
            order: PersonOrder::Template,
            slots,
        }
    }

    pub fn order(&self) -> PersonOrder {
        self.order
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Converts to canonical person order.
    ///
    /// A template-ordered sequence with at least [`PERSON_COUNT`] slots has its
    /// last slot moved to the third-person-plural position. Shorter sequences
    /// keep their order.
    pub fn into_canonical(mut self) -> SlotSequence {
        if self.order == PersonOrder::Canonical {
            return self;
        }
        if self.slots.len() >= PERSON_COUNT {
            let last = self.slots.remove(self.slots.len() - 1);
            self.slots.insert(THIRD_PLURAL_INDEX, last);
        }
        self.order = PersonOrder::Canonical;
        self
    }
}

/// A derived tense: exactly [`PERSON_COUNT`] slots in canonical person order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DerivedField {
    slots: [Slot; PERSON_COUNT],
}

impl DerivedField {
    /// A field with every slot empty.
    pub fn empty() -> DerivedField {
        DerivedField::default()
    }

    pub fn slots(&self) -> &[Slot; PERSON_COUNT] {
        &self.slots
    }

    /// The slot at canonical index `n`, if `n` is in range.
    pub fn get(&self, n: usize) -> Option<&Slot> {
        self.slots.get(n)
    }

    /// The slot for a grammatical person.
    pub fn person(&self, person: Person) -> &Slot {
        &self.slots[person.index()]
    }

    pub fn iter(&self) -> Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Returns true if no person has a form.
    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }
}

impl From<SlotSequence> for DerivedField {
    /// Canonicalizes the sequence, then pads with empty slots or drops
    /// surplus trailing slots so exactly [`PERSON_COUNT`] remain.
    fn from(sequence: SlotSequence) -> DerivedField {
        let mut slots = sequence.into_canonical().slots.into_iter();
        DerivedField {
            slots: array::from_fn(|_| slots.next().unwrap_or_default()),
        }
    }
}

impl<'a> IntoIterator for &'a DerivedField {
    type Item = &'a Slot;
    type IntoIter = Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
