//! Word-form derivation from a stem and a suffix specification.

use crate::template::Suffix;
use crate::types::{DerivedField, Slot, SlotSequence};

/// Derives one slot: the stem followed by each non-empty suffix variant.
///
/// An empty suffix, or a variant list with only empty strings, yields
/// [`Slot::Empty`] rather than the bare stem.
pub fn derive_slot(stem: &str, suffix: &Suffix) -> Slot {
    Slot::new(
        suffix
            .variants()
            .iter()
            .filter(|variant| !variant.is_empty())
            .map(|variant| format!("{stem}{variant}")),
    )
}

/// Derives every slot of a field, keeping the template's person order.
pub fn derive_sequence(stem: &str, suffixes: &[Suffix]) -> SlotSequence {
    SlotSequence::in_template_order(
        suffixes
            .iter()
            .map(|suffix| derive_slot(stem, suffix))
            .collect(),
    )
}

/// Derives a person-conjugated field in canonical person order.
///
/// The result always has exactly six slots regardless of how many the
/// template supplies.
pub fn derive(stem: &str, suffixes: &[Suffix]) -> DerivedField {
    derive_sequence(stem, suffixes).into()
}

/// Derives a single-value field such as the infinitive from its first slot.
pub fn derive_single(stem: &str, suffixes: &[Suffix]) -> Slot {
    suffixes
        .first()
        .map_or(Slot::Empty, |suffix| derive_slot(stem, suffix))
}
