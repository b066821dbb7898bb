//! Compound-tense cells: a conjugated auxiliary followed by a past participle.

use std::array;

use crate::types::{DerivedField, PERSON_COUNT, Slot};

/// Separator placed between alternative forms within one cell.
pub const VARIANT_SEPARATOR: &str = " / ";

/// Text of a compound cell that has no valid form.
pub const EMPTY_CELL: &str = "";

/// Builds one compound-tense cell.
///
/// The cell is empty unless the auxiliary has a form at this slot, the main
/// verb has a present-tense form at the same slot, and the participle is
/// non-empty. Auxiliary variants share a single trailing participle.
pub fn composite(auxiliary: &Slot, participle: &str, present: &Slot) -> String {
    if auxiliary.is_empty() || present.is_empty() || participle.is_empty() {
        return EMPTY_CELL.to_string();
    }
    format!("{} {}", auxiliary.join(VARIANT_SEPARATOR), participle)
}

/// Builds all six cells of a compound tense.
pub fn compound_field(
    auxiliary: &DerivedField,
    participle: &str,
    present: &DerivedField,
) -> [String; PERSON_COUNT] {
    let auxiliary = auxiliary.slots();
    let present = present.slots();
    array::from_fn(|n| composite(&auxiliary[n], participle, &present[n]))
}
