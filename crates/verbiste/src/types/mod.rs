mod field;
mod group;
mod person;
mod slot;

pub use field::{Field, FieldShape, UnknownField};
pub use group::Group;
pub use person::{PERSON_COUNT, Person};
pub use slot::{DerivedField, PersonOrder, Slot, SlotSequence};
