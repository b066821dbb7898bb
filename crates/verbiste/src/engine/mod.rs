//! Conjugation engine.
//!
//! This module derives word forms from a verb's stem and its template,
//! classifies verbs into conjugation groups, and assembles full conjugation
//! tables including compound tenses built on the resolved auxiliary.

mod composite;
mod conjugation;
mod derive;
mod error;
mod group;
mod verb;

pub use composite::{EMPTY_CELL, VARIANT_SEPARATOR, composite, compound_field};
pub use conjugation::{
    CompoundTense, Conjugation, ConjugationRequest, SimpleTense, conjugate,
};
pub use derive::{derive, derive_sequence, derive_single, derive_slot};
pub use error::{ConjugateError, DeriveError};
pub use group::classify;
pub use verb::{Derived, Verb};
