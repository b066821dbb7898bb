//! French verb conjugation from verbiste suffix templates.
//!
//! A [`Template`] lists per-tense suffixes; a [`Verb`] binds a written
//! infinitive to its template and derives six-person [`DerivedField`]s.
//! [`conjugate`] assembles the full table, including compound tenses built
//! on the auxiliary chosen by [`resolve_auxiliary`].

pub mod catalog;
pub mod engine;
pub mod selection;
pub mod template;
pub mod types;

pub use catalog::{
    CatalogError, Lookup, TemplateCatalog, TemplateSource, VerbEntry, VerbSearchIndex,
};
pub use engine::{
    CompoundTense, ConjugateError, Conjugation, ConjugationRequest, DeriveError, Derived,
    SimpleTense, Verb, classify, composite, compound_field, conjugate, derive,
};
pub use selection::{
    Candidate, MemoryStore, PersistedSelection, QueryStringStore, SelectionController,
    SelectionEvent, SelectionKey, SelectionState, SelectionStore,
};
pub use template::{RawField, Suffix, Template};
pub use types::{DerivedField, Field, FieldShape, Group, PERSON_COUNT, Person, Slot};

// Re-export the auxiliary tables so callers need a single dependency.
pub use verbiste_semantics::{Auxiliary, AuxiliaryClass, resolve_auxiliary};
