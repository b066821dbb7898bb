//! Template and verb catalogs.
//!
//! The engine only consumes templates through [`TemplateSource`] and search
//! results as ordered [`VerbEntry`] lists. This module provides in-memory
//! implementations loaded from the verbiste XML data files or JSON payloads.

mod error;
mod search;
mod source;
mod xml;

pub use error::CatalogError;
pub use search::{SEARCH_LIMIT, SUGGESTION_LIMIT, VerbEntry, VerbSearchIndex, normalize};
pub use source::{Lookup, TemplateCatalog, TemplateSource};
pub use xml::{parse_templates, parse_verbs};
