//! Error types for the conjugation engine.

use thiserror::Error;

/// An error that occurred while resolving or deriving a template field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// The field, or one of its parent nodes, is not present (yet).
    ///
    /// Templates may arrive incrementally, so callers should render a
    /// loading state rather than report a failure.
    #[error("template field '{path}' is not available")]
    MissingField { path: String },

    /// The field exists but is not a list of slots.
    #[error("template field '{path}' is malformed: expected a list of slots, found {found}")]
    InvalidTemplateShape { path: String, found: String },
}

impl DeriveError {
    /// Returns true if this error means "data still loading".
    pub fn is_loading(&self) -> bool {
        matches!(self, DeriveError::MissingField { .. })
    }
}

/// An error that occurred while assembling a full conjugation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConjugateError {
    /// The template lookup has not produced this template yet.
    #[error("template '{template}' is still loading")]
    Pending { template: String },

    /// The template lookup has no template with this id.
    #[error("template '{template}' not found")]
    TemplateNotFound { template: String },

    /// A template field could not be derived.
    #[error(transparent)]
    Derive(#[from] DeriveError),
}

impl ConjugateError {
    /// Returns true if the conjugation should be retried once more data arrives.
    pub fn is_loading(&self) -> bool {
        match self {
            ConjugateError::Pending { .. } => true,
            ConjugateError::Derive(e) => e.is_loading(),
            ConjugateError::TemplateNotFound { .. } => false,
        }
    }
}
