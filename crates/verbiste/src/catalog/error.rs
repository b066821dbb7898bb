//! Error types for catalog loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading templates or verbs.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O error when reading a data file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The XML is not well-formed.
    #[error("malformed XML at byte {position}: {message}")]
    Xml { position: usize, message: String },

    /// A required attribute is absent.
    #[error("<{element}> at byte {position} has no '{attribute}' attribute")]
    MissingAttribute {
        element: String,
        attribute: String,
        position: usize,
    },

    /// The JSON payload does not describe templates.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Byte offset of the problem in the source document, if known.
    pub fn position(&self) -> Option<usize> {
        match self {
            CatalogError::Xml { position, .. }
            | CatalogError::MissingAttribute { position, .. } => Some(*position),
            CatalogError::Io { .. } | CatalogError::Json(_) => None,
        }
    }
}
