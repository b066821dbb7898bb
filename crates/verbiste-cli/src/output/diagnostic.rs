//! Miette diagnostic wrapper for malformed data files.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use verbiste::CatalogError;

/// A miette-compatible diagnostic pointing into a template or verb file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("malformed data file: {message}")]
#[diagnostic(code(verbiste::data))]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CatalogDiagnostic {
    /// Create a diagnostic from a catalog error with source context.
    pub fn from_catalog_error(path: &Path, content: &str, err: &CatalogError) -> Self {
        let offset = match err {
            CatalogError::Json(e) => line_column_offset(content, e.line(), e.column()),
            other => other.position().unwrap_or(0),
        };

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        let help = match err {
            CatalogError::MissingAttribute { attribute, .. } => {
                Some(format!("add a '{attribute}' attribute"))
            }
            CatalogError::Json(_) => {
                Some("expected an object mapping template ids to templates".to_string())
            }
            CatalogError::Io { .. } | CatalogError::Xml { .. } => None,
        };

        CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help,
        }
    }
}

/// Convert a 1-based line:column to a byte offset.
fn line_column_offset(content: &str, line: usize, column: usize) -> usize {
    content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1)
}
