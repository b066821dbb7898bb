use std::fs;
use std::path::Path;

use deunicode::deunicode;
use log::debug;
use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::catalog::CatalogError;
use crate::catalog::xml::parse_verbs;

/// Maximum number of entries returned by [`VerbSearchIndex::search`].
pub const SEARCH_LIMIT: usize = 20;

/// Maximum number of entries returned by [`VerbSearchIndex::suggest`].
pub const SUGGESTION_LIMIT: usize = 3;

/// One verb known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbEntry {
    pub id: usize,
    pub verb: String,
    /// Id of the template the verb conjugates with.
    pub template: String,
    /// True if the initial h blocks elision and liaison.
    pub aspirate_h: bool,
}

/// Folds accents and case so that "etre" matches "Être".
pub fn normalize(s: &str) -> String {
    deunicode(s).to_lowercase()
}

#[derive(Debug, Clone)]
struct NormalizedEntry {
    normalized: String,
    index: usize,
}

/// Verb lookup with exact, prefix and fuzzy matching.
///
/// Exact lookup uses the written form. Prefix search and suggestions
/// compare accent- and case-folded forms.
#[derive(Debug, Clone, Default)]
pub struct VerbSearchIndex {
    /// Sorted by written form.
    verbs: Vec<VerbEntry>,
    /// Sorted by normalized form.
    normalized: Vec<NormalizedEntry>,
}

impl VerbSearchIndex {
    pub fn new(mut verbs: Vec<VerbEntry>) -> Self {
        verbs.sort_by(|a, b| a.verb.cmp(&b.verb));

        let mut normalized: Vec<NormalizedEntry> = verbs
            .iter()
            .enumerate()
            .map(|(index, entry)| NormalizedEntry {
                normalized: normalize(&entry.verb),
                index,
            })
            .collect();
        normalized.sort_by(|a, b| a.normalized.cmp(&b.normalized));

        Self { verbs, normalized }
    }

    /// Parses verbiste `verbs-fr.xml` content into an index.
    pub fn from_xml(xml: &str) -> Result<Self, CatalogError> {
        let verbs = parse_verbs(xml)?;
        debug!("loaded {} verbs", verbs.len());
        Ok(VerbSearchIndex::new(verbs))
    }

    /// Reads and parses a verbs file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        VerbSearchIndex::from_xml(&content)
    }

    /// All entries, sorted by written form.
    pub fn verbs(&self) -> &[VerbEntry] {
        &self.verbs
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Exact lookup by written form.
    pub fn get(&self, verb: &str) -> Option<&VerbEntry> {
        self.verbs
            .binary_search_by(|entry| entry.verb.as_str().cmp(verb))
            .ok()
            .map(|index| &self.verbs[index])
    }

    /// Verbs whose normalized form starts with the normalized query.
    ///
    /// Returns at most [`SEARCH_LIMIT`] entries sorted by written form. A
    /// blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&VerbEntry> {
        let query = normalize(query.trim());
        if query.is_empty() {
            return Vec::new();
        }

        let start = self
            .normalized
            .partition_point(|entry| entry.normalized < query);
        let mut results: Vec<&VerbEntry> = self.normalized[start..]
            .iter()
            .take_while(|entry| entry.normalized.starts_with(&query))
            .take(SEARCH_LIMIT)
            .map(|entry| &self.verbs[entry.index])
            .collect();
        results.sort_by(|a, b| a.verb.cmp(&b.verb));
        results
    }

    /// Near matches for a query that found nothing, closest first.
    ///
    /// Allows an edit distance of 1 for queries of up to three characters
    /// and 2 otherwise. Returns at most [`SUGGESTION_LIMIT`] entries.
    pub fn suggest(&self, query: &str) -> Vec<&VerbEntry> {
        let query = normalize(query.trim());
        if query.is_empty() {
            return Vec::new();
        }
        let max_distance = if query.chars().count() <= 3 { 1 } else { 2 };

        let mut scored: Vec<(usize, &VerbEntry)> = self
            .normalized
            .iter()
            .map(|entry| (levenshtein(&query, &entry.normalized), &self.verbs[entry.index]))
            .filter(|(distance, _)| *distance <= max_distance)
            .collect();
        scored.sort_by(|(da, a), (db, b)| da.cmp(db).then_with(|| a.verb.cmp(&b.verb)));
        scored
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .map(|(_, entry)| entry)
            .collect()
    }
}
