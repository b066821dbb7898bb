//! Tests for verb lookup, prefix search and suggestions.

mod common;

use verbiste::catalog::{SEARCH_LIMIT, normalize};
use verbiste::{VerbEntry, VerbSearchIndex};

fn index() -> VerbSearchIndex {
    VerbSearchIndex::from_xml(common::VERBS_XML).unwrap()
}

fn names(entries: &[&VerbEntry]) -> Vec<String> {
    entries.iter().map(|e| e.verb.clone()).collect()
}

// =========================================================================
// Exact Lookup
// =========================================================================

#[test]
fn exact_lookup_by_written_form() {
    let index = index();
    let entry = index.get("être").unwrap();
    assert_eq!(entry.template, ":être");
    assert_eq!(index.get("rendre").unwrap().template, "ren:dre");
}

#[test]
fn exact_lookup_does_not_fold_accents() {
    assert!(index().get("etre").is_none());
    assert!(index().get("Aimer").is_none());
}

#[test]
fn entries_sorted_by_written_form() {
    let index = index();
    let verbs: Vec<&str> = index.verbs().iter().map(|e| e.verb.as_str()).collect();
    let mut sorted = verbs.clone();
    sorted.sort();
    assert_eq!(verbs, sorted);
    assert_eq!(index.len(), 11);
}

// =========================================================================
// Prefix Search
// =========================================================================

#[test]
fn prefix_search_sorted_by_written_form() {
    assert_eq!(names(&index().search("a")), ["aimer", "aller", "avoir"]);
}

#[test]
fn prefix_search_folds_accents() {
    assert_eq!(names(&index().search("e")), ["éclore", "étudier", "être"]);
    assert_eq!(names(&index().search("ét")), ["étudier", "être"]);
}

#[test]
fn prefix_search_folds_case() {
    assert_eq!(names(&index().search("ETRE")), ["être"]);
    assert_eq!(names(&index().search("Hai")), ["haïr"]);
}

#[test]
fn whole_word_matches_itself() {
    assert_eq!(names(&index().search("rendre")), ["rendre"]);
}

#[test]
fn blank_query_matches_nothing() {
    assert!(index().search("").is_empty());
    assert!(index().search("   ").is_empty());
}

#[test]
fn unmatched_prefix_is_empty() {
    assert!(index().search("zz").is_empty());
}

#[test]
fn results_are_capped() {
    let verbs = (0..30)
        .map(|i| VerbEntry {
            id: i,
            verb: format!("verbe{i:02}"),
            template: "aim:er".to_string(),
            aspirate_h: false,
        })
        .collect();
    let index = VerbSearchIndex::new(verbs);
    let results = index.search("verbe");
    assert_eq!(results.len(), SEARCH_LIMIT);
    assert_eq!(results[0].verb, "verbe00");
    assert_eq!(results[SEARCH_LIMIT - 1].verb, "verbe19");
}

#[test]
fn normalize_folds_accents_and_case() {
    assert_eq!(normalize("Être"), "etre");
    assert_eq!(normalize("haïr"), "hair");
    assert_eq!(normalize("aimer"), "aimer");
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn suggests_near_matches() {
    assert_eq!(names(&index().suggest("aimr")), ["aimer"]);
    assert_eq!(names(&index().suggest("finr")), ["finir"]);
}

#[test]
fn suggestions_closest_first() {
    assert_eq!(names(&index().suggest("avir")), ["avoir", "haïr"]);
}

#[test]
fn short_queries_allow_one_edit() {
    assert_eq!(names(&index().suggest("etr")), ["être"]);
    assert!(index().suggest("xyz").is_empty());
}

#[test]
fn blank_query_has_no_suggestions() {
    assert!(index().suggest("").is_empty());
}
