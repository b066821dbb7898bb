use crate::types::Group;

/// Marker of second-group present participles (`finissant`, `choisissant`).
const SECOND_GROUP_MARKER: &str = "ssant";

/// Classifies a verb into a conjugation group.
///
/// `stem_suffix` is the suffix part of the verb's template name and
/// `participle` its rendered present participle. Every verb receives exactly
/// one group, with [`Group::Third`] as the catch-all.
pub fn classify(verb: &str, stem_suffix: &str, participle: &str) -> Group {
    if stem_suffix.ends_with("er") && verb != "aller" {
        Group::First
    } else if stem_suffix.ends_with("ir") && participle.contains(SECOND_GROUP_MARKER) {
        Group::Second
    } else {
        Group::Third
    }
}
