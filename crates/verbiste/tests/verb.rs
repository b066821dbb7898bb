//! Tests for Verb stem extraction, field access and memoization.

mod common;

use serde_json::json;
use verbiste::{DeriveError, Derived, Field, Group, Person, Template, Verb};

use common::{aimer, etre, falloir, finir};

// =========================================================================
// Stem Extraction
// =========================================================================

#[test]
fn stem_strips_template_suffix() {
    let template = aimer();
    let verb = Verb::new("aimer", &template);
    assert_eq!(verb.stem(), "aim");
    assert_eq!(verb.suffix(), "er");
    assert_eq!(template.prefix(), "aim");
}

#[test]
fn stem_is_empty_for_fully_irregular_template() {
    let template = etre();
    let verb = Verb::new("être", &template);
    assert_eq!(verb.suffix(), "être");
    assert_eq!(verb.stem(), "");
    assert_eq!(template.prefix(), "");
}

#[test]
fn template_suffix_applies_to_other_verbs() {
    let template = aimer();
    let verb = Verb::new("chanter", &template);
    assert_eq!(verb.stem(), "chant");
    let present = verb.tense(Field::IndicativePresent).unwrap();
    assert_eq!(present.person(Person::FirstPlural).forms(), ["chantons"]);
}

#[test]
fn stem_only_strips_from_the_end() {
    let template = Template::new("x:er");
    let verb = Verb::new("errer", &template);
    assert_eq!(verb.stem(), "err");
}

#[test]
fn verb_not_ending_with_suffix_keeps_whole_stem() {
    let template = aimer();
    let verb = Verb::new("finir", &template);
    assert_eq!(verb.stem(), "finir");
}

#[test]
fn name_without_colon_is_all_suffix() {
    let template = Template::new("er");
    assert_eq!(template.prefix(), "");
    assert_eq!(template.suffix(), "er");
}

// =========================================================================
// Field Access
// =========================================================================

#[test]
fn person_fields_derive_six_slots() {
    let template = aimer();
    let verb = Verb::new("aimer", &template);
    let future = verb.tense(Field::IndicativeFuture).unwrap();
    assert_eq!(future.person(Person::FirstSingular).forms(), ["aimerai"]);
    assert_eq!(future.person(Person::ThirdPlural).forms(), ["aimeront"]);
}

#[test]
fn single_fields_are_single_values() {
    let template = aimer();
    let verb = Verb::new("aimer", &template);
    assert_eq!(verb.infinitive().unwrap().forms(), ["aimer"]);
    assert_eq!(verb.present_participle().unwrap().forms(), ["aimant"]);
    assert_eq!(verb.participle().unwrap(), "aimé");
    assert!(matches!(
        verb.get(Field::Infinitive).unwrap(),
        Derived::Single(_)
    ));
}

#[test]
fn missing_present_participle_is_empty_not_an_error() {
    let template = falloir();
    let verb = Verb::new("falloir", &template);
    assert!(verb.present_participle().unwrap().is_empty());
    assert_eq!(verb.participle().unwrap(), "fallu");
}

#[test]
fn field_by_dot_path() {
    let template = aimer();
    let verb = Verb::new("aimer", &template);
    let derived = verb.get_path("subjunctive.imperfect").unwrap();
    let field = derived.as_persons().unwrap();
    assert_eq!(field.person(Person::ThirdSingular).forms(), ["aimât"]);
}

#[test]
fn unknown_dot_path_is_missing_field() {
    let template = aimer();
    let verb = Verb::new("aimer", &template);
    let err = verb.get_path("indicative.pluperfect").unwrap_err();
    assert_eq!(
        err,
        DeriveError::MissingField {
            path: "indicative.pluperfect".to_string()
        }
    );
    assert!(err.is_loading());
}

#[test]
fn absent_category_is_missing_field() {
    let template = Template::new("aim:er");
    let verb = Verb::new("aimer", &template);
    let err = verb.tense(Field::ConditionalPresent).unwrap_err();
    assert_eq!(
        err,
        DeriveError::MissingField {
            path: "conditional.present".to_string()
        }
    );
}

#[test]
fn absent_field_in_present_category_is_missing_field() {
    let template: Template = serde_json::from_value(json!({
        "name": "aim:er",
        "indicative": { "present": ["e", "es", "e", "ons", "ez", "ent"] }
    }))
    .unwrap();
    let verb = Verb::new("aimer", &template);
    assert!(verb.tense(Field::IndicativePresent).is_ok());
    let err = verb.tense(Field::IndicativeFuture).unwrap_err();
    assert!(err.is_loading());
}

#[test]
fn non_list_field_is_invalid_shape() {
    let template: Template = serde_json::from_value(json!({
        "name": "aim:er",
        "indicative": { "present": "e" }
    }))
    .unwrap();
    let verb = Verb::new("aimer", &template);
    let err = verb.tense(Field::IndicativePresent).unwrap_err();
    assert_eq!(
        err,
        DeriveError::InvalidTemplateShape {
            path: "indicative.present".to_string(),
            found: "string".to_string(),
        }
    );
    assert!(!err.is_loading());
}

#[test]
fn null_field_is_invalid_shape() {
    let template: Template = serde_json::from_value(json!({
        "name": "aim:er",
        "indicative": { "present": null }
    }))
    .unwrap();
    let verb = Verb::new("aimer", &template);
    let err = verb.tense(Field::IndicativePresent).unwrap_err();
    assert_eq!(
        err,
        DeriveError::InvalidTemplateShape {
            path: "indicative.present".to_string(),
            found: "null".to_string(),
        }
    );
    assert!(!err.is_loading());
    assert!(verb.tense(Field::IndicativeFuture).unwrap_err().is_loading());
}

#[test]
fn null_category_is_invalid_shape() {
    let template: Template = serde_json::from_value(json!({
        "name": "aim:er",
        "indicative": null
    }))
    .unwrap();
    let verb = Verb::new("aimer", &template);
    for field in [Field::IndicativePresent, Field::IndicativeSimplePast] {
        let err = verb.tense(field).unwrap_err();
        assert!(
            matches!(&err, DeriveError::InvalidTemplateShape { found, .. } if found == "null"),
            "{field}: {err:?}"
        );
    }
    assert!(verb.tense(Field::SubjunctivePresent).unwrap_err().is_loading());
}

#[test]
fn list_with_non_string_slot_is_invalid_shape() {
    let template: Template = serde_json::from_value(json!({
        "name": "aim:er",
        "indicative": { "present": ["e", 3] }
    }))
    .unwrap();
    let verb = Verb::new("aimer", &template);
    assert!(matches!(
        verb.tense(Field::IndicativePresent),
        Err(DeriveError::InvalidTemplateShape { .. })
    ));
}

#[test]
fn json_slots_accept_strings_and_variant_lists() {
    let template: Template = serde_json::from_value(json!({
        "name": "pa:yer",
        "indicative": {
            "present": [["ie", "ye"], ["ies", "yes"], ["ie", "ye"], "yons", "yez", ["ient", "yent"]]
        }
    }))
    .unwrap();
    let verb = Verb::new("payer", &template);
    let present = verb.tense(Field::IndicativePresent).unwrap();
    assert_eq!(present.person(Person::FirstSingular).render(), "paie / paye");
    assert_eq!(present.person(Person::ThirdPlural).render(), "paient / payent");
    assert_eq!(present.person(Person::FirstPlural).render(), "payons");
}

// =========================================================================
// Memoization
// =========================================================================

#[test]
fn fields_are_cached_after_first_access() {
    let template = aimer();
    let verb = Verb::new("aimer", &template);
    assert!(!verb.is_cached(Field::IndicativePresent));

    let first = verb.tense(Field::IndicativePresent).unwrap();
    assert!(verb.is_cached(Field::IndicativePresent));
    assert!(!verb.is_cached(Field::IndicativeFuture));

    let second = verb.get_path("indicative.present").unwrap().into_persons();
    assert_eq!(first, second);
}

#[test]
fn failed_lookups_are_not_cached() {
    let template = Template::new("aim:er");
    let verb = Verb::new("aimer", &template);
    assert!(verb.tense(Field::IndicativePresent).is_err());
    assert!(!verb.is_cached(Field::IndicativePresent));
}

#[test]
fn caches_are_per_instance() {
    let template = aimer();
    let first = Verb::new("aimer", &template);
    let second = Verb::new("chanter", &template);
    first.tense(Field::IndicativePresent).unwrap();
    assert!(!second.is_cached(Field::IndicativePresent));
    assert_eq!(
        second
            .tense(Field::IndicativePresent)
            .unwrap()
            .person(Person::FirstSingular)
            .forms(),
        ["chante"]
    );
}

// =========================================================================
// Derived Metadata
// =========================================================================

#[test]
fn max_width_covers_infinitive_and_first_person_future() {
    let template = aimer();
    let verb = Verb::new("aimer", &template);
    // "aimerai" is longer than "aimer".
    assert_eq!(verb.max_width().unwrap(), 7);
}

#[test]
fn max_width_counts_characters_not_bytes() {
    let template = etre();
    let verb = Verb::new("être", &template);
    // "serai" (5) beats "être" (4 characters, 5 bytes).
    assert_eq!(verb.max_width().unwrap(), 5);
}

#[test]
fn group_from_verb() {
    let aimer = aimer();
    let finir = finir();
    let etre = etre();
    assert_eq!(Verb::new("aimer", &aimer).group().unwrap(), Group::First);
    assert_eq!(Verb::new("finir", &finir).group().unwrap(), Group::Second);
    assert_eq!(Verb::new("être", &etre).group().unwrap(), Group::Third);
}
