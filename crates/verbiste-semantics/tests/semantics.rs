use verbiste_semantics::{
    Auxiliary, AuxiliaryClass, avoir_verbs, etre_verbs, is_etre_verb, is_vandertramp_verb,
    resolve_auxiliary,
};

#[test]
fn resolution_matrix() {
    assert_eq!(resolve_auxiliary("aller"), AuxiliaryClass::Etre);
    assert_eq!(resolve_auxiliary("naître"), AuxiliaryClass::Etre);
    assert_eq!(resolve_auxiliary("descendre"), AuxiliaryClass::Both);
    assert_eq!(resolve_auxiliary("passer"), AuxiliaryClass::Both);
    assert_eq!(resolve_auxiliary("aimer"), AuxiliaryClass::Avoir);
    assert_eq!(resolve_auxiliary("avoir"), AuxiliaryClass::Avoir);
    assert_eq!(resolve_auxiliary("être"), AuxiliaryClass::Avoir);
}

#[test]
fn resolution_is_case_sensitive() {
    assert_eq!(resolve_auxiliary("Aller"), AuxiliaryClass::Avoir);
    assert_eq!(resolve_auxiliary("DESCENDRE"), AuxiliaryClass::Avoir);
}

#[test]
fn every_avoir_verb_is_also_an_etre_verb() {
    for verb in avoir_verbs() {
        assert!(is_etre_verb(verb), "{verb} missing from être table");
        assert_eq!(resolve_auxiliary(verb), AuxiliaryClass::Both);
    }
}

#[test]
fn etre_only_verbs_resolve_to_etre() {
    let etre_only: Vec<_> = etre_verbs()
        .iter()
        .filter(|v| !avoir_verbs().contains(*v))
        .collect();
    assert!(!etre_only.is_empty());
    for verb in etre_only {
        assert_eq!(resolve_auxiliary(verb), AuxiliaryClass::Etre);
    }
}

#[test]
fn default_auxiliary_prefers_etre_when_eligible() {
    assert_eq!(AuxiliaryClass::Etre.default_auxiliary(), Auxiliary::Etre);
    assert_eq!(AuxiliaryClass::Both.default_auxiliary(), Auxiliary::Etre);
    assert_eq!(AuxiliaryClass::Avoir.default_auxiliary(), Auxiliary::Avoir);
}

#[test]
fn explicit_choice_only_applies_to_ambiguous_verbs() {
    assert_eq!(
        AuxiliaryClass::Both.select(Some(Auxiliary::Avoir)),
        Auxiliary::Avoir
    );
    assert_eq!(AuxiliaryClass::Both.select(None), Auxiliary::Etre);
    assert_eq!(
        AuxiliaryClass::Etre.select(Some(Auxiliary::Avoir)),
        Auxiliary::Etre
    );
    assert_eq!(
        AuxiliaryClass::Avoir.select(Some(Auxiliary::Etre)),
        Auxiliary::Avoir
    );
    assert!(AuxiliaryClass::Both.is_ambiguous());
    assert!(!AuxiliaryClass::Etre.is_ambiguous());
}

#[test]
fn allowed_auxiliaries_per_class() {
    assert_eq!(AuxiliaryClass::Etre.allowed(), &[Auxiliary::Etre]);
    assert_eq!(
        AuxiliaryClass::Both.allowed(),
        &[Auxiliary::Etre, Auxiliary::Avoir]
    );
}

#[test]
fn auxiliary_keys_round_trip() {
    for aux in [Auxiliary::Etre, Auxiliary::Avoir] {
        assert_eq!(aux.as_key().parse::<Auxiliary>(), Ok(aux));
    }
    assert_eq!("être".parse::<Auxiliary>(), Ok(Auxiliary::Etre));
    assert!("have".parse::<Auxiliary>().is_err());
}

#[test]
fn auxiliary_template_ids() {
    assert_eq!(Auxiliary::Etre.template_id(), ":être");
    assert_eq!(Auxiliary::Avoir.template_id(), ":avoir");
    assert_eq!(Auxiliary::Etre.to_string(), "être");
}

#[test]
fn vandertramp_membership() {
    assert!(is_vandertramp_verb("tomber"));
    assert!(!is_vandertramp_verb("décéder"));
    assert!(!is_vandertramp_verb("aimer"));
}
