//! Template fixtures shared by the integration tests.
//!
//! Person slots are listed in verbiste template order: je, tu, il, nous,
//! vous, ils.

use verbiste::{Field, Suffix, Template, TemplateCatalog};

pub fn slots(suffixes: &[&str]) -> Vec<Suffix> {
    suffixes.iter().map(|s| Suffix::from(*s)).collect()
}

pub fn aimer() -> Template {
    Template::new("aim:er")
        .with(Field::Infinitive, slots(&["er"]))
        .with(Field::IndicativePresent, slots(&["e", "es", "e", "ons", "ez", "ent"]))
        .with(Field::IndicativeImperfect, slots(&["ais", "ais", "ait", "ions", "iez", "aient"]))
        .with(Field::IndicativeFuture, slots(&["erai", "eras", "era", "erons", "erez", "eront"]))
        .with(Field::IndicativeSimplePast, slots(&["ai", "as", "a", "âmes", "âtes", "èrent"]))
        .with(
            Field::ConditionalPresent,
            slots(&["erais", "erais", "erait", "erions", "eriez", "eraient"]),
        )
        .with(Field::SubjunctivePresent, slots(&["e", "es", "e", "ions", "iez", "ent"]))
        .with(
            Field::SubjunctiveImperfect,
            slots(&["asse", "asses", "ât", "assions", "assiez", "assent"]),
        )
        .with(Field::ImperativePresent, slots(&["e", "ons", "ez"]))
        .with(Field::PresentParticiple, slots(&["ant"]))
        .with(Field::PastParticiple, slots(&["é", "és", "ée", "ées"]))
}

pub fn finir() -> Template {
    Template::new("fin:ir")
        .with(Field::Infinitive, slots(&["ir"]))
        .with(Field::IndicativePresent, slots(&["is", "is", "it", "issons", "issez", "issent"]))
        .with(
            Field::IndicativeImperfect,
            slots(&["issais", "issais", "issait", "issions", "issiez", "issaient"]),
        )
        .with(Field::IndicativeFuture, slots(&["irai", "iras", "ira", "irons", "irez", "iront"]))
        .with(Field::IndicativeSimplePast, slots(&["is", "is", "it", "îmes", "îtes", "irent"]))
        .with(
            Field::ConditionalPresent,
            slots(&["irais", "irais", "irait", "irions", "iriez", "iraient"]),
        )
        .with(
            Field::SubjunctivePresent,
            slots(&["isse", "isses", "isse", "issions", "issiez", "issent"]),
        )
        .with(
            Field::SubjunctiveImperfect,
            slots(&["isse", "isses", "ît", "issions", "issiez", "issent"]),
        )
        .with(Field::ImperativePresent, slots(&["is", "issons", "issez"]))
        .with(Field::PresentParticiple, slots(&["issant"]))
        .with(Field::PastParticiple, slots(&["i", "is", "ie", "ies"]))
}

pub fn rendre() -> Template {
    Template::new("ren:dre")
        .with(Field::Infinitive, slots(&["dre"]))
        .with(Field::IndicativePresent, slots(&["ds", "ds", "d", "dons", "dez", "dent"]))
        .with(
            Field::IndicativeImperfect,
            slots(&["dais", "dais", "dait", "dions", "diez", "daient"]),
        )
        .with(Field::IndicativeFuture, slots(&["drai", "dras", "dra", "drons", "drez", "dront"]))
        .with(
            Field::IndicativeSimplePast,
            slots(&["dis", "dis", "dit", "dîmes", "dîtes", "dirent"]),
        )
        .with(
            Field::ConditionalPresent,
            slots(&["drais", "drais", "drait", "drions", "driez", "draient"]),
        )
        .with(Field::SubjunctivePresent, slots(&["de", "des", "de", "dions", "diez", "dent"]))
        .with(
            Field::SubjunctiveImperfect,
            slots(&["disse", "disses", "dît", "dissions", "dissiez", "dissent"]),
        )
        .with(Field::ImperativePresent, slots(&["ds", "dons", "dez"]))
        .with(Field::PresentParticiple, slots(&["dant"]))
        .with(Field::PastParticiple, slots(&["du", "dus", "due", "dues"]))
}

pub fn aller() -> Template {
    Template::new(":aller")
        .with(Field::Infinitive, slots(&["aller"]))
        .with(Field::IndicativePresent, slots(&["vais", "vas", "va", "allons", "allez", "vont"]))
        .with(
            Field::IndicativeImperfect,
            slots(&["allais", "allais", "allait", "allions", "alliez", "allaient"]),
        )
        .with(Field::IndicativeFuture, slots(&["irai", "iras", "ira", "irons", "irez", "iront"]))
        .with(
            Field::IndicativeSimplePast,
            slots(&["allai", "allas", "alla", "allâmes", "allâtes", "allèrent"]),
        )
        .with(
            Field::ConditionalPresent,
            slots(&["irais", "irais", "irait", "irions", "iriez", "iraient"]),
        )
        .with(
            Field::SubjunctivePresent,
            slots(&["aille", "ailles", "aille", "allions", "alliez", "aillent"]),
        )
        .with(
            Field::SubjunctiveImperfect,
            slots(&["allasse", "allasses", "allât", "allassions", "allassiez", "allassent"]),
        )
        .with(Field::ImperativePresent, slots(&["va", "allons", "allez"]))
        .with(Field::PresentParticiple, slots(&["allant"]))
        .with(Field::PastParticiple, slots(&["allé", "allés", "allée", "allées"]))
}

/// Impersonal verb: only the third-person singular has forms.
pub fn falloir() -> Template {
    Template::new("fa:lloir")
        .with(Field::Infinitive, slots(&["lloir"]))
        .with(Field::IndicativePresent, slots(&["", "", "ut", "", "", ""]))
        .with(Field::IndicativeImperfect, slots(&["", "", "llait", "", "", ""]))
        .with(Field::IndicativeFuture, slots(&["", "", "udra", "", "", ""]))
        .with(Field::IndicativeSimplePast, slots(&["", "", "llut", "", "", ""]))
        .with(Field::ConditionalPresent, slots(&["", "", "udrait", "", "", ""]))
        .with(Field::SubjunctivePresent, slots(&["", "", "ille", "", "", ""]))
        .with(Field::SubjunctiveImperfect, slots(&["", "", "llût", "", "", ""]))
        .with(Field::ImperativePresent, slots(&["", "", ""]))
        .with(Field::PresentParticiple, slots(&[""]))
        .with(Field::PastParticiple, slots(&["llu", "", "", ""]))
}

pub fn etre() -> Template {
    Template::new(":être")
        .with(Field::Infinitive, slots(&["être"]))
        .with(Field::IndicativePresent, slots(&["suis", "es", "est", "sommes", "êtes", "sont"]))
        .with(
            Field::IndicativeImperfect,
            slots(&["étais", "étais", "était", "étions", "étiez", "étaient"]),
        )
        .with(
            Field::IndicativeFuture,
            slots(&["serai", "seras", "sera", "serons", "serez", "seront"]),
        )
        .with(
            Field::IndicativeSimplePast,
            slots(&["fus", "fus", "fut", "fûmes", "fûtes", "furent"]),
        )
        .with(
            Field::ConditionalPresent,
            slots(&["serais", "serais", "serait", "serions", "seriez", "seraient"]),
        )
        .with(
            Field::SubjunctivePresent,
            slots(&["sois", "sois", "soit", "soyons", "soyez", "soient"]),
        )
        .with(
            Field::SubjunctiveImperfect,
            slots(&["fusse", "fusses", "fût", "fussions", "fussiez", "fussent"]),
        )
        .with(Field::ImperativePresent, slots(&["sois", "soyons", "soyez"]))
        .with(Field::PresentParticiple, slots(&["étant"]))
        .with(Field::PastParticiple, slots(&["été", "", "", ""]))
}

pub fn avoir() -> Template {
    Template::new(":avoir")
        .with(Field::Infinitive, slots(&["avoir"]))
        .with(Field::IndicativePresent, slots(&["ai", "as", "a", "avons", "avez", "ont"]))
        .with(
            Field::IndicativeImperfect,
            slots(&["avais", "avais", "avait", "avions", "aviez", "avaient"]),
        )
        .with(
            Field::IndicativeFuture,
            slots(&["aurai", "auras", "aura", "aurons", "aurez", "auront"]),
        )
        .with(
            Field::IndicativeSimplePast,
            slots(&["eus", "eus", "eut", "eûmes", "eûtes", "eurent"]),
        )
        .with(
            Field::ConditionalPresent,
            slots(&["aurais", "aurais", "aurait", "aurions", "auriez", "auraient"]),
        )
        .with(Field::SubjunctivePresent, slots(&["aie", "aies", "ait", "ayons", "ayez", "aient"]))
        .with(
            Field::SubjunctiveImperfect,
            slots(&["eusse", "eusses", "eût", "eussions", "eussiez", "eussent"]),
        )
        .with(Field::ImperativePresent, slots(&["aie", "ayons", "ayez"]))
        .with(Field::PresentParticiple, slots(&["ayant"]))
        .with(Field::PastParticiple, slots(&["eu", "eus", "eue", "eues"]))
}

pub fn catalog() -> TemplateCatalog {
    let mut catalog = TemplateCatalog::new();
    for template in [aimer(), finir(), rendre(), aller(), falloir(), etre(), avoir()] {
        catalog.insert(template);
    }
    catalog
}

pub const VERBS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<verbis-fr>
<v><i>aimer</i><t>aim:er</t></v>
<v><i>aller</i><t>:aller</t></v>
<v><i>avoir</i><t>:avoir</t></v>
<v><i>descendre</i><t>ren:dre</t></v>
<v><i>être</i><t>:être</t></v>
<v><i>falloir</i><t>fa:lloir</t></v>
<v><i>finir</i><t>fin:ir</t></v>
<v><i>haïr</i><t>ha:ïr</t><aspirate-h/></v>
<v><i>rendre</i><t>ren:dre</t></v>
<v><i>étudier</i><t>aim:er</t></v>
<v><i>éclore</i><t>clo:re</t></v>
</verbis-fr>
"#;
