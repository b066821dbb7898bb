//! Shared auxiliary-verb tables used by both the conjugation engine and the CLI.
//!
//! This crate centralizes which verbs build their compound tenses with
//! "être", "avoir", or either, so that the engine and every consumer agree
//! on the same membership lists.

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::LazyLock;

/// Verbs of motion or change of state that conjugate with "être".
const ETRE_VERBS: &[&str] = &[
    "aller",
    "venir",
    "arriver",
    "partir",
    "entrer",
    "sortir",
    "monter",
    "descendre",
    "naître",
    "mourir",
    "rester",
    "tomber",
    "retourner",
    "passer",
    "devenir",
    "revenir",
    "rentrer",
    "parvenir",
    "survenir",
    "intervenir",
    "advenir",
    "provenir",
    "convenir",
    "subvenir",
    "échoir",
    "éclore",
    "apparaître",
    "disparaître",
    "décéder",
    "ressusciter",
    "expirer",
];

/// Verbs from [`ETRE_VERBS`] that take "avoir" when used transitively.
const AVOIR_VERBS: &[&str] = &[
    "entrer",
    "sortir",
    "monter",
    "descendre",
    "retourner",
    "passer",
    "rentrer",
    "éclore",
    "ressusciter",
    "expirer",
];

/// The "Dr Mrs Vandertramp" mnemonic verbs.
const VANDERTRAMP_VERBS: &[&str] = &[
    "aller",
    "venir",
    "arriver",
    "partir",
    "entrer",
    "sortir",
    "monter",
    "descendre",
    "naître",
    "mourir",
    "rester",
    "tomber",
    "retourner",
    "passer",
    "devenir",
    "revenir",
    "rentrer",
];

static ETRE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ETRE_VERBS.iter().copied().collect());

static AVOIR_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| AVOIR_VERBS.iter().copied().collect());

static VANDERTRAMP_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VANDERTRAMP_VERBS.iter().copied().collect());

/// One of the two auxiliary verbs used to build compound tenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Auxiliary {
    Etre,
    Avoir,
}

impl Auxiliary {
    /// The written infinitive of the auxiliary ("être" or "avoir").
    pub fn infinitive(self) -> &'static str {
        match self {
            Auxiliary::Etre => "être",
            Auxiliary::Avoir => "avoir",
        }
    }

    /// The template id under which the auxiliary's own template is published.
    pub fn template_id(self) -> &'static str {
        match self {
            Auxiliary::Etre => ":être",
            Auxiliary::Avoir => ":avoir",
        }
    }

    /// The ASCII key used when persisting a choice ("etre" or "avoir").
    pub fn as_key(self) -> &'static str {
        match self {
            Auxiliary::Etre => "etre",
            Auxiliary::Avoir => "avoir",
        }
    }
}

impl Display for Auxiliary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.infinitive())
    }
}

/// Error returned when parsing an [`Auxiliary`] from an unknown string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAuxiliary(pub String);

impl Display for UnknownAuxiliary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "unknown auxiliary '{}', expected 'etre' or 'avoir'", self.0)
    }
}

impl Error for UnknownAuxiliary {}

impl FromStr for Auxiliary {
    type Err = UnknownAuxiliary;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "etre" | "être" => Ok(Auxiliary::Etre),
            "avoir" => Ok(Auxiliary::Avoir),
            other => Err(UnknownAuxiliary(other.to_string())),
        }
    }
}

/// Which auxiliaries a verb may use for its compound tenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxiliaryClass {
    Etre,
    Avoir,
    /// Either auxiliary, depending on usage. Requires an explicit choice.
    Both,
}

impl AuxiliaryClass {
    /// Returns true when the caller must surface a choice between the two.
    pub fn is_ambiguous(self) -> bool {
        self == AuxiliaryClass::Both
    }

    /// The auxiliary shown before any explicit choice.
    ///
    /// Être-eligible verbs start on "être", matching their intransitive sense.
    pub fn default_auxiliary(self) -> Auxiliary {
        match self {
            AuxiliaryClass::Etre | AuxiliaryClass::Both => Auxiliary::Etre,
            AuxiliaryClass::Avoir => Auxiliary::Avoir,
        }
    }

    /// Applies an explicit choice, which only matters for [`AuxiliaryClass::Both`].
    pub fn select(self, choice: Option<Auxiliary>) -> Auxiliary {
        match (self, choice) {
            (AuxiliaryClass::Both, Some(chosen)) => chosen,
            _ => self.default_auxiliary(),
        }
    }

    /// The auxiliaries this class allows, in display order.
    pub fn allowed(self) -> &'static [Auxiliary] {
        match self {
            AuxiliaryClass::Etre => &[Auxiliary::Etre],
            AuxiliaryClass::Avoir => &[Auxiliary::Avoir],
            AuxiliaryClass::Both => &[Auxiliary::Etre, Auxiliary::Avoir],
        }
    }
}

impl Display for AuxiliaryClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AuxiliaryClass::Etre => write!(f, "être"),
            AuxiliaryClass::Avoir => write!(f, "avoir"),
            AuxiliaryClass::Both => write!(f, "être / avoir"),
        }
    }
}

/// Resolve which auxiliaries a verb takes from the fixed membership tables.
///
/// Membership is case-sensitive. Verbs not listed as "être" verbs take "avoir".
pub fn resolve_auxiliary(verb: &str) -> AuxiliaryClass {
    match (ETRE_SET.contains(verb), AVOIR_SET.contains(verb)) {
        (true, true) => AuxiliaryClass::Both,
        (true, false) => AuxiliaryClass::Etre,
        (false, _) => AuxiliaryClass::Avoir,
    }
}

/// Returns true if the verb takes "être" in at least one usage.
pub fn is_etre_verb(verb: &str) -> bool {
    ETRE_SET.contains(verb)
}

/// Returns true if the verb is one of the "Dr Mrs Vandertramp" mnemonic verbs.
pub fn is_vandertramp_verb(verb: &str) -> bool {
    VANDERTRAMP_SET.contains(verb)
}

/// All verbs that take "être" in at least one usage, in table order.
pub fn etre_verbs() -> &'static [&'static str] {
    ETRE_VERBS
}

/// All verbs that may switch to "avoir" when transitive, in table order.
pub fn avoir_verbs() -> &'static [&'static str] {
    AVOIR_VERBS
}
