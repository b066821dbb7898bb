use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Serialize, Serializer};

/// The traditional three-way French conjugation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    /// Regular `-er` verbs.
    First,
    /// Regular `-ir` verbs with an `-issant` present participle.
    Second,
    /// Everything else.
    Third,
}

impl Group {
    pub fn number(self) -> u8 {
        match self {
            Group::First => 1,
            Group::Second => 2,
            Group::Third => 3,
        }
    }

    /// French label, e.g. "1er groupe".
    pub fn label(self) -> &'static str {
        match self {
            Group::First => "1er groupe",
            Group::Second => "2e groupe",
            Group::Third => "3e groupe",
        }
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.number())
    }
}

impl Serialize for Group {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}
