//! Named record orders

use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;
use crate::record::Record;

/// Score ascending. NaN scores compare false both ways and keep their place.
pub fn by_score(a: &Record, b: &Record) -> bool {
    a.score < b.score
}

/// Name ascending, byte-wise lexicographic
pub fn by_name(a: &Record, b: &Record) -> bool {
    a.name < b.name
}

/// Identifier ascending
pub fn by_id(a: &Record, b: &Record) -> bool {
    a.id < b.id
}

/// Orders selectable from the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Score,
    Name,
    Identifier,
}

impl SortKey {
    /// The "less-than" predicate for this order
    pub fn less(self) -> fn(&Record, &Record) -> bool {
        match self {
            SortKey::Score => by_score,
            SortKey::Name => by_name,
            SortKey::Identifier => by_id,
        }
    }
}

impl FromStr for SortKey {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "score" | "cgpa" => Ok(SortKey::Score),
            "name" => Ok(SortKey::Name),
            "id" => Ok(SortKey::Identifier),
            other => Err(RosterError::Command(format!(
                "unknown sort key '{}' (expected score, name or id)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Score => "score",
            SortKey::Name => "name",
            SortKey::Identifier => "id",
        };
        f.write_str(name)
    }
}
