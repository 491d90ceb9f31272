//! Student record definitions

use std::fmt;

/// Unique integer key of a record
pub type RecordId = i32;

/// A single student record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Display name
    pub name: String,

    /// Unique identifier (roll number)
    pub id: RecordId,

    pub department: String,

    pub section: String,

    /// Grade-point average. Not validated: negative values are accepted.
    pub score: f32,
}

impl Record {
    /// Create a new record
    pub fn new(
        name: impl Into<String>,
        id: RecordId,
        department: impl Into<String>,
        section: impl Into<String>,
        score: f32,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            department: department.into(),
            section: section.into(),
            score,
        }
    }

    /// Overwrite every field except the identifier
    pub fn apply(&mut self, update: RecordUpdate) {
        self.name = update.name;
        self.department = update.department;
        self.section = update.section;
        self.score = update.score;
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Id: {}, Department: {}, Section: {}, Score: {}",
            self.name, self.id, self.department, self.section, self.score
        )
    }
}

/// New values for the mutable fields of a record
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    pub name: String,
    pub department: String,
    pub section: String,
    pub score: f32,
}

impl RecordUpdate {
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        section: impl Into<String>,
        score: f32,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            section: section.into(),
            score,
        }
    }
}
