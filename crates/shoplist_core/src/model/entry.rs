//! Entry domain model and view filter.
//!
//! # Responsibility
//! - Define the list entry record shared by store and view layers.
//! - Provide the filter enum and its input-boundary parser.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - New entries start with `completed = false`.
//! - Wire field names are exactly `id`, `title`, `completed`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a list entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// One shopping-list entry.
///
/// Entries are independent records in an append-ordered list; the list
/// itself carries no metadata beyond the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable global ID assigned at creation, immutable thereafter.
    pub id: EntryId,
    /// Display title. Mutable via the edit operation.
    pub title: String,
    /// Completion flag. Mutable via toggle operations.
    pub completed: bool,
}

impl Entry {
    /// Creates a new entry with a generated stable ID.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates an entry with a caller-provided stable ID.
    ///
    /// Used by tests and restore paths where identity already exists.
    pub fn with_id(id: EntryId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Visible-subset selector over the entry list.
///
/// Session-local view state: it defaults to `All` on every load and is
/// never written to the snapshot store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every entry.
    #[default]
    All,
    /// Entries not yet completed.
    Active,
    /// Completed entries only.
    Completed,
}

impl Filter {
    /// Returns whether `entry` belongs to this filter's visible subset.
    pub fn matches(self, entry: &Entry) -> bool {
        match self {
            Self::All => true,
            Self::Active => !entry.completed,
            Self::Completed => entry.completed,
        }
    }

    /// Canonical lowercase name, matching the input-boundary spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized filter names at the input boundary.
///
/// Unrecognized names are rejected here so the in-core visible-set
/// projection stays total over the enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParseError {
    /// The rejected input value.
    pub value: String,
}

impl Display for FilterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported filter `{}`; expected all|active|completed",
            self.value
        )
    }
}

impl Error for FilterParseError {}

impl FromStr for Filter {
    type Err = FilterParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(FilterParseError {
                value: other.to_string(),
            }),
        }
    }
}
