//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical flat record behind every org-chart node.
//! - Keep the record shape directly serializable for persistence callers.
//!
//! # Invariants
//! - `id` is stable and never reused for another person.
//! - `manager` is either empty (top-level) or another person's exact `name`.
//! - Name-based manager references are the join key for rename propagation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every person record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = Uuid;

/// Canonical flat record for one person in the organization.
///
/// The whole org chart is derived from a list of these records; the record
/// itself carries no tree structure beyond the `manager` name pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable global ID used for edit/delete targeting and auditing.
    pub id: PersonId,
    /// Display name, unique across the roster (case-sensitive).
    pub name: String,
    /// Free-text title.
    pub position: String,
    /// Free-text responsibility summary.
    pub task: String,
    /// Free-text grouping label used for team derivation.
    pub department: String,
    /// Empty string for top-level people, otherwise a manager's `name`.
    pub manager: String,
}

impl Person {
    /// Creates a new person with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        task: impl Into<String>,
        department: impl Into<String>,
        manager: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            position: position.into(),
            task: task.into(),
            department: department.into(),
            manager: manager.into(),
        }
    }

    /// Returns whether this person reports to nobody.
    pub fn is_top_level(&self) -> bool {
        self.manager.is_empty()
    }
}

/// Caller-supplied field set for add/edit operations.
///
/// Drafts carry raw user input; trimming and placeholder defaults are the
/// mutation service's job, not the caller's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub position: String,
    pub task: String,
    pub department: String,
    pub manager: String,
}

impl PersonDraft {
    /// Convenience constructor for programmatic callers.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        task: impl Into<String>,
        department: impl Into<String>,
        manager: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            task: task.into(),
            department: department.into(),
            manager: manager.into(),
        }
    }
}
