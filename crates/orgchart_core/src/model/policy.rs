//! Root identity policy.
//!
//! # Responsibility
//! - Carry the fixed identity of the protected root record.
//! - Decide which names/titles are reserved for the root.
//!
//! # Invariants
//! - Exactly one record per roster matches `name`; the guard enforces it.
//! - Title keyword matching is a case-insensitive substring check, so false
//!   positives on short keywords are accepted behavior.

use crate::model::person::Person;

/// Placeholder department applied when an added person leaves it blank.
pub const DEFAULT_DEPARTMENT: &str = "일반";

/// Placeholder responsibility applied when an added person leaves it blank.
pub const DEFAULT_TASK: &str = "담당 업무 미정";

/// Fixed identity and reserved-title rules for the protected root record.
///
/// Injectable so hosts can rebrand the root without forking the core; the
/// defaults describe the canonical chief-executive record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPolicy {
    /// The one name that is always present and protected.
    pub name: String,
    /// Canonical title, re-applied after every mutation.
    pub position: String,
    /// Canonical responsibility, re-applied after every mutation.
    pub task: String,
    /// Canonical department, re-applied after every mutation.
    pub department: String,
    /// Titles that designate root candidates (substring, case-insensitive).
    pub title_keywords: Vec<String>,
}

impl Default for RootPolicy {
    fn default() -> Self {
        Self {
            name: "강필구".to_string(),
            position: "대표이사".to_string(),
            task: "경영 총괄".to_string(),
            department: "경영진".to_string(),
            title_keywords: ["대표이사", "대표", "사장", "회장", "CEO"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl RootPolicy {
    /// Returns whether `name` is the protected root name (exact match).
    pub fn is_root_name(&self, name: &str) -> bool {
        name == self.name
    }

    /// Returns whether `person` is the protected root record.
    pub fn is_root(&self, person: &Person) -> bool {
        self.is_root_name(&person.name)
    }

    /// Returns whether `position` contains a root-designating keyword.
    pub fn title_is_reserved(&self, position: &str) -> bool {
        let lowered = position.to_lowercase();
        self.title_keywords
            .iter()
            .any(|keyword| lowered.contains(&keyword.to_lowercase()))
    }

    /// Builds a fresh root record carrying the canonical field values.
    pub fn canonical_root(&self) -> Person {
        Person::new(
            self.name.as_str(),
            self.position.as_str(),
            self.task.as_str(),
            self.department.as_str(),
            "",
        )
    }
}
