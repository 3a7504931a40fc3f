//! Bulk import normalization.
//!
//! # Responsibility
//! - Map heterogeneous spreadsheet rows onto canonical person records.
//! - Detect a root candidate and flatten stray top-level rows under it.
//!
//! # Invariants
//! - Header keys are matched case-sensitively against trimmed text; the
//!   alias order decides which column wins.
//! - Rows without a resolvable name are skipped, never errored.
//! - With zero root candidates, manager-less rows stay independent; the
//!   root guard later injects the canonical root beside them instead of
//!   subsuming them.

use crate::model::person::Person;
use crate::model::policy::RootPolicy;
use std::collections::HashMap;

/// One raw spreadsheet row: header text mapped to cell text.
pub type ImportRow = HashMap<String, String>;

/// Ordered column-alias lists per canonical field.
///
/// Defaults carry the native-language headers plus their English
/// equivalents; hosts can extend the lists for other locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliases {
    pub name: Vec<String>,
    pub position: Vec<String>,
    pub task: Vec<String>,
    pub department: Vec<String>,
    pub manager: Vec<String>,
}

impl Default for FieldAliases {
    fn default() -> Self {
        let aliases = |labels: &[&str]| -> Vec<String> {
            labels.iter().map(|label| label.to_string()).collect()
        };
        Self {
            name: aliases(&["이름", "Name", "성명", "name"]),
            position: aliases(&["직책", "Position", "직급", "position"]),
            task: aliases(&["업무", "Task", "담당업무", "task"]),
            department: aliases(&["부서", "Department", "팀", "department"]),
            manager: aliases(&["상위자", "Manager", "상사", "manager"]),
        }
    }
}

/// Normalizes raw rows into person records per the import contract.
///
/// The output is unvalidated: the service's batch validation decides whether
/// the whole import commits.
pub fn normalize_rows(
    rows: &[ImportRow],
    aliases: &FieldAliases,
    policy: &RootPolicy,
) -> Vec<Person> {
    let mut people = Vec::with_capacity(rows.len());
    for row in rows {
        let name = resolve_field(row, &aliases.name);
        if name.is_empty() {
            continue;
        }
        people.push(Person::new(
            name,
            resolve_field(row, &aliases.position),
            resolve_field(row, &aliases.task),
            resolve_field(row, &aliases.department),
            resolve_field(row, &aliases.manager),
        ));
    }

    adopt_root_candidate(&mut people, policy);
    people
}

/// Resolves one field by trying aliases in order; first non-empty cell wins.
fn resolve_field(row: &ImportRow, aliases: &[String]) -> String {
    for alias in aliases {
        let cell = row
            .iter()
            .find_map(|(header, value)| (header.trim() == alias.as_str()).then_some(value));
        if let Some(value) = cell {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    String::new()
}

/// Promotes the first root candidate to authoritative top and re-parents the
/// remaining manager-less rows onto it.
fn adopt_root_candidate(people: &mut [Person], policy: &RootPolicy) {
    let candidate_index = people.iter().position(|person| {
        policy.is_root_name(&person.name) || policy.title_is_reserved(&person.position)
    });
    let Some(index) = candidate_index else {
        return;
    };

    let root_name = people[index].name.clone();
    let candidate = &mut people[index];
    candidate.manager.clear();
    if candidate.department.is_empty() {
        candidate.department = policy.department.clone();
    }

    for person in people.iter_mut() {
        if person.name != root_name && person.manager.is_empty() {
            person.manager = root_name.clone();
        }
    }
}
