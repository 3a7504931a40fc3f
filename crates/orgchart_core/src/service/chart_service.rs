//! Org-chart mutation service.
//!
//! # Responsibility
//! - Gate every add/edit/delete/import against the roster invariants.
//! - Run the root guard after each mutation so the protected root survives
//!   arbitrary call sequences.
//! - Expose the read surface (list, tree, export rows) for collaborators.
//!
//! # Invariants
//! - Rejected operations leave the roster untouched (accept-or-reject).
//! - Names are unique; manager pointers resolve and stay acyclic.
//! - Exactly one record carries the root name after every operation, and
//!   its fields always equal the policy's canonical values.

use crate::hierarchy::builder::{self, HierarchyError};
use crate::hierarchy::node::HierarchyNode;
use crate::hierarchy::palette::TeamPalette;
use crate::model::person::{Person, PersonDraft, PersonId};
use crate::model::policy::{RootPolicy, DEFAULT_DEPARTMENT, DEFAULT_TASK};
use crate::repo::roster::Roster;
use crate::sample;
use crate::service::import::{normalize_rows, FieldAliases, ImportRow};
use log::{error, info};
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart mutation and derivation operations.
#[derive(Debug)]
pub enum ChartServiceError {
    /// Name is blank after trim.
    EmptyName,
    /// Another record already carries the name.
    DuplicateName(String),
    /// The name is reserved for the protected root.
    ReservedRootName(String),
    /// The title contains a root-designating keyword.
    ReservedRootTitle(String),
    /// Manager does not match any record.
    UnknownManager(String),
    /// A record may not manage itself.
    SelfReference(String),
    /// The proposed manager chain loops back onto the record.
    CycleDetected { name: String, manager: String },
    /// Target record does not exist.
    NotFound(PersonId),
    /// Target record is the protected root.
    ProtectedRecord(PersonId),
    /// Tree derivation hit an inconsistent manager graph.
    Structural(HierarchyError),
}

impl Display for ChartServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be blank"),
            Self::DuplicateName(name) => write!(f, "name already exists: `{name}`"),
            Self::ReservedRootName(name) => {
                write!(f, "name is reserved for the protected root: `{name}`")
            }
            Self::ReservedRootTitle(position) => {
                write!(f, "title designates the protected root: `{position}`")
            }
            Self::UnknownManager(manager) => write!(f, "manager not found: `{manager}`"),
            Self::SelfReference(name) => {
                write!(f, "record may not manage itself: `{name}`")
            }
            Self::CycleDetected { name, manager } => write!(
                f,
                "manager assignment would create a cycle: `{name}` under `{manager}`"
            ),
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::ProtectedRecord(id) => write!(f, "person is protected: {id}"),
            Self::Structural(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ChartServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Structural(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HierarchyError> for ChartServiceError {
    fn from(value: HierarchyError) -> Self {
        Self::Structural(value)
    }
}

/// Result of one delete operation.
#[derive(Debug)]
pub struct DeleteOutcome {
    /// The removed record.
    pub removed: Person,
    /// Direct reports whose manager pointer was cleared.
    pub cleared_reports: usize,
}

/// Spreadsheet-facing row projection with the derived report count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "이름")]
    pub name: String,
    #[serde(rename = "직책")]
    pub position: String,
    #[serde(rename = "업무")]
    pub task: String,
    #[serde(rename = "부서")]
    pub department: String,
    #[serde(rename = "상위자")]
    pub manager: String,
    #[serde(rename = "하위자 수")]
    pub direct_reports: usize,
}

/// Single-writer facade over the roster, root policy and team palette.
///
/// All mutation entry points run to completion on the calling thread; the
/// validator's check-then-commit sequence relies on that exclusivity.
pub struct ChartService {
    roster: Roster,
    policy: RootPolicy,
    palette: TeamPalette,
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new(RootPolicy::default())
    }
}

impl ChartService {
    /// Creates a service whose roster immediately holds the canonical root.
    pub fn new(policy: RootPolicy) -> Self {
        let mut service = Self {
            roster: Roster::new(),
            policy,
            palette: TeamPalette::new(),
        };
        service.guard_root();
        service
    }

    /// Returns the active root policy.
    pub fn policy(&self) -> &RootPolicy {
        &self.policy
    }

    /// Returns all records in insertion order.
    pub fn people(&self) -> &[Person] {
        self.roster.people()
    }

    /// Returns an owned copy of the record list for persistence callers.
    pub fn snapshot(&self) -> Vec<Person> {
        self.roster.people().to_vec()
    }

    /// Returns the records with the protected root sorted first.
    pub fn people_root_first(&self) -> Vec<&Person> {
        let mut items: Vec<&Person> = self.roster.people().iter().collect();
        items.sort_by_key(|person| !self.policy.is_root(person));
        items
    }

    /// Returns whether `person` is the protected root.
    pub fn is_root(&self, person: &Person) -> bool {
        self.policy.is_root(person)
    }

    /// Returns all direct reports of `name`, in roster order.
    pub fn direct_reports(&self, name: &str) -> Vec<&Person> {
        self.roster.direct_reports(name)
    }

    /// Returns whether the record has direct reports. Callers use this to
    /// decide on a delete confirmation before committing.
    pub fn has_direct_reports(&self, id: PersonId) -> Result<bool, ChartServiceError> {
        let person = self
            .roster
            .by_id(id)
            .ok_or(ChartServiceError::NotFound(id))?;
        Ok(!self.roster.direct_reports(&person.name).is_empty())
    }

    /// Adds one person after full validation.
    pub fn add_person(&mut self, draft: PersonDraft) -> Result<Person, ChartServiceError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(ChartServiceError::EmptyName);
        }
        if self.roster.contains_name(&name) {
            return Err(ChartServiceError::DuplicateName(name));
        }
        if self.policy.is_root_name(&name) {
            return Err(ChartServiceError::ReservedRootName(name));
        }
        let position = draft.position.trim().to_string();
        if self.policy.title_is_reserved(&position) {
            return Err(ChartServiceError::ReservedRootTitle(position));
        }
        let manager = draft.manager.trim().to_string();
        if !manager.is_empty() && !self.roster.contains_name(&manager) {
            return Err(ChartServiceError::UnknownManager(manager));
        }

        let task = non_blank_or(draft.task.trim(), DEFAULT_TASK);
        let department = non_blank_or(draft.department.trim(), DEFAULT_DEPARTMENT);
        let person = Person::new(name, position, task, department, manager);
        let created = person.clone();
        self.roster.push(person);
        self.guard_root();
        info!(
            "event=person_added module=chart_service status=ok id={} people={}",
            created.id,
            self.roster.len()
        );
        Ok(created)
    }

    /// Applies a full-field edit after validation, propagating renames to
    /// the manager pointers of direct reports.
    pub fn edit_person(
        &mut self,
        id: PersonId,
        draft: PersonDraft,
    ) -> Result<Person, ChartServiceError> {
        let current = self
            .roster
            .by_id(id)
            .ok_or(ChartServiceError::NotFound(id))?
            .clone();
        if self.policy.is_root(&current) {
            return Err(ChartServiceError::ProtectedRecord(id));
        }

        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(ChartServiceError::EmptyName);
        }
        if name != current.name && self.roster.contains_name(&name) {
            return Err(ChartServiceError::DuplicateName(name));
        }
        let manager = draft.manager.trim().to_string();
        if !manager.is_empty() {
            if !self.roster.contains_name(&manager) {
                return Err(ChartServiceError::UnknownManager(manager));
            }
            if manager == name {
                return Err(ChartServiceError::SelfReference(name));
            }
            if self.creates_cycle(id, &name, &manager) {
                return Err(ChartServiceError::CycleDetected { name, manager });
            }
        }

        if name != current.name {
            let rewritten = self.roster.rewrite_managers(&current.name, &name);
            info!(
                "event=rename_propagated module=chart_service status=ok id={id} reports={rewritten}"
            );
        }

        let record = self
            .roster
            .by_id_mut(id)
            .ok_or(ChartServiceError::NotFound(id))?;
        record.name = name;
        record.position = draft.position.trim().to_string();
        record.task = draft.task.trim().to_string();
        record.department = draft.department.trim().to_string();
        record.manager = manager;
        let updated = record.clone();

        self.guard_root();
        info!("event=person_edited module=chart_service status=ok id={id}");
        Ok(updated)
    }

    /// Deletes one person, detaching direct reports instead of cascading.
    pub fn delete_person(&mut self, id: PersonId) -> Result<DeleteOutcome, ChartServiceError> {
        let target = self
            .roster
            .by_id(id)
            .ok_or(ChartServiceError::NotFound(id))?
            .clone();
        if self.policy.is_root(&target) {
            return Err(ChartServiceError::ProtectedRecord(id));
        }

        let cleared_reports = self.roster.clear_managers_of(&target.name);
        let removed = self
            .roster
            .remove(id)
            .ok_or(ChartServiceError::NotFound(id))?;
        self.guard_root();
        info!(
            "event=person_deleted module=chart_service status=ok id={id} detached={cleared_reports}"
        );
        Ok(DeleteOutcome {
            removed,
            cleared_reports,
        })
    }

    /// Imports spreadsheet rows, replacing the roster wholesale.
    ///
    /// The batch either commits completely or is rejected with the first
    /// violated constraint; the prior roster survives rejection unchanged.
    pub fn import_rows(
        &mut self,
        rows: &[ImportRow],
        aliases: &FieldAliases,
    ) -> Result<Vec<Person>, ChartServiceError> {
        let people = normalize_rows(rows, aliases, &self.policy);
        self.validate_batch(&people)?;

        self.roster.replace_all(people);
        self.palette.reset();
        self.guard_root();
        info!(
            "event=batch_imported module=chart_service status=ok rows={} people={}",
            rows.len(),
            self.roster.len()
        );
        Ok(self.snapshot())
    }

    /// Restores a previously exported record list.
    ///
    /// The restore path repairs the root per the guard but intentionally
    /// performs no field validation; collaborators own snapshot integrity.
    pub fn restore(&mut self, people: Vec<Person>) -> &[Person] {
        self.roster.replace_all(people);
        self.palette.reset();
        self.guard_root();
        info!(
            "event=roster_restored module=chart_service status=ok people={}",
            self.roster.len()
        );
        self.roster.people()
    }

    /// Removes everything except the protected root.
    pub fn clear_all(&mut self) {
        let root_name = self.policy.name.clone();
        self.roster.retain(|person| person.name == root_name);
        self.palette.reset();
        self.guard_root();
        info!(
            "event=roster_cleared module=chart_service status=ok people={}",
            self.roster.len()
        );
    }

    /// Installs the built-in sample organization.
    pub fn load_sample(&mut self) -> &[Person] {
        self.restore(sample::sample_people())
    }

    /// Derives the current org tree.
    pub fn build_tree(&mut self) -> Result<HierarchyNode, ChartServiceError> {
        builder::build_tree(self.roster.people(), &mut self.palette).map_err(|err| {
            // Should be unreachable behind the validator and guard; loud
            // logging here is the alarm for an upstream invariant breach.
            error!("event=tree_build_failed module=chart_service status=error detail={err}");
            ChartServiceError::from(err)
        })
    }

    /// Projects the roster into spreadsheet rows with report counts.
    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.roster
            .people()
            .iter()
            .map(|person| ExportRow {
                name: person.name.clone(),
                position: person.position.clone(),
                task: person.task.clone(),
                department: person.department.clone(),
                manager: person.manager.clone(),
                direct_reports: self.roster.direct_reports(&person.name).len(),
            })
            .collect()
    }

    /// Prepends the canonical root when no record carries the root name.
    /// Idempotent.
    pub fn ensure_root_exists(&mut self) {
        if self.roster.contains_name(&self.policy.name) {
            return;
        }
        self.roster.push_front(self.policy.canonical_root());
        info!("event=root_restored module=chart_service status=ok");
    }

    /// Forces the root-named record's fields back to canonical values,
    /// overwriting whatever a prior operation set.
    pub fn enforce_root_defaults(&mut self) {
        if let Some(root) = self.roster.by_name_mut(&self.policy.name) {
            root.position = self.policy.position.clone();
            root.task = self.policy.task.clone();
            root.department = self.policy.department.clone();
            root.manager.clear();
        }
    }

    fn guard_root(&mut self) {
        self.ensure_root_exists();
        self.enforce_root_defaults();
    }

    /// Walks the proposed manager chain with a visited set.
    ///
    /// A revisit, reaching the proposed name, or reaching the edited record
    /// itself (its pre-rename name may still be on the chain) is a cycle.
    fn creates_cycle(&self, edited: PersonId, proposed_name: &str, proposed_manager: &str) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut cursor = Some(proposed_manager);
        while let Some(current) = cursor {
            if current == proposed_name {
                return true;
            }
            if !visited.insert(current) {
                return true;
            }
            cursor = match self.roster.by_name(current) {
                Some(person) if person.id == edited => return true,
                Some(person) if person.manager.is_empty() => None,
                Some(person) => Some(person.manager.as_str()),
                // Dangling ancestors end the chain, matching the walk over
                // live data rather than failing the edit.
                None => None,
            };
        }
        false
    }

    /// Validates an import batch as one consistent snapshot.
    fn validate_batch(&self, people: &[Person]) -> Result<(), ChartServiceError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for person in people {
            if !seen.insert(person.name.as_str()) {
                return Err(ChartServiceError::DuplicateName(person.name.clone()));
            }
        }

        for person in people {
            if person.manager.is_empty() {
                continue;
            }
            if person.manager == person.name {
                return Err(ChartServiceError::SelfReference(person.name.clone()));
            }
            if !people.iter().any(|other| other.name == person.manager) {
                return Err(ChartServiceError::UnknownManager(person.manager.clone()));
            }
        }

        for person in people {
            let mut visited: HashSet<&str> = HashSet::new();
            let mut cursor = person.manager.as_str();
            while !cursor.is_empty() {
                if cursor == person.name || !visited.insert(cursor) {
                    return Err(ChartServiceError::CycleDetected {
                        name: person.name.clone(),
                        manager: person.manager.clone(),
                    });
                }
                cursor = people
                    .iter()
                    .find(|other| other.name == cursor)
                    .map(|other| other.manager.as_str())
                    .unwrap_or("");
            }
        }

        Ok(())
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
