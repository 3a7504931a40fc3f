//! Derived tree node handed to renderers.
//!
//! # Responsibility
//! - Define the read model produced by the hierarchy builder.
//! - Keep the shape flat and serializable so any renderer can consume it.
//!
//! # Invariants
//! - Nodes are rebuilt from the record list on every read and never mutated
//!   in place; no node identity survives across builds.
//! - Child order is department-first-seen order and therefore deterministic
//!   for a fixed record list.

use crate::model::person::Person;
use serde::Serialize;

/// Kind tag for derived tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// One person record.
    Person,
    /// Synthetic grouping node for a department that differs from the
    /// parent person's department.
    Team,
    /// Synthetic parent injected when several records are top-level.
    VirtualRoot,
}

/// One node of the derived org tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyNode {
    /// Serialized as `type` to match the renderer-facing schema.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Person name, or the department label for team nodes.
    pub name: String,
    pub position: String,
    pub task: String,
    pub department: String,
    /// Stable color handle carried by team nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_color: Option<String>,
    /// Enclosing team's color handle, inherited by person nodes for
    /// downstream shade derivation; not structural.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_team_color: Option<String>,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub(crate) fn person(
        record: &Person,
        parent_team_color: Option<&str>,
        children: Vec<HierarchyNode>,
    ) -> Self {
        Self {
            kind: NodeKind::Person,
            name: record.name.clone(),
            position: record.position.clone(),
            task: record.task.clone(),
            department: record.department.clone(),
            team_color: None,
            parent_team_color: parent_team_color.map(str::to_string),
            children,
        }
    }

    pub(crate) fn team(department: &str, color: String, children: Vec<HierarchyNode>) -> Self {
        Self {
            kind: NodeKind::Team,
            name: department.to_string(),
            position: "팀".to_string(),
            task: String::new(),
            department: department.to_string(),
            team_color: Some(color),
            parent_team_color: None,
            children,
        }
    }

    pub(crate) fn virtual_root(children: Vec<HierarchyNode>) -> Self {
        Self {
            kind: NodeKind::VirtualRoot,
            name: String::new(),
            position: String::new(),
            task: String::new(),
            department: String::new(),
            team_color: None,
            parent_team_color: None,
            children,
        }
    }

    /// Counts person nodes in this subtree, synthetic nodes excluded.
    pub fn person_count(&self) -> usize {
        let own = usize::from(self.kind == NodeKind::Person);
        own + self
            .children
            .iter()
            .map(HierarchyNode::person_count)
            .sum::<usize>()
    }
}
