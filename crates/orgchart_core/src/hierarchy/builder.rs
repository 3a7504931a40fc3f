//! Org tree derivation.
//!
//! # Responsibility
//! - Convert the flat, validated record list into one rooted tree.
//! - Insert synthetic team nodes where a report's department diverges from
//!   its manager's.
//!
//! # Invariants
//! - Pure derivation: records are never mutated, nodes never cached.
//! - Child order follows department-first-seen order within each parent.
//! - Recursion depth is capped at the record count; exceeding the cap means
//!   the upstream validator/guard let an inconsistent graph through.

use crate::hierarchy::node::HierarchyNode;
use crate::hierarchy::palette::TeamPalette;
use crate::model::person::Person;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Defensive failure raised for record lists the validator should never
/// produce.
#[derive(Debug)]
pub enum HierarchyError {
    /// The manager graph forced recursion past the record count.
    StructuralInconsistency { depth: usize },
}

impl Display for HierarchyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StructuralInconsistency { depth } => write!(
                f,
                "tree derivation exceeded record count at depth {depth}; manager graph is inconsistent"
            ),
        }
    }
}

impl Error for HierarchyError {}

/// Builds the full derived tree for `people`.
///
/// Top-level handling:
/// - no top-level record: the first record acts as root (degenerate input,
///   kept buildable instead of failing);
/// - exactly one: that record is the root;
/// - several: a virtual root adopts them all.
pub fn build_tree(
    people: &[Person],
    palette: &mut TeamPalette,
) -> Result<HierarchyNode, HierarchyError> {
    let top_level: Vec<&Person> = people.iter().filter(|person| person.is_top_level()).collect();
    let depth_limit = people.len();

    if top_level.is_empty() {
        return match people.first() {
            Some(first) => build_subtree(first, people, palette, None, 0, depth_limit),
            None => Ok(HierarchyNode::virtual_root(Vec::new())),
        };
    }

    if top_level.len() == 1 {
        return build_subtree(top_level[0], people, palette, None, 0, depth_limit);
    }

    let mut children = Vec::with_capacity(top_level.len());
    for person in top_level {
        children.push(build_subtree(person, people, palette, None, 0, depth_limit)?);
    }
    Ok(HierarchyNode::virtual_root(children))
}

fn build_subtree(
    person: &Person,
    people: &[Person],
    palette: &mut TeamPalette,
    inherited_team_color: Option<&str>,
    depth: usize,
    depth_limit: usize,
) -> Result<HierarchyNode, HierarchyError> {
    if depth > depth_limit {
        return Err(HierarchyError::StructuralInconsistency { depth });
    }

    let direct_reports = people
        .iter()
        .filter(|candidate| candidate.manager == person.name);

    // Partition by department, preserving first-seen group order.
    let mut groups: Vec<(&str, Vec<&Person>)> = Vec::new();
    for report in direct_reports {
        match groups
            .iter_mut()
            .find(|(department, _)| *department == report.department)
        {
            Some((_, members)) => members.push(report),
            None => groups.push((report.department.as_str(), vec![report])),
        }
    }

    let mut children = Vec::new();
    for (department, members) in groups {
        if department == person.department {
            // Same-department reports are plain peers; the enclosing team
            // context passes through unchanged.
            for member in members {
                children.push(build_subtree(
                    member,
                    people,
                    palette,
                    inherited_team_color,
                    depth + 1,
                    depth_limit,
                )?);
            }
        } else {
            let team_color = palette.color_for(department);
            let mut team_children = Vec::with_capacity(members.len());
            for member in members {
                team_children.push(build_subtree(
                    member,
                    people,
                    palette,
                    Some(team_color.as_str()),
                    depth + 1,
                    depth_limit,
                )?);
            }
            children.push(HierarchyNode::team(department, team_color, team_children));
        }
    }

    Ok(HierarchyNode::person(person, inherited_team_color, children))
}
