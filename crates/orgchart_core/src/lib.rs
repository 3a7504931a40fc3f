//! Core domain logic for the org-chart editor.
//! This crate is the single source of truth for hierarchy invariants.

pub mod hierarchy;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sample;
pub mod service;

pub use hierarchy::builder::{build_tree, HierarchyError};
pub use hierarchy::node::{HierarchyNode, NodeKind};
pub use hierarchy::palette::TeamPalette;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Person, PersonDraft, PersonId};
pub use model::policy::{RootPolicy, DEFAULT_DEPARTMENT, DEFAULT_TASK};
pub use repo::roster::Roster;
pub use sample::sample_people;
pub use service::chart_service::{ChartService, ChartServiceError, DeleteOutcome, ExportRow};
pub use service::import::{normalize_rows, FieldAliases, ImportRow};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
