//! Domain model for the org-chart core.
//!
//! # Responsibility
//! - Define the canonical flat person record used by all operations.
//! - Define the injectable root-identity policy.
//!
//! # Invariants
//! - Every record is identified by a stable `PersonId`.
//! - Manager references are by `name`, not by id; validation keeps them
//!   resolvable and acyclic.

pub mod person;
pub mod policy;
