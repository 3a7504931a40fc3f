//! Record storage layer.
//!
//! # Responsibility
//! - Hold the flat record list exclusively owned by the core.
//! - Keep lookup and bulk pointer mechanics out of business orchestration.
//!
//! # Invariants
//! - All writes arrive through the service layer's validate-then-commit
//!   path; the store itself never rejects data.

pub mod roster;
