//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, root guarding and roster writes behind one
//!   mutation surface.
//! - Normalize bulk import input before it reaches that surface.
//!
//! # Invariants
//! - UI/persistence layers stay decoupled from roster internals; every
//!   mutation passes through `ChartService`.

pub mod chart_service;
pub mod import;
