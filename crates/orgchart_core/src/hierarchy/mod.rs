//! Derived org-tree construction.
//!
//! # Responsibility
//! - Turn the flat record list into the renderer-facing tree on demand.
//! - Keep team color-handle assignment stable within a session.
//!
//! # Invariants
//! - Derivation is a pure function of the record list plus palette state;
//!   no derived node outlives one build call.

pub mod builder;
pub mod node;
pub mod palette;
