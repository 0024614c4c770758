//! Domain types used throughout the sync run.
//!
//! This module defines:
//!
//! - the closed category enums (`SizeCategory`, `RiskCategory`)
//! - board item snapshots (`ProjectItem`, `FieldValue`)
//! - remote identifiers resolved at startup (`ProjectIds`)

pub mod types;

pub use types::*;
