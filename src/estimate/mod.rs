//! Estimation core: cost table, label normalization, and per-item reconciliation.
//!
//! Everything here is pure so the batch runner can stay a thin loop around it.

pub mod normalize;
pub mod reconcile;
pub mod resolver;
pub mod table;

pub use normalize::{normalize_label, normalize_risk, normalize_size};
pub use reconcile::{
    ESTIMATE_FIELD, ItemError, ItemFailure, RISK_FIELD, ReconciliationOutcome, SIZE_FIELD,
    SkipReason, reconcile,
};
pub use resolver::resolve;
pub use table::{LookupError, estimate_days, lookup};
