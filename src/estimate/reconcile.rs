//! Per-item decision: skip, leave alone, or write a new estimate.

use std::fmt;

use thiserror::Error;

use crate::domain::ProjectItem;
use crate::error::AppError;

use super::resolver::resolve;
use super::table::LookupError;

pub const SIZE_FIELD: &str = "Size";
pub const RISK_FIELD: &str = "Risk";
/// Numeric field kept in sync with the cost table.
pub const ESTIMATE_FIELD: &str = "Estimation Hack";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingSize,
    MissingRisk,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingSize => f.write_str("missing size"),
            SkipReason::MissingRisk => f.write_str("missing risk"),
        }
    }
}

/// Why a single item could not be synced.
#[derive(Debug, Clone, Error)]
pub enum ItemError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("write failed: {0}")]
    Write(AppError),
}

/// A failed item, with enough context to identify it in the log.
#[derive(Debug, Clone)]
pub struct ItemFailure {
    pub item_id: String,
    pub title: String,
    pub error: ItemError,
}

impl ItemFailure {
    pub fn new(item: &ProjectItem, error: ItemError) -> Self {
        Self {
            item_id: item.id.clone(),
            title: item.display_title().to_string(),
            error,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ReconciliationOutcome {
    Skipped(SkipReason),
    /// Stored estimate already matches.
    Unchanged(f64),
    /// The caller must write `new` to the estimate field.
    Updated { old: Option<f64>, new: f64 },
    Failed(ItemFailure),
}

/// Decide what to do with one item. Performs no I/O.
pub fn reconcile(item: &ProjectItem) -> ReconciliationOutcome {
    let Some(size_label) = item.label(SIZE_FIELD) else {
        return ReconciliationOutcome::Skipped(SkipReason::MissingSize);
    };
    let Some(risk_label) = item.label(RISK_FIELD) else {
        return ReconciliationOutcome::Skipped(SkipReason::MissingRisk);
    };

    let estimate = match resolve(size_label, risk_label) {
        Ok(v) => v,
        Err(e) => return ReconciliationOutcome::Failed(ItemFailure::new(item, e.into())),
    };

    let current = item.number(ESTIMATE_FIELD);
    if is_current(current, estimate) {
        ReconciliationOutcome::Unchanged(estimate)
    } else {
        ReconciliationOutcome::Updated {
            old: current,
            new: estimate,
        }
    }
}

/// Exact comparison; an absent value never matches, not even `0.0`.
fn is_current(current: Option<f64>, estimate: f64) -> bool {
    current.is_some_and(|v| v == estimate)
}
