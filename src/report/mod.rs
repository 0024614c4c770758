//! Run tallies and the log lines describing each outcome.

use tracing::{info, warn};

use crate::domain::ProjectItem;
use crate::estimate::ReconciliationOutcome;

/// Counters for a single batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    /// Items written (or, in a dry run, that would have been).
    pub changed: usize,
    pub errored: usize,
    pub skipped: usize,
    pub unchanged: usize,
}

impl RunSummary {
    /// Count one processed item. `outcome` is the final one, after any write.
    pub fn record(&mut self, outcome: &ReconciliationOutcome) {
        self.total += 1;
        match outcome {
            ReconciliationOutcome::Skipped(_) => self.skipped += 1,
            ReconciliationOutcome::Unchanged(_) => self.unchanged += 1,
            ReconciliationOutcome::Updated { .. } => self.changed += 1,
            ReconciliationOutcome::Failed(_) => self.errored += 1,
        }
    }
}

pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "total={} changed={} errored={} (skipped={} unchanged={})",
        summary.total, summary.changed, summary.errored, summary.skipped, summary.unchanged
    )
}

/// Emit the single log line for an item's outcome.
pub fn log_outcome(item: &ProjectItem, outcome: &ReconciliationOutcome, dry_run: bool) {
    let item_id = item.id.as_str();
    let title = item.display_title();
    match outcome {
        ReconciliationOutcome::Skipped(reason) => {
            info!(item_id, title, %reason, "skipped");
        }
        ReconciliationOutcome::Unchanged(value) => {
            info!(item_id, title, value, "unchanged");
        }
        ReconciliationOutcome::Updated { old, new } => {
            let old = format_old(*old);
            if dry_run {
                info!(item_id, title, %old, new, "would update");
            } else {
                info!(item_id, title, %old, new, "updated");
            }
        }
        ReconciliationOutcome::Failed(failure) => {
            warn!(
                item_id = failure.item_id.as_str(),
                title = failure.title.as_str(),
                error = %failure.error,
                "failed"
            );
        }
    }
}

fn format_old(old: Option<f64>) -> String {
    old.map(|v| v.to_string()).unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::estimate::{ItemError, ItemFailure, LookupError, SkipReason};

    #[test]
    fn record_counts_each_kind() {
        let item = ProjectItem::new("I", None);
        let failure = ItemFailure::new(
            &item,
            ItemError::Lookup(LookupError::InvalidSizeKey {
                key: "Q".into(),
                label: "Q".into(),
            }),
        );

        let mut summary = RunSummary::default();
        summary.record(&ReconciliationOutcome::Skipped(SkipReason::MissingRisk));
        summary.record(&ReconciliationOutcome::Unchanged(1.0));
        summary.record(&ReconciliationOutcome::Updated { old: None, new: 2.0 });
        summary.record(&ReconciliationOutcome::Updated {
            old: Some(1.0),
            new: 2.0,
        });
        summary.record(&ReconciliationOutcome::Failed(failure));

        assert_eq!(
            summary,
            RunSummary {
                total: 5,
                changed: 2,
                errored: 1,
                skipped: 1,
                unchanged: 1,
            }
        );
    }

    #[test]
    fn summary_line() {
        let summary = RunSummary {
            total: 3,
            changed: 1,
            errored: 1,
            skipped: 1,
            unchanged: 0,
        };
        assert_eq!(
            format_summary(&summary),
            "total=3 changed=1 errored=1 (skipped=1 unchanged=0)"
        );
    }

    #[test]
    fn old_value_rendering() {
        assert_eq!(format_old(None), "none");
        assert_eq!(format_old(Some(7.5)), "7.5");
    }
}
