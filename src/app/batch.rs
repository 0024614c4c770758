//! One reconciliation pass over every item of a project board.
//!
//! Bootstrap (id resolution, listing) failures abort the run before anything
//! is written. After that, each item is reconciled and written on its own; a
//! failing item is counted and logged, never fatal.

use tracing::info;

use crate::data::ProjectApi;
use crate::domain::{ProjectIds, ProjectItem};
use crate::error::AppError;
use crate::estimate::{ESTIMATE_FIELD, ItemError, ItemFailure, ReconciliationOutcome, reconcile};
use crate::report::{RunSummary, format_summary, log_outcome};

pub struct BatchRunner<'a, A: ProjectApi> {
    api: &'a A,
    org: String,
    project_number: u32,
    dry_run: bool,
}

impl<'a, A: ProjectApi> BatchRunner<'a, A> {
    pub fn new(api: &'a A, org: impl Into<String>, project_number: u32) -> Self {
        Self {
            api,
            org: org.into(),
            project_number,
            dry_run: false,
        }
    }

    /// Reconcile and log, but never write.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn run(&self) -> Result<RunSummary, AppError> {
        let ids = self
            .api
            .resolve_ids(&self.org, self.project_number, ESTIMATE_FIELD)?;
        let items = self.api.list_items(&ids.project_id)?;
        info!(
            org = self.org.as_str(),
            project = self.project_number,
            items = items.len(),
            dry_run = self.dry_run,
            "starting reconciliation"
        );

        let mut summary = RunSummary::default();
        for item in &items {
            let outcome = self.process(&ids, item);
            log_outcome(item, &outcome, self.dry_run);
            summary.record(&outcome);
        }

        info!(
            total = summary.total,
            changed = summary.changed,
            errored = summary.errored,
            "{}",
            format_summary(&summary)
        );
        Ok(summary)
    }

    /// Reconcile one item and apply its write; a failed write becomes `Failed`.
    fn process(&self, ids: &ProjectIds, item: &ProjectItem) -> ReconciliationOutcome {
        let outcome = reconcile(item);
        let ReconciliationOutcome::Updated { new, .. } = outcome else {
            return outcome;
        };
        if self.dry_run {
            return outcome;
        }

        match self
            .api
            .set_number_field(&ids.project_id, &item.id, &ids.field_id, new)
        {
            Ok(()) => outcome,
            Err(e) => ReconciliationOutcome::Failed(ItemFailure::new(item, ItemError::Write(e))),
        }
    }
}
