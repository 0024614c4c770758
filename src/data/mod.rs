//! Remote project-board access.
//!
//! The batch runner only sees [`ProjectApi`]; `github` is the production
//! implementation over the GitHub GraphQL API.

pub mod github;

pub use github::GithubClient;

use crate::domain::{ProjectIds, ProjectItem};
use crate::error::AppError;

/// Operations the sync needs from the project-management system.
pub trait ProjectApi {
    /// Resolve the project id and the id of the numeric field named `field_name`.
    ///
    /// Fails when the project or the field does not exist.
    fn resolve_ids(
        &self,
        org: &str,
        project_number: u32,
        field_name: &str,
    ) -> Result<ProjectIds, AppError>;

    /// Every item on the board, in listing order. Pagination is handled internally.
    fn list_items(&self, project_id: &str) -> Result<Vec<ProjectItem>, AppError>;

    fn set_number_field(
        &self,
        project_id: &str,
        item_id: &str,
        field_id: &str,
        value: f64,
    ) -> Result<(), AppError>;
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// Drain a cursor-paginated listing, concatenating pages in order.
///
/// `fetch` receives `None` for the first page and the previous `end_cursor` after that.
pub fn fetch_all_pages<T>(
    mut fetch: impl FnMut(Option<&str>) -> Result<Page<T>, AppError>,
) -> Result<Vec<T>, AppError> {
    let mut out = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = fetch(cursor.as_deref())?;
        out.extend(page.items);
        if !page.has_next_page {
            return Ok(out);
        }
        match page.end_cursor {
            Some(next) if cursor.as_deref() != Some(next.as_str()) => cursor = Some(next),
            _ => {
                return Err(AppError::remote(
                    "Listing reported more pages but did not advance the cursor.",
                ));
            }
        }
    }
}
