//! Remote platform access
//!
//! `ProjectApi` is the seam between the pipeline and the HTTP client, so
//! the run can be driven against an in-memory platform in tests.

pub(crate) mod client;
pub(crate) mod pages;
pub(crate) mod types;

use crate::error::{FetchError, UpdateError};

pub(crate) use client::KoboClient;
pub(crate) use pages::fetch_all_survey_projects;
pub(crate) use types::{Project, ProjectPage};

/// Position in the asset listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PageCursor {
    /// The first page, requested with the survey type filter
    First,
    /// A `next` link returned by the previous page, followed verbatim
    Next(String),
}

pub(crate) trait ProjectApi {
    /// Fetch one page of survey assets
    fn fetch_page(&self, cursor: &PageCursor) -> Result<ProjectPage, FetchError>;

    /// Replace the display name of one asset
    fn rename_project(&self, uid: &str, new_name: &str) -> Result<(), UpdateError>;
}
