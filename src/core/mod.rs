//! Core module - the fetch, filter, classify and update stages of a run

mod filter;
mod recency;
mod summary;
mod updater;

pub(crate) use filter::{apply_title_filter, retain_surveys};
pub(crate) use recency::is_recent;
pub(crate) use summary::{ProjectAction, ProjectOutcome, RunStatus, RunSummary};
pub(crate) use updater::apply_updates;
