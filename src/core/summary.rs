//! Counters and status for one run
//!
//! A `RunSummary` is created when the run starts, filled in stage by stage,
//! then written once to the run log and once into the notification.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) enum RunStatus {
    Success,
    PartialFailure,
    FetchFailed,
}

impl RunStatus {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            RunStatus::Success => "Success",
            RunStatus::PartialFailure => "PartialFailure",
            RunStatus::FetchFailed => "FetchFailed",
        }
    }

    /// Process exit code; rename failures are not fatal to the process
    pub(crate) fn exit_code(self) -> u8 {
        match self {
            RunStatus::Success | RunStatus::PartialFailure => 0,
            RunStatus::FetchFailed => 2,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ProjectAction {
    Renamed,
    /// Rename planned but not sent (dry run)
    WouldRename,
    Skipped,
    Failed,
}

/// What happened to one recent project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ProjectOutcome {
    pub(crate) uid: String,
    pub(crate) name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) new_name: Option<String>,
    pub(crate) action: ProjectAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RunSummary {
    pub(crate) run_started: DateTime<Utc>,
    pub(crate) total_fetched: usize,
    pub(crate) filter_applied: bool,
    pub(crate) filtered_out_by_title: usize,
    pub(crate) recent_eligible: usize,
    pub(crate) updated: usize,
    pub(crate) skipped: usize,
    pub(crate) failed: usize,
    pub(crate) status: RunStatus,
    pub(crate) dry_run: bool,
    pub(crate) outcomes: Vec<ProjectOutcome>,
}

impl RunSummary {
    pub(crate) fn start(run_started: DateTime<Utc>, dry_run: bool) -> Self {
        Self {
            run_started,
            total_fetched: 0,
            filter_applied: false,
            filtered_out_by_title: 0,
            recent_eligible: 0,
            updated: 0,
            skipped: 0,
            failed: 0,
            status: RunStatus::Success,
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn record_fetch(&mut self, total_fetched: usize) {
        self.total_fetched = total_fetched;
    }

    pub(crate) fn record_fetch_failure(&mut self) {
        self.status = RunStatus::FetchFailed;
    }

    pub(crate) fn record_title_filter(&mut self, applied: bool, rejected: usize) {
        self.filter_applied = applied;
        self.filtered_out_by_title = rejected;
    }

    pub(crate) fn record_recent(&mut self, recent_eligible: usize) {
        self.recent_eligible = recent_eligible;
    }

    /// Fold per-project outcomes into the counters and settle the status
    pub(crate) fn record_outcomes(&mut self, outcomes: Vec<ProjectOutcome>) {
        for outcome in &outcomes {
            match outcome.action {
                ProjectAction::Renamed | ProjectAction::WouldRename => self.updated += 1,
                ProjectAction::Skipped => self.skipped += 1,
                ProjectAction::Failed => self.failed += 1,
            }
        }
        debug_assert_eq!(self.updated + self.skipped + self.failed, self.recent_eligible);

        if self.failed > 0 {
            self.status = RunStatus::PartialFailure;
        }
        self.outcomes = outcomes;
    }

    pub(crate) fn failures(&self) -> impl Iterator<Item = &ProjectOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.action == ProjectAction::Failed)
    }

    pub(crate) fn exit_code(&self) -> u8 {
        self.status.exit_code()
    }
}
