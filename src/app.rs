//! One run of the pipeline: fetch, filter, classify, update, then record
//! the summary in the run log and send it out.

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::core::{RunSummary, apply_title_filter, apply_updates, is_recent};
use crate::kobo::{ProjectApi, fetch_all_survey_projects};
use crate::notify::{Notification, Notifier};
use crate::output::append_run_log;

/// Execute a full run against `api`.
///
/// `now` is the single reference instant for the recency window. A fetch
/// failure ends the run early with `FetchFailed`; rename failures only
/// degrade it to `PartialFailure`. The returned summary has already been
/// logged and sent.
pub(crate) fn run(
    settings: &Settings,
    api: &dyn ProjectApi,
    notifier: Option<&dyn Notifier>,
    now: DateTime<Utc>,
) -> RunSummary {
    let mut summary = RunSummary::start(now, settings.dry_run);

    let projects = match fetch_all_survey_projects(api) {
        Ok(projects) => projects,
        Err(e) => {
            tracing::error!("{e}");
            summary.record_fetch_failure();
            record(settings, &summary);
            if let Some(notifier) = notifier {
                deliver(notifier, &Notification::fetch_failure(&e, now, settings.timezone));
            }
            return summary;
        }
    };
    summary.record_fetch(projects.len());
    tracing::info!(fetched = projects.len(), "fetched survey projects");

    let filtered = apply_title_filter(projects, &settings.title_filter);
    summary.record_title_filter(!settings.title_filter.is_empty(), filtered.rejected);
    if !settings.title_filter.is_empty() {
        tracing::info!(
            filter = %settings.title_filter,
            matched = filtered.matched.len(),
            rejected = filtered.rejected,
            "applied title filter"
        );
    }

    let recent: Vec<_> = filtered
        .matched
        .into_iter()
        .filter(|p| is_recent(p, now))
        .collect();
    summary.record_recent(recent.len());
    tracing::info!(recent = recent.len(), "projects created in the last 24h");

    summary.record_outcomes(apply_updates(api, &recent, settings.dry_run));
    for failed in summary.failures() {
        // No retry: by the next daily run the project is usually past the window
        tracing::warn!(
            uid = %failed.uid,
            name = %failed.name,
            "not renamed; will need manual marking if it ages out of the 24h window"
        );
    }

    record(settings, &summary);
    if let Some(notifier) = notifier {
        deliver(notifier, &Notification::summary(&summary, settings.timezone));
    }
    summary
}

fn record(settings: &Settings, summary: &RunSummary) {
    match append_run_log(&settings.log_file, summary) {
        Ok(()) => tracing::debug!(path = %settings.log_file.display(), "run logged"),
        Err(e) => tracing::error!("{e}"),
    }
}

fn deliver(notifier: &dyn Notifier, notification: &Notification) {
    if let Err(e) = notifier.send(notification) {
        tracing::error!("{e}");
    }
}
