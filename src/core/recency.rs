use chrono::{DateTime, Duration, Utc};

use crate::consts::RECENCY_WINDOW_HOURS;
use crate::kobo::Project;

/// True iff the project was created strictly less than 24 hours before `now`.
///
/// `now` is captured once per run so every project is judged against the
/// same window. Creation times ahead of `now` count as recent.
pub(crate) fn is_recent(project: &Project, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(project.date_created) < Duration::hours(RECENCY_WINDOW_HOURS)
}
