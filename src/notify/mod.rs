//! Run notifications by email

mod smtp;

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::core::{ProjectAction, RunSummary};
use crate::error::{FetchError, NotifyError};
use crate::utils::Timezone;

pub(crate) use smtp::SmtpNotifier;

const SUBJECT_PREFIX: &str = "[kobo-verify]";

/// A plain-text message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notification {
    pub(crate) subject: String,
    pub(crate) body: String,
}

pub(crate) trait Notifier {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl Notification {
    pub(crate) fn summary(summary: &RunSummary, timezone: Timezone) -> Self {
        let mut subject = format!(
            "{SUBJECT_PREFIX} {}: {} updated, {} skipped",
            summary.status, summary.updated, summary.skipped
        );
        if summary.failed > 0 {
            let _ = write!(subject, ", {} failed", summary.failed);
        }
        if summary.dry_run {
            subject.push_str(" (dry run)");
        }

        let mut body = String::new();
        let _ = writeln!(
            body,
            "kobo-verify run started {}",
            timezone.format(summary.run_started)
        );
        if summary.dry_run {
            let _ = writeln!(body, "Dry run: no project was renamed.");
        }
        body.push('\n');

        let rows = [
            ("Status", summary.status.to_string()),
            ("Projects fetched", summary.total_fetched.to_string()),
            ("Title filter applied", yes_no(summary.filter_applied).to_string()),
            ("Filtered out by title", summary.filtered_out_by_title.to_string()),
            ("Created in last 24h", summary.recent_eligible.to_string()),
            ("Updated", summary.updated.to_string()),
            ("Already marked", summary.skipped.to_string()),
            ("Rename failures", summary.failed.to_string()),
        ];
        for (label, value) in rows {
            let _ = writeln!(body, "{:<24}{value}", format!("{label}:"));
        }

        let renamed: Vec<_> = summary
            .outcomes
            .iter()
            .filter(|o| matches!(o.action, ProjectAction::Renamed | ProjectAction::WouldRename))
            .collect();
        if !renamed.is_empty() {
            let _ = writeln!(body, "\nRenamed:");
            for o in renamed {
                let _ = writeln!(
                    body,
                    "  - {} -> {} ({})",
                    o.name,
                    o.new_name.as_deref().unwrap_or_default(),
                    o.uid
                );
            }
        }

        let mut failures = summary.failures().peekable();
        if failures.peek().is_some() {
            let _ = writeln!(
                body,
                "\nNot renamed (will leave the 24h window unless fixed by hand):"
            );
            for o in failures {
                let _ = writeln!(
                    body,
                    "  - {} ({}): {}",
                    o.name,
                    o.uid,
                    o.error.as_deref().unwrap_or("unknown error")
                );
            }
        }

        Self { subject, body }
    }

    pub(crate) fn fetch_failure(
        error: &FetchError,
        run_started: DateTime<Utc>,
        timezone: Timezone,
    ) -> Self {
        let subject = format!("{SUBJECT_PREFIX} FAILED: could not fetch projects");
        let body = format!(
            "kobo-verify run started {} was aborted: the project list could not be fetched.\n\
             No project was renamed.\n\nError: {error}\n",
            timezone.format(run_started)
        );
        Self { subject, body }
    }
}
