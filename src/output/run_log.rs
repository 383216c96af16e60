//! Append-only CSV record of runs, one row per invocation

use std::fs::{self, OpenOptions};
use std::path::Path;

use chrono::SecondsFormat;
use serde::Serialize;

use crate::core::RunSummary;
use crate::error::LogError;

/// Column order of the log file; field names double as the header row.
///
/// On every row `updated + skipped + failed` equals `recent_eligible`: a
/// rename that errored is counted in `failed`, never in `skipped`.
#[derive(Debug, Serialize)]
struct LogRow<'a> {
    run_started: String,
    total_fetched: usize,
    filter_applied: bool,
    filtered_out_by_title: usize,
    recent_eligible: usize,
    updated: usize,
    skipped: usize,
    failed: usize,
    status: &'a str,
    dry_run: bool,
}

impl<'a> From<&'a RunSummary> for LogRow<'a> {
    fn from(s: &'a RunSummary) -> Self {
        LogRow {
            run_started: s.run_started.to_rfc3339_opts(SecondsFormat::Secs, true),
            total_fetched: s.total_fetched,
            filter_applied: s.filter_applied,
            filtered_out_by_title: s.filtered_out_by_title,
            recent_eligible: s.recent_eligible,
            updated: s.updated,
            skipped: s.skipped,
            failed: s.failed,
            status: s.status.as_str(),
            dry_run: s.dry_run,
        }
    }
}

/// Append one row for `summary`, writing the header first if the file is
/// new or empty.
pub(crate) fn append_run_log(path: &Path, summary: &RunSummary) -> Result<(), LogError> {
    let io_err = |source| LogError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_err)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer.serialize(LogRow::from(summary))?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
