use comfy_table::Table;

use crate::core::{ProjectAction, RunSummary};
use crate::output::format::{
    action_label, create_styled_table, header_cell, right_cell, status_color, styled_cell,
};
use crate::utils::Timezone;

fn counters_table(summary: &RunSummary, use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Run", use_color), header_cell("", use_color)]);

    let status_fg = use_color.then(|| status_color(summary.status));
    table.add_row(vec![
        styled_cell("Status", None, false),
        right_cell(summary.status.as_str(), status_fg, true),
    ]);

    let rows = [
        ("Fetched", summary.total_fetched),
        ("Filtered out by title", summary.filtered_out_by_title),
        ("Created in last 24h", summary.recent_eligible),
        ("Updated", summary.updated),
        ("Already marked", summary.skipped),
        ("Failed", summary.failed),
    ];
    for (label, value) in rows {
        table.add_row(vec![
            styled_cell(label, None, false),
            right_cell(&value.to_string(), None, false),
        ]);
    }
    table
}

fn outcomes_table(summary: &RunSummary, use_color: bool) -> Table {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("UID", use_color),
        header_cell("Name", use_color),
        header_cell("Result", use_color),
    ]);
    for o in &summary.outcomes {
        let (label, color) = action_label(o.action);
        let name = match &o.new_name {
            Some(new_name) if o.action != ProjectAction::Failed => new_name.as_str(),
            _ => o.name.as_str(),
        };
        table.add_row(vec![
            styled_cell(&o.uid, None, false),
            styled_cell(name, None, false),
            styled_cell(label, use_color.then_some(color), false),
        ]);
    }
    table
}

/// Render the run summary for the console
pub(crate) fn render_summary(summary: &RunSummary, timezone: Timezone, use_color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\n  kobo-verify run at {}{}\n\n",
        timezone.format(summary.run_started),
        if summary.dry_run { " (dry run)" } else { "" }
    ));
    out.push_str(&counters_table(summary, use_color).to_string());
    out.push('\n');

    if !summary.outcomes.is_empty() {
        out.push('\n');
        out.push_str(&outcomes_table(summary, use_color).to_string());
        out.push('\n');
    }
    out
}

pub(crate) fn print_summary_table(summary: &RunSummary, timezone: Timezone, use_color: bool) {
    print!("{}", render_summary(summary, timezone, use_color));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProjectOutcome;
    use chrono::{TimeZone, Utc};

    fn summary() -> RunSummary {
        let mut s = RunSummary::start(Utc.with_ymd_and_hms(2026, 2, 6, 6, 0, 0).unwrap(), false);
        s.record_fetch(2);
        s.record_recent(2);
        s.record_outcomes(vec![
            ProjectOutcome {
                uid: "u1".to_string(),
                name: "Village Census".to_string(),
                new_name: Some("Village Census - To Be Verified".to_string()),
                action: ProjectAction::Renamed,
                error: None,
            },
            ProjectOutcome {
                uid: "u2".to_string(),
                name: "Market - To Be Verified".to_string(),
                new_name: None,
                action: ProjectAction::Skipped,
                error: None,
            },
        ]);
        s
    }

    #[test]
    fn summary_lists_counters_and_projects() {
        let out = render_summary(&summary(), Timezone::Utc, false);
        assert!(out.contains("kobo-verify run at 2026-02-06 06:00:00 +00:00"));
        assert!(out.contains("Success"));
        assert!(out.contains("Created in last 24h"));
        assert!(out.contains("Village Census - To Be Verified"));
        assert!(out.contains("already marked"));
    }

    #[test]
    fn empty_run_has_no_project_table() {
        let s = RunSummary::start(Utc::now(), true);
        let out = render_summary(&s, Timezone::Utc, false);
        assert!(out.contains("(dry run)"));
        assert!(!out.contains("UID"));
    }
}
