use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::{ProjectAction, RunStatus};

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn status_color(status: RunStatus) -> Color {
    match status {
        RunStatus::Success => Color::Green,
        RunStatus::PartialFailure => Color::Yellow,
        RunStatus::FetchFailed => Color::Red,
    }
}

pub(super) fn action_label(action: ProjectAction) -> (&'static str, Color) {
    match action {
        ProjectAction::Renamed => ("renamed", Color::Green),
        ProjectAction::WouldRename => ("would rename", Color::Cyan),
        ProjectAction::Skipped => ("already marked", Color::DarkGrey),
        ProjectAction::Failed => ("failed", Color::Red),
    }
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_a_distinct_label() {
        let labels: std::collections::HashSet<_> = [
            ProjectAction::Renamed,
            ProjectAction::WouldRename,
            ProjectAction::Skipped,
            ProjectAction::Failed,
        ]
        .into_iter()
        .map(|a| action_label(a).0)
        .collect();
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn failures_are_red() {
        assert_eq!(status_color(RunStatus::FetchFailed), Color::Red);
        assert_eq!(action_label(ProjectAction::Failed).1, Color::Red);
    }

    #[test]
    fn styled_table_uses_single_header_line() {
        let mut table = create_styled_table();
        table.set_header(vec![header_cell("Field", false)]);
        table.add_row(vec![right_cell("1", None, false)]);
        let rendered = table.to_string();
        assert!(rendered.contains('├'));
        assert!(!rendered.contains('╞'));
    }
}
