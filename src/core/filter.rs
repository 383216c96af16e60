//! Type and title filters applied to the fetched listing

use crate::kobo::Project;

/// Outcome of the title filter
#[derive(Debug, Clone, Default)]
pub(crate) struct TitleFilterResult {
    pub(crate) matched: Vec<Project>,
    pub(crate) rejected: usize,
}

/// Keep only survey assets (client-side safety net for the server filter)
pub(crate) fn retain_surveys(projects: Vec<Project>) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|p| p.asset_type.is_survey())
        .collect()
}

/// Case-insensitive substring match on the project name.
///
/// An empty substring matches everything and rejects nothing.
pub(crate) fn apply_title_filter(projects: Vec<Project>, substring: &str) -> TitleFilterResult {
    if substring.is_empty() {
        return TitleFilterResult {
            matched: projects,
            rejected: 0,
        };
    }

    let needle = substring.to_lowercase();
    let total = projects.len();
    let matched: Vec<Project> = projects
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect();

    TitleFilterResult {
        rejected: total - matched.len(),
        matched,
    }
}
