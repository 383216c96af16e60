use crate::consts::REVIEW_SUFFIX;
use crate::kobo::{Project, ProjectApi};

use super::summary::{ProjectAction, ProjectOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Decision {
    Update { new_name: String },
    Skip,
}

/// Skip names already carrying the review marker (case-sensitive suffix),
/// otherwise append it.
pub(crate) fn decide(project: &Project) -> Decision {
    if project.name.ends_with(REVIEW_SUFFIX) {
        Decision::Skip
    } else {
        Decision::Update {
            new_name: format!("{}{REVIEW_SUFFIX}", project.name),
        }
    }
}

/// Rename every project that needs the marker, one call at a time.
///
/// A failed rename is recorded on its outcome and the batch carries on.
/// With `dry_run` no rename is sent.
pub(crate) fn apply_updates<A: ProjectApi + ?Sized>(
    api: &A,
    projects: &[Project],
    dry_run: bool,
) -> Vec<ProjectOutcome> {
    projects
        .iter()
        .map(|project| {
            let new_name = match decide(project) {
                Decision::Skip => {
                    tracing::debug!(uid = %project.uid, name = %project.name, "already marked, skipping");
                    return outcome(project, None, ProjectAction::Skipped, None);
                }
                Decision::Update { new_name } => new_name,
            };

            if dry_run {
                tracing::info!(uid = %project.uid, from = %project.name, to = %new_name, "would rename (dry run)");
                return outcome(project, Some(new_name), ProjectAction::WouldRename, None);
            }

            match api.rename_project(&project.uid, &new_name) {
                Ok(()) => {
                    tracing::info!(uid = %project.uid, from = %project.name, to = %new_name, "renamed");
                    outcome(project, Some(new_name), ProjectAction::Renamed, None)
                }
                Err(e) => {
                    tracing::warn!(uid = %project.uid, error = %e, "rename failed; project stays unmarked");
                    outcome(project, Some(new_name), ProjectAction::Failed, Some(e.to_string()))
                }
            }
        })
        .collect()
}

fn outcome(
    project: &Project,
    new_name: Option<String>,
    action: ProjectAction,
    error: Option<String>,
) -> ProjectOutcome {
    ProjectOutcome {
        uid: project.uid.clone(),
        name: project.name.clone(),
        new_name,
        action,
        error,
    }
}
