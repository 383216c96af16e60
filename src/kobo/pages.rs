use std::collections::HashSet;

use crate::core::retain_surveys;
use crate::error::FetchError;

use super::{PageCursor, Project, ProjectApi};

/// Lazy, finite walk over the asset listing.
///
/// Pages are requested one at a time in cursor order. The iterator ends
/// after the last page or after the first error, and cannot be restarted.
pub(crate) struct Pages<'a, A: ProjectApi + ?Sized> {
    api: &'a A,
    cursor: Option<PageCursor>,
    seen: HashSet<String>,
}

impl<'a, A: ProjectApi + ?Sized> Pages<'a, A> {
    pub(crate) fn new(api: &'a A) -> Self {
        Self {
            api,
            cursor: Some(PageCursor::First),
            seen: HashSet::new(),
        }
    }
}

impl<A: ProjectApi + ?Sized> Iterator for Pages<'_, A> {
    type Item = Result<Vec<Project>, FetchError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;

        let page = match self.api.fetch_page(&cursor) {
            Ok(page) => page,
            Err(e) => return Some(Err(e)),
        };

        if let Some(url) = page.next {
            if !self.seen.insert(url.clone()) {
                return Some(Err(FetchError::PaginationLoop { url }));
            }
            self.cursor = Some(PageCursor::Next(url));
        }

        Some(Ok(page.projects))
    }
}

/// Drain every page into one list of survey projects.
///
/// Any page failure discards what was already fetched: a truncated listing
/// cannot be told apart from a complete one.
pub(crate) fn fetch_all_survey_projects<A: ProjectApi + ?Sized>(
    api: &A,
) -> Result<Vec<Project>, FetchError> {
    let mut projects = Vec::new();
    for (index, page) in Pages::new(api).enumerate() {
        let page = page?;
        tracing::debug!(page = index + 1, items = page.len(), "fetched listing page");
        projects.extend(page);
    }

    let before = projects.len();
    let surveys = retain_surveys(projects);
    if surveys.len() != before {
        tracing::debug!(
            dropped = before - surveys.len(),
            "server returned non-survey assets; dropped client-side"
        );
    }
    Ok(surveys)
}
