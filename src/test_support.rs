//! In-memory stand-ins for the platform and the mail relay

use std::cell::RefCell;
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::{FetchError, NotifyError, UpdateError};
use crate::kobo::types::AssetType;
use crate::kobo::{PageCursor, Project, ProjectApi, ProjectPage};
use crate::notify::{Notification, Notifier};

pub(crate) fn project_at(uid: &str, name: &str, date_created: DateTime<Utc>) -> Project {
    Project {
        uid: uid.to_string(),
        name: name.to_string(),
        asset_type: AssetType::Survey,
        date_created,
    }
}

#[derive(Default)]
pub(crate) struct FakePlatform {
    pages: Vec<ProjectPage>,
    failing_page: Option<usize>,
    undecodable_page: Option<usize>,
    failing_renames: HashSet<String>,
    cursors: RefCell<Vec<PageCursor>>,
    renames: RefCell<Vec<(String, String)>>,
}

impl FakePlatform {
    pub(crate) fn with_pages(pages: Vec<ProjectPage>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub(crate) fn with_projects(projects: Vec<Project>) -> Self {
        Self::with_pages(vec![ProjectPage {
            projects,
            next: None,
        }])
    }

    /// Make the n-th page request (1-based) fail
    pub(crate) fn failing_page(mut self, page: usize) -> Self {
        self.failing_page = Some(page);
        self
    }

    /// Make the n-th page request (1-based) answer with a body that is not a listing
    pub(crate) fn undecodable_page(mut self, page: usize) -> Self {
        self.undecodable_page = Some(page);
        self
    }

    pub(crate) fn failing_rename(mut self, uid: &str) -> Self {
        self.failing_renames.insert(uid.to_string());
        self
    }

    pub(crate) fn cursors(&self) -> Vec<PageCursor> {
        self.cursors.borrow().clone()
    }

    pub(crate) fn renames(&self) -> Vec<(String, String)> {
        self.renames.borrow().clone()
    }
}

impl ProjectApi for FakePlatform {
    fn fetch_page(&self, cursor: &PageCursor) -> Result<ProjectPage, FetchError> {
        let mut cursors = self.cursors.borrow_mut();
        cursors.push(cursor.clone());
        let request = cursors.len();

        if self.failing_page == Some(request) {
            return Err(FetchError::Transport {
                url: format!("fake://assets/?page={request}"),
                source: ureq::Error::StatusCode(503),
            });
        }
        if self.undecodable_page == Some(request) {
            let source = serde_json::from_str::<serde_json::Value>("<html>Bad Gateway</html>")
                .expect_err("html is not json");
            return Err(FetchError::Decode {
                url: format!("fake://assets/?page={request}"),
                source,
            });
        }
        Ok(self.pages.get(request - 1).cloned().unwrap_or_default())
    }

    fn rename_project(&self, uid: &str, new_name: &str) -> Result<(), UpdateError> {
        if self.failing_renames.contains(uid) {
            return Err(UpdateError::Transport {
                uid: uid.to_string(),
                source: ureq::Error::StatusCode(500),
            });
        }
        self.renames
            .borrow_mut()
            .push((uid.to_string(), new_name.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeNotifier {
    pub(crate) sent: RefCell<Vec<Notification>>,
    pub(crate) fail: bool,
}

impl Notifier for FakeNotifier {
    fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.borrow_mut().push(notification.clone());
        if self.fail {
            return Err(NotifyError::Address {
                input: "unreachable@relay".to_string(),
            });
        }
        Ok(())
    }
}
