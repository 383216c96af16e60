//! Asset data as held in memory for one run
//!
//! Wire shapes follow the KoboToolbox v2 assets endpoint; only the fields
//! the run needs are decoded, everything else is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::consts::SURVEY_ASSET_TYPE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AssetType {
    Survey,
    Other(String),
}

impl AssetType {
    pub(crate) fn is_survey(&self) -> bool {
        matches!(self, AssetType::Survey)
    }
}

impl From<String> for AssetType {
    fn from(raw: String) -> Self {
        if raw == SURVEY_ASSET_TYPE {
            AssetType::Survey
        } else {
            AssetType::Other(raw)
        }
    }
}

impl<'de> Deserialize<'de> for AssetType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(AssetType::from)
    }
}

/// A project (asset) on the platform
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Project {
    pub(crate) uid: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub(crate) name: String,
    pub(crate) asset_type: AssetType,
    pub(crate) date_created: DateTime<Utc>,
}

/// One page of the asset listing
#[derive(Debug, Clone, Default)]
pub(crate) struct ProjectPage {
    pub(crate) projects: Vec<Project>,
    /// Absolute URL of the following page, `None` on the last page
    pub(crate) next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawPage {
    next: Option<String>,
    results: Vec<Project>,
}

impl From<RawPage> for ProjectPage {
    fn from(raw: RawPage) -> Self {
        ProjectPage {
            projects: raw.results,
            next: raw.next.filter(|url| !url.is_empty()),
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_kobo_listing_page() {
        let json = r#"{
            "count": 2,
            "next": "https://kobo.example/api/v2/assets/?page=2",
            "previous": null,
            "results": [
                {"uid": "a1", "name": "Village Census", "asset_type": "survey",
                 "date_created": "2026-02-06T10:00:00.123456Z", "owner__username": "field"},
                {"uid": "b2", "name": null, "asset_type": "block",
                 "date_created": "2026-02-05T09:30:00Z"}
            ]
        }"#;
        let raw: RawPage = serde_json::from_str(json).unwrap();
        let page = ProjectPage::from(raw);

        assert_eq!(page.next.as_deref(), Some("https://kobo.example/api/v2/assets/?page=2"));
        assert_eq!(page.projects.len(), 2);
        assert_eq!(page.projects[0].name, "Village Census");
        assert!(page.projects[0].asset_type.is_survey());
        assert_eq!(page.projects[1].name, "");
        assert_eq!(page.projects[1].asset_type, AssetType::Other("block".to_string()));
    }

    #[test]
    fn last_page_has_no_next() {
        let raw: RawPage = serde_json::from_str(r#"{"next": null, "results": []}"#).unwrap();
        let page = ProjectPage::from(raw);
        assert!(page.next.is_none());
        assert!(page.projects.is_empty());
    }

    #[test]
    fn empty_next_string_ends_pagination() {
        let raw: RawPage = serde_json::from_str(r#"{"next": "", "results": []}"#).unwrap();
        assert!(ProjectPage::from(raw).next.is_none());
    }

    #[test]
    fn body_without_results_is_not_a_page() {
        assert!(serde_json::from_str::<RawPage>(r#"{"detail": "Not found."}"#).is_err());
        assert!(serde_json::from_str::<RawPage>(r#"{"next": null}"#).is_err());
    }

    #[test]
    fn missing_next_means_last_page() {
        let raw: RawPage = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(ProjectPage::from(raw).next.is_none());
    }

    #[test]
    fn fractional_seconds_are_parsed() {
        let json = r#"{"uid": "x", "name": "n", "asset_type": "survey",
                       "date_created": "2026-02-06T10:00:00.500000Z"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(
            project.date_created,
            "2026-02-06T10:00:00.5Z".parse::<DateTime<Utc>>().unwrap()
        );
    }
}
