use std::time::Duration;

use serde::Serialize;

use crate::consts::SURVEY_ASSET_TYPE;
use crate::error::{FetchError, UpdateError};

use super::types::RawPage;
use super::{PageCursor, ProjectApi, ProjectPage};

/// Blocking client for the KoboToolbox v2 assets endpoint
pub(crate) struct KoboClient {
    agent: ureq::Agent,
    base_url: String,
    authorization: String,
}

#[derive(Serialize)]
struct RenameBody<'a> {
    name: &'a str,
}

impl KoboClient {
    pub(crate) fn new(base_url: &str, token: &str, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Self {
            agent,
            base_url,
            authorization: format!("Token {token}"),
        }
    }

    fn asset_url(&self, uid: &str) -> String {
        format!("{}{uid}/", self.base_url)
    }
}

impl ProjectApi for KoboClient {
    fn fetch_page(&self, cursor: &PageCursor) -> Result<ProjectPage, FetchError> {
        let (url, request) = match cursor {
            PageCursor::First => (
                self.base_url.clone(),
                self.agent
                    .get(&self.base_url)
                    .query("q", format!("asset_type:{SURVEY_ASSET_TYPE}"))
                    .query("format", "json"),
            ),
            PageCursor::Next(url) => (url.clone(), self.agent.get(url)),
        };

        tracing::debug!(%url, "requesting asset listing");
        let response = request
            .header("Authorization", &self.authorization)
            .header("Accept", "application/json")
            .call()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let mut body = response.into_body();
        let raw: RawPage = serde_json::from_reader(body.as_reader())
            .map_err(|source| FetchError::Decode { url, source })?;
        Ok(raw.into())
    }

    fn rename_project(&self, uid: &str, new_name: &str) -> Result<(), UpdateError> {
        let url = self.asset_url(uid);
        self.agent
            .patch(&url)
            .header("Authorization", &self.authorization)
            .header("Accept", "application/json")
            .send_json(RenameBody { name: new_name })
            .map_err(|source| UpdateError::Transport {
                uid: uid.to_string(),
                source,
            })?;
        Ok(())
    }
}
