use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{BoardError, Result};
use crate::types::{Project, Workspace};

/// Read side of the workspace API used by effects.
#[allow(async_fn_in_trait)]
pub trait WorkspaceApi {
    async fn workspace(&self, slug: &str) -> Result<Workspace>;
    async fn workspace_projects(&self, slug: &str) -> Result<Vec<Project>>;
}

pub struct BoardClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

impl BoardClient {
    pub fn new(base_url: Url, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            token,
        }
    }

    /// `{base}/workspaces/{slug}[/{extra}]`, with the slug percent-encoded.
    pub fn workspace_url(&self, slug: &str, extra: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| BoardError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty().push("workspaces").push(slug);
            if let Some(extra) = extra {
                segments.push(extra);
            }
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");

        let mut request = self.http.get(url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(BoardError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        Ok(response.json().await?)
    }
}

impl WorkspaceApi for BoardClient {
    async fn workspace(&self, slug: &str) -> Result<Workspace> {
        let url = self.workspace_url(slug, None)?;
        self.get(url).await
    }

    async fn workspace_projects(&self, slug: &str) -> Result<Vec<Project>> {
        let url = self.workspace_url(slug, Some("projects"))?;
        self.get(url).await
    }
}
