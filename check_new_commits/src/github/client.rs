use reqwest::{header, Url};
use tracing::{debug, trace};

use super::models::CommitRecord;
use super::ClientBuilder;
use crate::checker::{CommitLister, ListCommitsRequest};
use crate::{Error, Result};

// -------------------------------------------------------------------------------------------------
// Client
// -------------------------------------------------------------------------------------------------
/// Unauthenticated client for the GitHub REST API.
pub struct Client {
    pub(super) base_url: Url,
    pub(super) inner: reqwest::Client,
}

impl Client {
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /repos/{owner}/{repo}/commits`, a single page.
    pub async fn get_repo_commits(&self, request: &ListCommitsRequest) -> Result<Vec<CommitRecord>> {
        let params = request.query_params();
        let path = ["repos", request.owner.as_str(), request.repo.as_str(), "commits"];
        let url = self.make_url(&path, &params)?;
        let response = self.get_url(url).await?;
        let commits: Vec<CommitRecord> = response.json().await?;
        trace!("Received {} commit record(s)", commits.len());
        Ok(commits)
    }
}

impl CommitLister for Client {
    async fn list_commits(&self, request: &ListCommitsRequest) -> Result<Vec<CommitRecord>> {
        self.get_repo_commits(request).await
    }
}

// private implementation
impl Client {
    /// Construct a `Url` from the given path parts and query parameters.
    ///
    /// Path parts are appended to whatever path the base URL already carries, so a GitHub
    /// Enterprise base such as `https://ghe.example.com/api/v3` works as well.
    pub(crate) fn make_url(&self, path_parts: &[&str], params: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::UrlBase(self.base_url.to_string()))?;
            segments.pop_if_empty();
            for p in path_parts {
                if p.contains('/') {
                    return Err(Error::UrlSlash(p.to_string()));
                }
                segments.push(p);
            }
        }
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    async fn get_url(&self, url: Url) -> Result<reqwest::Response> {
        debug!("GET {}", url);

        let response = self
            .inner
            .get(url.clone())
            .header(header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}
