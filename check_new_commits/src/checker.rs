//! Commit freshness check: has anything landed since a reference time?

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};

use crate::github::CommitRecord;
use crate::Result;

/// Parameters for a "list repository commits" query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommitsRequest {
    pub owner: String,
    pub repo: String,
    /// Inclusive lower bound, passed through to the API untouched
    pub since: String,
    /// Only commits touching this path
    pub path: Option<String>,
    pub per_page: Option<u8>,
}

impl ListCommitsRequest {
    pub fn new(owner: &str, repo: &str, since: &str) -> Self {
        ListCommitsRequest {
            owner: owner.to_string(),
            repo: repo.to_string(),
            since: since.to_string(),
            path: None,
            per_page: None,
        }
    }

    pub fn path(mut self, path: Option<&str>) -> Self {
        self.path = path.map(str::to_string);
        self
    }

    pub fn per_page(mut self, per_page: u8) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("since", self.since.clone())];
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(path) = &self.path {
            params.push(("path", path.clone()));
        }
        params
    }
}

/// Something that can list a repository's commits, most recent first.
#[allow(async_fn_in_trait)]
pub trait CommitLister {
    async fn list_commits(&self, request: &ListCommitsRequest) -> Result<Vec<CommitRecord>>;
}

/// The most recent commit at or after the reference time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestCommit {
    pub timestamp: String,
    pub message: String,
}

/// Outcome of a single check.
///
/// Timestamp and message are stored together so that they are either both present or both
/// absent, and present exactly when a commit was found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitCheckResult {
    latest: Option<LatestCommit>,
}

impl CommitCheckResult {
    pub fn not_found() -> Self {
        CommitCheckResult { latest: None }
    }

    pub fn found_commit(timestamp: &str, message: &str) -> Self {
        CommitCheckResult {
            latest: Some(LatestCommit {
                timestamp: timestamp.to_string(),
                message: message.to_string(),
            }),
        }
    }

    pub fn found(&self) -> bool {
        self.latest.is_some()
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.latest.as_ref().map(|c| c.timestamp.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.latest.as_ref().map(|c| c.message.as_str())
    }

    pub fn latest(&self) -> Option<&LatestCommit> {
        self.latest.as_ref()
    }
}

impl From<Option<&CommitRecord>> for CommitCheckResult {
    fn from(record: Option<&CommitRecord>) -> Self {
        match record {
            Some(r) => CommitCheckResult::found_commit(r.committer_date(), r.message()),
            None => CommitCheckResult::not_found(),
        }
    }
}

/// Checks whether `owner/repo` has any commit at or after `ref_timestamp`, optionally only
/// counting commits that touch `file_path`.
///
/// Asks the lister for a single result and trusts its most-recent-first ordering. Errors from
/// the lister are returned as-is.
pub async fn check_if_new_commits<L: CommitLister>(
    lister: &L,
    ref_timestamp: &str,
    owner: &str,
    repo: &str,
    file_path: Option<&str>,
) -> Result<CommitCheckResult> {
    let request = ListCommitsRequest::new(owner, repo, ref_timestamp)
        .path(file_path)
        .per_page(1);

    info!("Querying commits on {}/{} since {}", owner, repo, ref_timestamp);
    if let Some(path) = file_path {
        info!("  (restricted to path: {})", path);
    }

    let commits = lister.list_commits(&request).await?;
    let result = CommitCheckResult::from(commits.first());

    match result.latest() {
        Some(latest) => {
            info!("✓ New commits found, latest at {}", latest.timestamp);
            if let Some(lag) = describe_lag(ref_timestamp, &latest.timestamp) {
                debug!("  {}", lag);
            }
        }
        None => info!("• No new commits found."),
    }

    Ok(result)
}

/// Human-readable distance between the reference time and a commit time, if both parse as
/// RFC 3339.
fn describe_lag(ref_timestamp: &str, commit_timestamp: &str) -> Option<String> {
    let reference = DateTime::parse_from_rfc3339(ref_timestamp).ok()?.with_timezone(&Utc);
    let commit = DateTime::parse_from_rfc3339(commit_timestamp).ok()?.with_timezone(&Utc);
    let lag = commit - reference;
    // committer dates can predate the reference when commits are backdated
    let direction = if lag < TimeDelta::zero() { "before" } else { "after" };
    let lag = lag.abs();
    Some(format!(
        "Latest commit is {}h {}m {} {}",
        lag.num_hours(),
        lag.num_minutes() % 60,
        direction,
        reference.format("%Y-%m-%d %H:%M:%S UTC")
    ))
}
