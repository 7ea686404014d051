use serde::Deserialize;

/// One entry of the `GET /repos/{owner}/{repo}/commits` response.
///
/// Only the fields the checker reads are modeled; everything else in GitHub's
/// payload is ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    pub commit: CommitDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitDetails {
    pub message: String,
    pub committer: GitSignature,
}

/// Name, email and date of a git author or committer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitSignature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// ISO 8601, kept exactly as the API reported it
    pub date: String,
}

impl CommitRecord {
    pub fn committer_date(&self) -> &str {
        &self.commit.committer.date
    }

    pub fn message(&self) -> &str {
        &self.commit.message
    }
}
