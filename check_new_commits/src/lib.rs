//! Check New Commits - CI helper
//!
//! Asks the GitHub REST API whether a public repository has received any commit since a
//! reference time, optionally only counting commits that touch one file, and records the
//! answer in a three-line text file for later pipeline steps to read.

pub mod checker;
pub mod error;
pub mod github;
pub mod output;

pub use checker::{
    check_if_new_commits, CommitCheckResult, CommitLister, LatestCommit, ListCommitsRequest,
};
pub use error::{Error, Result};
