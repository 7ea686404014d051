//! Check New Commits - CI helper
//!
//! Queries the GitHub API for the most recent commit on a public repository made at or after a
//! reference timestamp, optionally restricted to a single file path.
//!
//! Writes `commit_check.txt` (or `--output`) with three lines:
//! - `True` / `False`: whether a new commit exists
//! - committer date of the latest such commit, or `None`
//! - its message, or `None`
//!
//! Exit codes:
//! - 0: Check completed (whether or not commits were found)
//! - non-zero: Bad arguments, or the API query or file write failed

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;

use check_new_commits::github::{ClientBuilder, DEFAULT_API_BASE_URL};
use check_new_commits::output::{self, DEFAULT_OUTPUT_FILE};
use check_new_commits::check_if_new_commits;

#[derive(Parser, Debug)]
#[command(name = "check_new_commits")]
#[command(about = "Check if a public GitHub repository has new commits since a given time")]
struct Args {
    /// Reference time in ISO 8601 UTC, e.g. "2022-01-01T00:00:00Z"
    ref_datetime: String,

    /// Owner of the public repository
    owner: String,

    /// Name of the public repository
    repo: String,

    /// Only count commits touching this path in the repository
    file_path: Option<String>,

    /// Base URL for the GitHub REST API
    #[arg(long, env = "CHECK_COMMITS_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Path of the result file to write
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Enable verbose output (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Set up the logging / tracing system for the application.
fn configure_tracing(args: &Args) -> Result<()> {
    use tracing_subscriber::{filter::LevelFilter, EnvFilter};

    let level_filter = if args.quiet {
        LevelFilter::ERROR
    } else {
        match args.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    // Filters from the `CHECK_COMMITS_LOG` environment variable take precedence
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("CHECK_COMMITS_LOG")
        .from_env()
        .context("Failed to parse filters from CHECK_COMMITS_LOG environment variable")?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    configure_tracing(&args)?;

    info!("=== Checking for new commits ===");
    info!("API: {}", args.api_base_url);

    let client = ClientBuilder::new()
        .base_url(args.api_base_url.as_str())
        .context("Invalid API base URL")?
        .build()
        .context("Failed to initialize GitHub client")?;

    let result = check_if_new_commits(
        &client,
        &args.ref_datetime,
        &args.owner,
        &args.repo,
        args.file_path.as_deref(),
    )
    .await
    .with_context(|| format!("Failed to list commits for {}/{}", args.owner, args.repo))?;

    output::write_result(&args.output, &result).context("Failed to write check result")?;
    info!("Result written to: {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_positional_with_file_path() {
        let args = Args::try_parse_from([
            "check_new_commits",
            "2022-04-01T00:00:00Z",
            "rwightman",
            "pytorch-image-models",
            "results/results-imagenet.csv",
        ])
        .unwrap();
        assert_eq!(args.ref_datetime, "2022-04-01T00:00:00Z");
        assert_eq!(args.owner, "rwightman");
        assert_eq!(args.repo, "pytorch-image-models");
        assert_eq!(args.file_path.as_deref(), Some("results/results-imagenet.csv"));
        assert_eq!(args.output, PathBuf::from("commit_check.txt"));
    }

    #[test]
    fn test_args_file_path_optional() {
        let args = Args::try_parse_from(["check_new_commits", "2022-04-01T00:00:00Z", "o", "r"]).unwrap();
        assert_eq!(args.file_path, None);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_args_missing_repo() {
        assert!(Args::try_parse_from(["check_new_commits", "2022-04-01T00:00:00Z", "o"]).is_err());
    }

    #[test]
    fn test_args_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["check_new_commits", "-q", "-v", "t", "o", "r"]).is_err());
    }
}
