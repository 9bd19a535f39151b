//! Best-effort repository snapshot assembly.
//!
//! A snapshot aggregates the git metadata the agent prompt needs: root
//! path, origin URL, current branch, status summary, and recent commits.
//! Individual fields degrade to their empty values when the underlying
//! lookup fails; only failure to find a repository at all is an error.

use std::path::{Path, PathBuf};

use git2::Repository;
use serde::Serialize;

use crate::commits::{CommitInfo, list_recent_commits};
use crate::error::{Error, Result};
use crate::status::{StatusSummary, status_summary};

/// Flat record of repository metadata, built once per invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RepoSnapshot {
    /// Directory the snapshot was requested from
    pub current_directory: PathBuf,

    /// Repository working tree root
    pub root_path: PathBuf,

    /// Fetch URL of the `origin` remote, if configured
    pub remote_url: Option<String>,

    /// Current branch shorthand; `None` when HEAD is detached or unborn
    pub branch: Option<String>,

    /// Working tree status
    pub status: StatusSummary,

    /// Recent commits, newest first
    pub recent_commits: Vec<CommitInfo>,
}

impl RepoSnapshot {
    /// Gather a snapshot by discovering the repository upward from `cwd`.
    ///
    /// Per-field failures are logged at `warn` and degrade to empty
    /// values. Bare repositories are rejected since there is no working
    /// tree to describe.
    pub fn gather(cwd: &Path, max_commits: usize) -> Result<Self> {
        let repo = Repository::discover(cwd).map_err(|_| Error::NotARepository {
            path: cwd.to_path_buf(),
        })?;

        let root_path = repo
            .workdir()
            .ok_or_else(|| Error::BareRepository {
                path: repo.path().to_path_buf(),
            })?
            .to_path_buf();

        let remote_url = origin_url(&repo);
        let branch = current_branch(&repo);

        let status = status_summary(&repo).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read repository status");
            StatusSummary::default()
        });

        let recent_commits = list_recent_commits(&repo, max_commits).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to walk recent commits");
            Vec::new()
        });

        Ok(Self {
            current_directory: cwd.to_path_buf(),
            root_path,
            remote_url,
            branch,
            status,
            recent_commits,
        })
    }
}

/// Fetch URL of the `origin` remote, if present.
fn origin_url(repo: &Repository) -> Option<String> {
    match repo.find_remote("origin") {
        Ok(remote) => remote.url().map(str::to_string),
        Err(_) => None,
    }
}

/// Current branch shorthand, or `None` for detached or unborn HEAD.
fn current_branch(repo: &Repository) -> Option<String> {
    match repo.head() {
        Ok(head) if head.is_branch() => head.shorthand().map(str::to_string),
        Ok(_) => None,
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to resolve HEAD");
            None
        }
    }
}
