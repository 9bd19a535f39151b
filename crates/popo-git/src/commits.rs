//! Recent commit history extraction from git repositories.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use git2::Repository;
use serde::Serialize;

use crate::error::{Error, Result};

/// Information about a single commit.
#[derive(Debug, Clone, Serialize)]
pub struct CommitInfo {
    /// Short commit hash (7 characters)
    pub hash: String,

    /// First line of the commit message
    pub message: String,

    /// Commit author name
    pub author: String,

    /// Commit author email
    pub email: String,

    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

/// Upper bound on history depth. Requests beyond this are clamped so an
/// absurd count cannot trigger an oversized allocation.
const MAX_HISTORY: usize = 1000;

/// Extract the last `max_count` commits starting from HEAD.
///
/// Performs a time-sorted revwalk. Returns commits in reverse-chronological
/// order (most recent first). An unborn HEAD yields an empty list rather
/// than an error so freshly-initialized repositories still produce a
/// usable snapshot. `max_count` is clamped to [`MAX_HISTORY`].
pub fn list_recent_commits(repo: &Repository, max_count: usize) -> Result<Vec<CommitInfo>> {
    let max_count = max_count.min(MAX_HISTORY);

    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let commit = head.peel_to_commit()?;

    let mut revwalk = repo.revwalk()?;
    revwalk.push(commit.id())?;
    revwalk.set_sorting(git2::Sort::TIME)?;

    let mut commits = Vec::with_capacity(max_count);

    for oid_result in revwalk.take(max_count) {
        let oid = oid_result?;
        let commit = repo.find_commit(oid)?;

        let timestamp = commit.time();
        let dt: DateTime<Utc> = Utc
            .timestamp_opt(timestamp.seconds(), 0)
            .single()
            .unwrap_or_default();

        let message = commit
            .message()
            .unwrap_or("")
            .lines()
            .next()
            .unwrap_or("")
            .to_string();

        let author = commit.author();
        let author_name = author.name().unwrap_or("Unknown").to_string();
        let author_email = author.email().unwrap_or("").to_string();

        let short_hash = format!("{:.7}", oid);

        commits.push(CommitInfo {
            hash: short_hash,
            message,
            author: author_name,
            email: author_email,
            timestamp: dt,
        });
    }

    Ok(commits)
}

/// Discover the repository upward from `path` and list its recent commits.
pub fn recent_commits_at(path: &Path, max_count: usize) -> Result<Vec<CommitInfo>> {
    let repo = Repository::discover(path).map_err(|_| Error::NotARepository {
        path: path.to_path_buf(),
    })?;
    list_recent_commits(&repo, max_count)
}
