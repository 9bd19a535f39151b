//! Working tree status classification.

use git2::{Repository, Status, StatusOptions};
use serde::Serialize;

use crate::Result;

/// Summary of the working tree status.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusSummary {
    /// Paths with changes staged in the index
    pub staged: Vec<String>,

    /// Tracked paths with unstaged modifications
    pub unstaged: Vec<String>,

    /// Untracked paths
    pub untracked: Vec<String>,
}

impl StatusSummary {
    /// True when the working tree has no staged, unstaged, or untracked changes.
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.unstaged.is_empty() && self.untracked.is_empty()
    }

    /// Render the summary as a short human-readable listing.
    pub fn describe(&self) -> String {
        if self.is_clean() {
            return "working tree clean".to_string();
        }

        let mut lines = Vec::new();
        for path in &self.staged {
            lines.push(format!("staged:    {path}"));
        }
        for path in &self.unstaged {
            lines.push(format!("modified:  {path}"));
        }
        for path in &self.untracked {
            lines.push(format!("untracked: {path}"));
        }
        lines.join("\n")
    }
}

const STAGED: Status = Status::INDEX_NEW
    .union(Status::INDEX_MODIFIED)
    .union(Status::INDEX_DELETED)
    .union(Status::INDEX_RENAMED)
    .union(Status::INDEX_TYPECHANGE);

const UNSTAGED: Status = Status::WT_MODIFIED
    .union(Status::WT_DELETED)
    .union(Status::WT_RENAMED)
    .union(Status::WT_TYPECHANGE);

/// Classify the repository status into staged / unstaged / untracked buckets.
pub fn status_summary(repo: &Repository) -> Result<StatusSummary> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(true).recurse_untracked_dirs(true);

    let statuses = repo.statuses(Some(&mut opts))?;
    let mut summary = StatusSummary::default();

    for entry in statuses.iter() {
        let path = entry.path().unwrap_or("<non-utf8 path>").to_string();
        let status = entry.status();

        if status.intersects(STAGED) {
            summary.staged.push(path.clone());
        }
        if status.intersects(UNSTAGED) {
            summary.unstaged.push(path.clone());
        }
        if status.contains(Status::WT_NEW) {
            summary.untracked.push(path);
        }
    }

    Ok(summary)
}
