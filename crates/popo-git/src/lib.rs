//! Git repository introspection for popo
//!
//! Gathers a best-effort snapshot of the local repository: root path,
//! remote URL, current branch, working tree status, and recent commits.

pub mod commits;
pub mod error;
pub mod snapshot;
pub mod status;

pub use commits::{CommitInfo, list_recent_commits, recent_commits_at};
pub use error::{Error, Result};
pub use snapshot::RepoSnapshot;
pub use status::{StatusSummary, status_summary};
