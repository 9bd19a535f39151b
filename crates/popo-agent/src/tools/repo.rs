//! Repository introspection tools, backed by popo-git and popo-context.

use std::path::Path;

use async_trait::async_trait;
use serde_json::{Value, json};

use popo_context::ProjectTree;
use popo_git::{RepoSnapshot, recent_commits_at};

use super::Tool;
use crate::Result;

/// Summarize the working tree status.
pub struct RepoStatusTool;

#[async_trait]
impl Tool for RepoStatusTool {
    fn name(&self) -> &str {
        "repo_status"
    }

    fn description(&self) -> &str {
        "Get the repository status: current branch, remote URL, and staged, modified, and untracked files."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: Value, workspace: &Path) -> Result<String> {
        let snapshot = RepoSnapshot::gather(workspace, 1)?;

        let mut lines = Vec::new();
        lines.push(format!(
            "branch: {}",
            snapshot.branch.as_deref().unwrap_or("(detached)")
        ));
        lines.push(format!(
            "remote: {}",
            snapshot.remote_url.as_deref().unwrap_or("(none)")
        ));
        lines.push(snapshot.status.describe());
        Ok(lines.join("\n"))
    }
}

/// List recent commits.
pub struct RecentCommitsTool;

#[async_trait]
impl Tool for RecentCommitsTool {
    fn name(&self) -> &str {
        "recent_commits"
    }

    fn description(&self) -> &str {
        "List recent commits (hash, author, date, message), newest first."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "count": {
                    "type": "integer",
                    "description": "Number of commits to list (default: 5)"
                }
            }
        })
    }

    async fn execute(&self, args: Value, workspace: &Path) -> Result<String> {
        let count = args["count"].as_u64().unwrap_or(5) as usize;

        let commits = recent_commits_at(workspace, count).map_err(crate::Error::Git)?;
        if commits.is_empty() {
            return Ok("No commits yet".to_string());
        }

        let lines: Vec<String> = commits
            .iter()
            .map(|c| {
                format!(
                    "{} {} <{}> {} {}",
                    c.hash,
                    c.author,
                    c.email,
                    c.timestamp.format("%Y-%m-%d"),
                    c.message
                )
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

/// Render the working tree as a markdown-style listing.
pub struct ProjectTreeTool;

#[async_trait]
impl Tool for ProjectTreeTool {
    fn name(&self) -> &str {
        "project_tree"
    }

    fn description(&self) -> &str {
        "Render the repository's directory structure as an indented tree."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: Value, workspace: &Path) -> Result<String> {
        let snapshot = RepoSnapshot::gather(workspace, 0)?;
        let tree = ProjectTree::build_default(&snapshot.root_path).map_err(crate::Error::Context)?;
        Ok(format!(
            "{}\n{} files, {} directories",
            tree.rendered.trim_end(),
            tree.stats.files,
            tree.stats.directories
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Repository;
    use tempfile::TempDir;

    fn init_repo_with_commit(dir: &Path) {
        let repo = Repository::init(dir).unwrap();
        std::fs::write(dir.join("main.rs"), "fn main() {}").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("main.rs")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("Tester", "tester@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "add main", &tree, &[])
            .unwrap();
    }

    #[tokio::test]
    async fn test_repo_status_tool() {
        let temp = TempDir::new().unwrap();
        init_repo_with_commit(temp.path());

        let output = RepoStatusTool
            .execute(json!({}), temp.path())
            .await
            .unwrap();
        assert!(output.contains("branch: "));
        assert!(output.contains("working tree clean"));
    }

    #[tokio::test]
    async fn test_recent_commits_tool() {
        let temp = TempDir::new().unwrap();
        init_repo_with_commit(temp.path());

        let output = RecentCommitsTool
            .execute(json!({"count": 3}), temp.path())
            .await
            .unwrap();
        assert!(output.contains("Tester"));
        assert!(output.contains("add main"));
    }

    #[tokio::test]
    async fn test_recent_commits_tool_huge_count() {
        let temp = TempDir::new().unwrap();
        init_repo_with_commit(temp.path());

        // Model-supplied arguments are untrusted; an enormous count must
        // not abort the run.
        let output = RecentCommitsTool
            .execute(json!({"count": u64::MAX}), temp.path())
            .await
            .unwrap();
        assert!(output.contains("add main"));
    }

    #[tokio::test]
    async fn test_recent_commits_tool_empty_repo() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();

        let output = RecentCommitsTool
            .execute(json!({}), temp.path())
            .await
            .unwrap();
        assert_eq!(output, "No commits yet");
    }

    #[tokio::test]
    async fn test_project_tree_tool() {
        let temp = TempDir::new().unwrap();
        init_repo_with_commit(temp.path());

        let output = ProjectTreeTool
            .execute(json!({}), temp.path())
            .await
            .unwrap();
        assert!(output.contains("main.rs"));
        assert!(output.contains("1 files, 1 directories"));
    }

    #[tokio::test]
    async fn test_tools_outside_repository_fail() {
        let temp = TempDir::new().unwrap();
        let result = RepoStatusTool.execute(json!({}), temp.path()).await;
        assert!(result.is_err());
    }
}
