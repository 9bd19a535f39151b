//! Project context assembly.
//!
//! Single-use record built once per CLI invocation: repository snapshot,
//! rendered directory tree, and root-level project markers.

use std::path::Path;

use serde::Serialize;

use popo_git::RepoSnapshot;

use crate::Result;
use crate::tree::{DEFAULT_IGNORES, ProjectTree};
use crate::xml;

/// Options controlling context assembly.
#[derive(Debug, Clone)]
pub struct ContextOptions {
    /// How many recent commits to include
    pub max_commits: usize,

    /// Directory names to skip during the tree walk
    pub ignores: Vec<String>,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            max_commits: 5,
            ignores: DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Everything the agent prompt knows about the repository.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectContext {
    /// Git metadata snapshot
    pub snapshot: RepoSnapshot,

    /// Rendered working tree
    pub tree: ProjectTree,

    /// Whether a README file exists at the root
    pub has_readme: bool,

    /// Whether a Makefile exists at the root
    pub has_makefile: bool,
}

const README_NAMES: &[&str] = &["README", "README.md", "readme", "readme.md"];
const MAKEFILE_NAMES: &[&str] = &["Makefile", "makefile"];

impl ProjectContext {
    /// Assemble the context by discovering the repository from `cwd`.
    pub fn assemble(cwd: &Path, options: &ContextOptions) -> Result<Self> {
        let snapshot = RepoSnapshot::gather(cwd, options.max_commits)?;

        let ignores: Vec<&str> = options.ignores.iter().map(String::as_str).collect();
        let tree = ProjectTree::build(&snapshot.root_path, &ignores)?;

        let has_readme = any_exists(&snapshot.root_path, README_NAMES);
        let has_makefile = any_exists(&snapshot.root_path, MAKEFILE_NAMES);

        tracing::debug!(
            files = tree.stats.files,
            directories = tree.stats.directories,
            "Assembled project context"
        );

        Ok(Self {
            snapshot,
            tree,
            has_readme,
            has_makefile,
        })
    }

    /// Serialize the context into the XML document embedded in prompts.
    pub fn to_xml(&self) -> String {
        xml::render(self)
    }
}

/// Check whether any of `names` exists directly under `root`.
fn any_exists(root: &Path, names: &[&str]) -> bool {
    names.iter().any(|name| root.join(name).exists())
}
