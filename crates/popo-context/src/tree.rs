//! Markdown-style directory tree rendering.
//!
//! Depth-first traversal of the working tree with classic box-drawing
//! prefix bookkeeping. File and directory counts are accumulated during
//! the same pass; ignored directories contribute nothing.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::Result;

/// Directory names excluded from the tree and the counts.
pub const DEFAULT_IGNORES: &[&str] = &[
    ".git",
    "target",
    "node_modules",
    "__pycache__",
    ".idea",
    ".vscode",
];

/// Entry counts accumulated during traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Total files under the root (ignored directories excluded)
    pub files: usize,

    /// Total directories, the root itself included
    pub directories: usize,
}

/// A rendered directory tree plus its entry counts.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectTree {
    /// Indented markdown-style listing
    pub rendered: String,

    /// Entry counts
    pub stats: TreeStats,
}

impl ProjectTree {
    /// Build a tree for `root` with the default ignore set.
    pub fn build_default(root: &Path) -> Result<Self> {
        Self::build(root, DEFAULT_IGNORES)
    }

    /// Build a tree for `root`, skipping entries whose name is in `ignores`.
    ///
    /// Entries are visited in name order so the output is identical across
    /// runs for an unchanged working tree.
    pub fn build(root: &Path, ignores: &[&str]) -> Result<Self> {
        let ignore_set: HashSet<&str> = ignores.iter().copied().collect();

        let root_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());

        let mut rendered = format!("- {root_name}/\n");
        let mut stats = TreeStats {
            files: 0,
            directories: 1,
        };

        walk(root, "", &mut rendered, &mut stats, &ignore_set)?;

        Ok(Self { rendered, stats })
    }
}

/// Append one directory level to `out`, recursing into subdirectories.
fn walk(
    dir: &Path,
    prefix: &str,
    out: &mut String,
    stats: &mut TreeStats,
    ignores: &HashSet<&str>,
) -> Result<()> {
    let mut children: Vec<(String, bool)> = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if ignores.contains(name.as_str()) {
            continue;
        }
        let is_dir = entry.file_type()?.is_dir();
        children.push((name, is_dir));
    }

    children.sort_by(|a, b| a.0.cmp(&b.0));

    let count = children.len();
    for (i, (name, is_dir)) in children.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };

        if is_dir {
            stats.directories += 1;
            out.push_str(&format!("{prefix}{connector}{name}/\n"));

            let child_prefix = if is_last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            walk(&dir.join(&name), &child_prefix, out, stats, ignores)?;
        } else {
            stats.files += 1;
            out.push_str(&format!("{prefix}{connector}{name}\n"));
        }
    }

    Ok(())
}
