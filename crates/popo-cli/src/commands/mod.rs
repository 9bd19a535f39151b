//! Command implementations

use std::path::{Path, PathBuf};

mod ask;
mod check;
mod context;
mod tools;

pub use ask::{AskOptions, run_ask};
pub use check::run_check;
pub use context::run_context;
pub use tools::run_tools;

/// Prompt template override directory (`prompts/` next to the working
/// directory), when it exists.
fn template_override_dir(cwd: &Path) -> Option<PathBuf> {
    let dir = cwd.join("prompts");
    dir.is_dir().then_some(dir)
}
