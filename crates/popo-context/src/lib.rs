//! Working-tree serialization and prompt assembly for popo
//!
//! Builds the project context document fed to the agent: a markdown-style
//! directory tree, an XML rendering of the repository snapshot, and the
//! prompt templates the context is substituted into.

pub mod context;
pub mod error;
pub mod template;
pub mod tree;
pub mod xml;

pub use context::{ContextOptions, ProjectContext};
pub use error::{Error, Result};
pub use template::{load_template, render_template};
pub use tree::{DEFAULT_IGNORES, ProjectTree, TreeStats};
