//! Tool trait and registry.
//!
//! Tools are the agent's only way to act. Each tool exposes a JSON schema
//! for its parameters; the registry exports the schemas in the shape the
//! chat-completions API expects.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::{Error, Result};

mod repo;
mod time;

pub use repo::{ProjectTreeTool, RecentCommitsTool, RepoStatusTool};
pub use time::CurrentTimeTool;

/// A callable tool exposed to the model.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Machine name used in tool calls
    fn name(&self) -> &str;

    /// Human-readable description shown to the model
    fn description(&self) -> &str;

    /// JSON schema of the accepted arguments
    fn parameters_schema(&self) -> Value;

    /// Execute with the given arguments in the given workspace.
    async fn execute(&self, args: Value, workspace: &Path) -> Result<String>;
}

/// Name-keyed collection of tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Empty registry (prompt-context-only mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the canned example tools.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CurrentTimeTool));
        registry.register(Box::new(RepoStatusTool));
        registry.register(Box::new(RecentCommitsTool));
        registry.register(Box::new(ProjectTreeTool));
        registry
    }

    /// Add a tool, replacing any existing tool of the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Name/description pairs, in name order.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.tools
            .values()
            .map(|t| (t.name(), t.description()))
            .collect()
    }

    /// Tool schemas in the request-body shape of the completions API.
    pub fn schemas(&self) -> Vec<Value> {
        self.tools
            .values()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name(),
                        "description": t.description(),
                        "parameters": t.parameters_schema(),
                    }
                })
            })
            .collect()
    }

    /// Execute a tool by name.
    pub async fn execute(&self, name: &str, args: Value, workspace: &Path) -> Result<String> {
        let tool = self.tools.get(name).ok_or_else(|| Error::UnknownTool {
            name: name.to_string(),
        })?;

        tracing::debug!(tool = name, "Executing tool");
        tool.execute(args, workspace).await
    }
}
